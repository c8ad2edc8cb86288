use solar_radiation_pressure::radiation::pressure::{
    BodyProperties, ReferencePressure, magnitude_at,
};
use solar_radiation_pressure::radiation::sweep::{SweepInputs, magnitude_profile};

const AU: f64 = 1.49598e11;

const REFERENCE: ReferencePressure = ReferencePressure {
    pressure_n_m2: 4.56e-6,
    distance_m: AU,
};

const ULYSSES: BodyProperties = BodyProperties {
    area_m2: 10.59,
    mass_kg: 370.0,
    emissivity: 0.327,
};

fn inputs() -> SweepInputs {
    SweepInputs {
        reference: REFERENCE,
        body: ULYSSES,
        shadow_factor: 1.0,
        start_distance_m: 0.5 * AU,
        end_distance_m: 20.0 * AU,
        samples: 50,
    }
}

#[test]
fn profile_endpoints_match_the_kernel() {
    let summary = magnitude_profile(&inputs()).expect("valid sweep");
    assert_eq!(summary.samples.len(), 50);

    let first = summary.samples.first().unwrap();
    let last = summary.samples.last().unwrap();
    assert_eq!(first.distance_m, 0.5 * AU);
    assert!(
        (last.distance_m - 20.0 * AU).abs() < 1.0,
        "last distance = {} m",
        last.distance_m
    );

    let expected_first = magnitude_at(first.distance_m, REFERENCE, ULYSSES, 1.0);
    let expected_last = magnitude_at(last.distance_m, REFERENCE, ULYSSES, 1.0);
    assert_eq!(first.acceleration_m_s2, expected_first);
    assert_eq!(last.acceleration_m_s2, expected_last);

    assert_eq!(summary.peak_acceleration_m_s2, expected_first);
    assert_eq!(summary.floor_acceleration_m_s2, expected_last);
}

#[test]
fn profile_magnitude_decreases_with_distance() {
    let summary = magnitude_profile(&inputs()).expect("valid sweep");
    for window in summary.samples.windows(2) {
        assert!(
            window[1].acceleration_m_s2 < window[0].acceleration_m_s2,
            "magnitude must fall off with distance: {:e} then {:e}",
            window[0].acceleration_m_s2,
            window[1].acceleration_m_s2
        );
    }
}

#[test]
fn profile_scales_linearly_with_shadow_factor() {
    let lit = magnitude_profile(&inputs()).expect("valid sweep");

    let mut half_inputs = inputs();
    half_inputs.shadow_factor = 0.5;
    let half = magnitude_profile(&half_inputs).expect("valid sweep");

    for (l, h) in lit.samples.iter().zip(half.samples.iter()) {
        assert!(
            (h.acceleration_m_s2 - 0.5 * l.acceleration_m_s2).abs() < 1e-22,
            "at {} m: {:e} vs {:e}",
            l.distance_m,
            h.acceleration_m_s2,
            l.acceleration_m_s2
        );
    }
}

#[test]
fn force_column_is_acceleration_times_mass() {
    let summary = magnitude_profile(&inputs()).expect("valid sweep");
    for sample in &summary.samples {
        assert!(
            (sample.force_n - sample.acceleration_m_s2 * ULYSSES.mass_kg).abs()
                < sample.force_n.abs() * 1e-12,
            "at {} m",
            sample.distance_m
        );
    }
}

#[test]
fn degenerate_sweeps_yield_none() {
    let mut inverted = inputs();
    inverted.end_distance_m = 0.1 * AU;
    assert!(magnitude_profile(&inverted).is_none());

    let mut negative_start = inputs();
    negative_start.start_distance_m = -AU;
    assert!(magnitude_profile(&negative_start).is_none());

    let mut too_few = inputs();
    too_few.samples = 1;
    assert!(magnitude_profile(&too_few).is_none());

    let mut weightless = inputs();
    weightless.body.mass_kg = 0.0;
    assert!(magnitude_profile(&weightless).is_none());
}
