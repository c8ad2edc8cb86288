//! Distance sweep sampling for the radiation pressure magnitude.

use serde::Serialize;

use crate::pressure::{BodyProperties, ReferencePressure, magnitude_at};

/// Inputs describing a uniform sweep of emitter-to-receiver distances.
#[derive(Debug, Clone)]
pub struct SweepInputs {
    pub reference: ReferencePressure,
    pub body: BodyProperties,
    pub shadow_factor: f64,
    pub start_distance_m: f64,
    pub end_distance_m: f64,
    pub samples: usize,
}

/// Per-sample record for the sweep.
#[derive(Debug, Clone, Serialize)]
pub struct SweepSample {
    pub distance_m: f64,
    pub acceleration_m_s2: f64,
    pub force_n: f64,
}

/// Summary metrics for the computed sweep.
#[derive(Debug, Clone)]
pub struct SweepSummary {
    pub peak_acceleration_m_s2: f64,
    pub floor_acceleration_m_s2: f64,
    pub samples: Vec<SweepSample>,
}

/// Sample the acceleration magnitude over a uniformly spaced distance range.
/// Returns `None` for degenerate inputs: non-positive or inverted distance
/// bounds, fewer than two samples, or a non-positive mass.
pub fn magnitude_profile(inputs: &SweepInputs) -> Option<SweepSummary> {
    if inputs.start_distance_m <= 0.0 || inputs.end_distance_m <= inputs.start_distance_m {
        return None;
    }
    if inputs.samples < 2 || inputs.body.mass_kg <= 0.0 {
        return None;
    }

    let span = inputs.end_distance_m - inputs.start_distance_m;
    let step = span / (inputs.samples - 1) as f64;

    let mut samples = Vec::with_capacity(inputs.samples);
    for index in 0..inputs.samples {
        let distance = inputs.start_distance_m + step * index as f64;
        let magnitude = magnitude_at(distance, inputs.reference, inputs.body, inputs.shadow_factor);
        samples.push(SweepSample {
            distance_m: distance,
            acceleration_m_s2: magnitude,
            force_n: magnitude * inputs.body.mass_kg,
        });
    }

    // Magnitude falls off monotonically with distance, so the endpoints carry
    // the extremes.
    let peak = samples.first().map(|s| s.acceleration_m_s2)?;
    let floor = samples.last().map(|s| s.acceleration_m_s2)?;

    Some(SweepSummary {
        peak_acceleration_m_s2: peak,
        floor_acceleration_m_s2: floor,
        samples,
    })
}
