//! Acceleration imparted on a mass-bearing body by radiation pressure from a
//! single point source.
//!
//! The pressure measured at a reference distance is scaled by the inverse
//! square of the instantaneous emitter-to-receiver distance, combined with the
//! receiver's area-to-mass ratio and emissivity term, and attenuated by an
//! externally supplied illumination factor. The kernel is pure arithmetic: no
//! validation, no allocation, no state.

use srp_core::constants::SPEED_OF_LIGHT_M_S;
use srp_core::vector::{self, Vector3};

/// Reference calibration pair: the radiation pressure measured at a known
/// distance from the emitter (commonly one astronomical unit and the
/// corresponding solar pressure).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferencePressure {
    pub pressure_n_m2: f64,
    pub distance_m: f64,
}

/// Physical properties of the receiving body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyProperties {
    /// Cross-sectional area exposed to the incident radiation (m²).
    pub area_m2: f64,
    /// Body mass (kg). A zero mass divides to a non-finite result.
    pub mass_kg: f64,
    /// Emissivity term: 0 is a purely absorbing surface, larger values add
    /// reflected/re-emitted momentum through the (1 + eps) factor.
    pub emissivity: f64,
}

/// Radiation pressure exerted by a radiative flux on an absorbing surface,
/// `flux / c`. Handy for building a [`ReferencePressure`] from an irradiance
/// measurement such as the solar constant.
#[inline]
pub fn pressure_from_flux(flux_w_m2: f64) -> f64 {
    flux_w_m2 / SPEED_OF_LIGHT_M_S
}

/// Acceleration magnitude per unit mass at a given emitter-to-receiver
/// distance, before any directional information is applied.
///
/// Inputs:
/// - `distance_m`: instantaneous emitter-to-receiver separation (m)
/// - `reference`: pressure/distance calibration pair
/// - `body`: receiver area, mass, and emissivity
/// - `shadow_factor`: illumination attenuation, 1 fully lit, 0 eclipsed;
///   intermediate values model partial illumination and are never clamped
#[inline]
pub fn magnitude_at(
    distance_m: f64,
    reference: ReferencePressure,
    body: BodyProperties,
    shadow_factor: f64,
) -> f64 {
    let ratio = reference.distance_m / distance_m;
    let pressure = reference.pressure_n_m2 * ratio * ratio;
    shadow_factor * pressure * (1.0 + body.emissivity) * body.area_m2 / body.mass_kg
}

/// Compute the instantaneous radiation pressure acceleration on the receiver.
///
/// Both positions must be expressed in the same inertial frame. The returned
/// components carry the reference sign convention: `-magnitude * û` with `û`
/// the emitter-to-receiver unit vector, so callers recover the outward push
/// by negation.
///
/// Coincident positions leave the direction undefined; the division is left
/// to propagate in release builds.
pub fn acceleration(
    receiver_position_m: &Vector3,
    emitter_position_m: &Vector3,
    reference: ReferencePressure,
    body: BodyProperties,
    shadow_factor: f64,
) -> Vector3 {
    let offset = vector::sub(receiver_position_m, emitter_position_m);
    let distance = vector::norm(&offset);
    debug_assert!(distance > 0.0, "emitter and receiver positions coincide");

    let magnitude = magnitude_at(distance, reference, body, shadow_factor);
    vector::scale(&offset, -(magnitude / distance))
}

/// Radiation pressure force on the receiver, i.e. the acceleration scaled by
/// the body mass. Same frame and sign conventions as [`acceleration`].
pub fn force(
    receiver_position_m: &Vector3,
    emitter_position_m: &Vector3,
    reference: ReferencePressure,
    body: BodyProperties,
    shadow_factor: f64,
) -> Vector3 {
    let accel = acceleration(
        receiver_position_m,
        emitter_position_m,
        reference,
        body,
        shadow_factor,
    );
    vector::scale(&accel, body.mass_kg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use srp_core::constants::{AU_M, SOLAR_PRESSURE_AU_N_M2};

    const REFERENCE: ReferencePressure = ReferencePressure {
        pressure_n_m2: SOLAR_PRESSURE_AU_N_M2,
        distance_m: AU_M,
    };

    #[test]
    fn magnitude_matches_reference_pressure_at_reference_distance() {
        let body = BodyProperties {
            area_m2: 0.02,
            mass_kg: 1.0,
            emissivity: 0.0,
        };
        // Absorbing unit mass at d_ref: magnitude is P_ref * A.
        let mag = magnitude_at(AU_M, REFERENCE, body, 1.0);
        assert!((mag - SOLAR_PRESSURE_AU_N_M2 * 0.02).abs() < 1e-22, "mag = {mag}");
    }

    #[test]
    fn solar_constant_flux_lands_near_the_benchmark_pressure() {
        // ~1361 W/m² at 1 AU corresponds to a pressure within a couple of
        // percent of the calibrated benchmark value.
        let p = pressure_from_flux(1361.0);
        assert!((p - SOLAR_PRESSURE_AU_N_M2).abs() < 5e-8, "p = {p:e}");
    }

    #[test]
    fn acceleration_is_antiparallel_to_emitter_receiver_direction() {
        let receiver = [0.4 * AU_M, -1.1 * AU_M, 0.3 * AU_M];
        let body = BodyProperties {
            area_m2: 4.0,
            mass_kg: 100.0,
            emissivity: 0.3,
        };
        let accel = acceleration(&receiver, &[0.0; 3], REFERENCE, body, 1.0);

        let cosine = vector::dot(&accel, &receiver) / (vector::norm(&accel) * vector::norm(&receiver));
        assert!((cosine + 1.0).abs() < 1e-12, "cosine = {cosine}");
    }

    #[test]
    fn force_is_acceleration_times_mass() {
        let receiver = [AU_M, 0.0, 0.0];
        let body = BodyProperties {
            area_m2: 10.59,
            mass_kg: 370.0,
            emissivity: 0.327,
        };
        let accel = acceleration(&receiver, &[0.0; 3], REFERENCE, body, 1.0);
        let f = force(&receiver, &[0.0; 3], REFERENCE, body, 1.0);
        for axis in 0..3 {
            assert!((f[axis] - accel[axis] * 370.0).abs() < 1e-18);
        }
    }

    #[test]
    fn emitter_offset_shifts_the_geometry() {
        // Same separation, different frames: results must agree.
        let centered = acceleration(
            &[AU_M, 0.0, 0.0],
            &[0.0; 3],
            REFERENCE,
            BodyProperties {
                area_m2: 2.0,
                mass_kg: 4.0,
                emissivity: 0.3,
            },
            1.0,
        );
        let shifted = acceleration(
            &[1.5 * AU_M, 2.0 * AU_M, -AU_M],
            &[0.5 * AU_M, 2.0 * AU_M, -AU_M],
            REFERENCE,
            BodyProperties {
                area_m2: 2.0,
                mass_kg: 4.0,
                emissivity: 0.3,
            },
            1.0,
        );
        for axis in 0..3 {
            assert!((centered[axis] - shifted[axis]).abs() < 1e-18);
        }
    }
}
