//! Scenario evaluation: resolve configured bodies against an emitter and run
//! the radiation pressure kernel on each.
//!
//! The kernel itself performs no validation; the preconditions it trusts
//! (positive mass, non-zero separation) are enforced here, on the caller's
//! side of the boundary.

use srp_config::{EmitterConfig, ScenarioBodyConfig, ScenarioConfig};
use srp_core::vector::{self, Vector3};
use srp_radiation::pressure::{self, BodyProperties, ReferencePressure};

/// Evaluated acceleration for one configured body.
#[derive(Debug, Clone)]
pub struct BodyAcceleration {
    pub name: String,
    /// Emitter-to-body separation (m).
    pub distance_m: f64,
    pub shadow_factor: f64,
    /// Acceleration vector in the scenario frame (m/s²), reference sign
    /// convention (negate for the outward push reading).
    pub acceleration_m_s2: Vector3,
    pub magnitude_m_s2: f64,
    /// Force on the body (N), same convention.
    pub force_n: Vector3,
}

/// Scenario-level validation and evaluation errors.
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("scenario '{0}' lists no bodies")]
    Empty(String),
    #[error("body '{0}' has non-positive mass")]
    NonPositiveMass(String),
    #[error("body '{0}' coincides with the emitter")]
    CoincidentWithEmitter(String),
}

/// Evaluate every body in the scenario against its emitter.
pub fn evaluate(scenario: &ScenarioConfig) -> Result<Vec<BodyAcceleration>, ScenarioError> {
    if scenario.bodies.is_empty() {
        return Err(ScenarioError::Empty(scenario.name.clone()));
    }
    scenario
        .bodies
        .iter()
        .map(|body| evaluate_body(&scenario.emitter, body))
        .collect()
}

/// Evaluate a single configured body against an emitter.
///
/// The shadow factor is forwarded to the kernel untouched; values outside
/// [0, 1] are the manifest author's statement, not ours to clamp.
pub fn evaluate_body(
    emitter: &EmitterConfig,
    body: &ScenarioBodyConfig,
) -> Result<BodyAcceleration, ScenarioError> {
    if body.mass_kg <= 0.0 {
        return Err(ScenarioError::NonPositiveMass(body.name.clone()));
    }

    let offset = vector::sub(&body.position_m, &emitter.position_m);
    let distance = vector::norm(&offset);
    if distance == 0.0 {
        return Err(ScenarioError::CoincidentWithEmitter(body.name.clone()));
    }

    let reference = ReferencePressure {
        pressure_n_m2: emitter.reference_pressure_n_m2,
        distance_m: emitter.reference_distance_m,
    };
    let properties = BodyProperties {
        area_m2: body.area_m2,
        mass_kg: body.mass_kg,
        emissivity: body.emissivity,
    };

    let acceleration = pressure::acceleration(
        &body.position_m,
        &emitter.position_m,
        reference,
        properties,
        body.shadow_factor,
    );

    Ok(BodyAcceleration {
        name: body.name.clone(),
        distance_m: distance,
        shadow_factor: body.shadow_factor,
        acceleration_m_s2: acceleration,
        magnitude_m_s2: vector::norm(&acceleration),
        force_n: vector::scale(&acceleration, body.mass_kg),
    })
}
