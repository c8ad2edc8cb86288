//! Radiation pressure acceleration model in the point-source, inverse-square limit.

pub mod pressure;
pub mod sweep;

pub use pressure::{
    BodyProperties, ReferencePressure, acceleration, force, magnitude_at, pressure_from_flux,
};
