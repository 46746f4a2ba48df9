//! Batched evaluation over aligned samples.
//!
//! Each function maps the scalar routine over its input in parallel.
//! Output order matches input order and every element is identical to
//! the scalar call.

use rayon::prelude::*;

use crate::models::solar::{IrradianceEstimate, Observation, SolarPosition};
use crate::services::atmosphere::{air_mass, transmittance};
use crate::services::irradiance::{estimate, irradiance};
use crate::services::solar_algorithm::solar_position;

pub fn solar_angles_batch(observations: &[Observation]) -> Vec<SolarPosition> {
    vlog!("[BATCH] solar_angles over {} observations", observations.len());
    observations.par_iter().map(solar_position).collect()
}

pub fn air_mass_batch(elevations: &[f64]) -> Vec<f64> {
    elevations.par_iter().map(|&h| air_mass(h)).collect()
}

pub fn transmittance_batch(air_masses: &[f64]) -> Vec<f64> {
    air_masses.par_iter().map(|&m| transmittance(m)).collect()
}

/// Pairs `elevations[i]` with `julian_days[i]`. A length mismatch truncates
/// to the shorter slice.
pub fn irradiance_batch(elevations: &[f64], julian_days: &[f64]) -> Vec<f64> {
    if elevations.len() != julian_days.len() {
        vlog!(
            "[BATCH] irradiance inputs differ in length ({} vs {}), truncating",
            elevations.len(),
            julian_days.len()
        );
    }
    elevations
        .par_iter()
        .zip(julian_days.par_iter())
        .map(|(&h, &jd)| irradiance(h, jd))
        .collect()
}

pub fn estimate_batch(observations: &[Observation]) -> Vec<IrradianceEstimate> {
    vlog!("[BATCH] estimate over {} observations", observations.len());
    observations.par_iter().map(estimate).collect()
}
