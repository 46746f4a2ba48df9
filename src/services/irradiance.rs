/// ============================================================
///  Surface irradiance estimator
///
///   1. Air mass & transmittance from the elevation angle
///   2. Extraterrestrial irradiance – solar constant with an
///                                    Earth–Sun distance term
///   3. Direct beam on a horizontal plane
/// ============================================================

use crate::models::solar::{IrradianceEstimate, Observation};
use crate::services::atmosphere::{air_mass, transmittance};
use crate::services::solar_algorithm::solar_position;

// ─── Physical constants ──────────────────────────────────────
const SC: f64 = 1367.0; // Solar constant W/m²

/// Direct normal extraterrestrial irradiance (W/m²).
///
/// The seasonal term takes the Julian Day as-is rather than a day of year,
/// so its phase is not tied to perihelion. Kept for compatibility with
/// existing results.
pub fn extraterrestrial_irradiance(julian_day: f64) -> f64 {
    SC * (1.0 + 0.034 * (360.0 * julian_day / 365.0).to_radians().cos())
}

/// Direct solar irradiance (W/m²) on a horizontal surface for a sun at
/// `elevation` (deg) on `julian_day`.
///
/// Scaled by `cos(90° − elevation)`, so the result is ~0 at the horizon
/// and negative below it.
pub fn irradiance(elevation: f64, julian_day: f64) -> f64 {
    let m = air_mass(elevation);
    let tau = transmittance(m);
    let io = extraterrestrial_irradiance(julian_day);
    io * tau * (90.0 - elevation).to_radians().cos()
}

/// Runs the whole pipeline for one observation.
pub fn estimate(obs: &Observation) -> IrradianceEstimate {
    let position = solar_position(obs);
    let m = air_mass(position.elevation);

    IrradianceEstimate {
        position,
        air_mass: m,
        transmittance: transmittance(m),
        extraterrestrial_w_m2: extraterrestrial_irradiance(position.julian_day),
        irradiance_w_m2: irradiance(position.elevation, position.julian_day),
        is_day: position.elevation > 0.0,
    }
}
