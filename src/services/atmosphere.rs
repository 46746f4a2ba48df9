// ─── Atmospheric attenuation ─────────────────────────────────
//
// Elevation → relative optical air mass → direct-beam transmittance.

/// Relative optical air mass for a sun at elevation `h` (deg).
///
/// Spherical-shell approximation, `sqrt(1229 + (614 sin h)²) − 614 sin h`.
/// Exactly 1 at the zenith and still defined below the horizon, where it
/// keeps growing; whether such values mean anything is up to the caller.
pub fn air_mass(h: f64) -> f64 {
    let s = 614.0 * h.to_radians().sin();
    (1229.0 + s.powi(2)).sqrt() - s
}

/// Fraction of extraterrestrial direct irradiance that survives a path of
/// air mass `m`. Reaches 1.12 at `m = 0`; not clamped to 1.
pub fn transmittance(m: f64) -> f64 {
    0.56 * ((-0.65 * m).exp() + (-0.095 * m).exp())
}
