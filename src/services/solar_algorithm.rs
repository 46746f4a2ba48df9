/// ============================================================
///  NOAA Solar Position Engine
///
///  Algorithm pipeline (NOAA solar calculator spreadsheet):
///   1. Time          – Julian Day, decimal hours, Julian century
///   2. Orbit         – geometric mean longitude & anomaly,
///                      eccentricity of Earth's orbit
///   3. Longitude     – equation of center, true & apparent
///                      longitude, corrected obliquity
///   4. Declination   – from obliquity and apparent longitude
///   5. Solar time    – equation of time, true solar time,
///                      hour angle
///   6. Elevation     – zenith angle, atmospheric refraction
///   7. Azimuth       – degrees clockwise from north
/// ============================================================

use crate::models::solar::{Observation, SolarPosition};
use crate::services::calendar::date_to_jd;

// ─── Constants ───────────────────────────────────────────────
const J2000: f64 = 2_451_545.0;
const DAYS_PER_CENTURY: f64 = 36_525.0;
const MINUTES_PER_DAY: f64 = 1440.0;

/// Main entry point.
///
/// * `lat`, `lon` – geographic coordinates in degrees (east positive)
/// * `timezone`   – offset of the local clock from UTC, hours
/// * `year`, `month`, `day` – local calendar date
/// * `hour`, `minute` – local 24-hour clock time, `minute` may be fractional
///
/// When the sun sits exactly at the zenith or nadir the azimuth is NaN
/// (0/0 inside the arccosine); this is not masked.
#[allow(clippy::too_many_arguments)]
pub fn solar_angles(
    lat: f64,
    lon: f64,
    timezone: f64,
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: f64,
) -> SolarPosition {
    // ── 1. Time ────────────────────────────────────────────────
    let julian_day = date_to_jd(year, month, day as f64);
    let time = hour as f64 + minute / 60.0; // decimal hours
    let jd = julian_day + time / 24.0 - timezone / 24.0;
    let jc = (jd - J2000) / DAYS_PER_CENTURY;

    // ── 2. Orbit ───────────────────────────────────────────────
    let mean_long_sun = (280.46646 + jc * (36000.76983 + jc * 0.0003032)).rem_euclid(360.0);
    let mean_anom_sun = 357.52911 + jc * (35999.05029 - 0.0001537 * jc);
    let ecc = 0.016708634 - jc * (0.000042307 + 0.0000001267 * jc);

    // ── 3. Longitude & obliquity ───────────────────────────────
    let eq = sin_deg(mean_anom_sun) * (1.914602 - jc * (0.004817 + 0.000014 * jc))
        + sin_deg(2.0 * mean_anom_sun) * (0.019993 - 0.000101 * jc)
        + sin_deg(3.0 * mean_anom_sun) * 0.000289;
    let true_long_sun = mean_long_sun + eq;

    let omega = 125.04 - 1934.136 * jc;
    let app_long = true_long_sun - 0.00569 - 0.00478 * sin_deg(omega);

    let obliq = 23.0 + (26.0 + (21.448 - jc * (46.815 + jc * (0.00059 - jc * 0.001813))) / 60.0) / 60.0;
    let obliq_corr = obliq + 0.00256 * cos_deg(omega);

    // ── 4. Declination ─────────────────────────────────────────
    let dec = (sin_deg(obliq_corr) * sin_deg(app_long)).asin().to_degrees();

    // ── 5. Solar time ──────────────────────────────────────────
    let var_y = tan_deg(obliq_corr / 2.0) * tan_deg(obliq_corr / 2.0);
    let l0 = mean_long_sun.to_radians();
    let m = mean_anom_sun.to_radians();
    let eot = 4.0
        * (var_y * (2.0 * l0).sin() - 2.0 * ecc * m.sin()
            + 4.0 * ecc * var_y * m.sin() * (2.0 * l0).cos()
            - 0.5 * var_y * var_y * (4.0 * l0).sin()
            - 1.25 * ecc * ecc * (2.0 * m).sin())
        .to_degrees(); // minutes

    let true_solar_time =
        (time / 24.0 * MINUTES_PER_DAY + eot + 4.0 * lon - 60.0 * timezone).rem_euclid(MINUTES_PER_DAY);
    let hra = hour_angle(true_solar_time);

    // ── 6. Elevation ───────────────────────────────────────────
    let zenith = (sin_deg(lat) * sin_deg(dec) + cos_deg(lat) * cos_deg(dec) * cos_deg(hra))
        .acos()
        .to_degrees();
    let h = 90.0 - zenith;
    let h_corr = h + refraction_correction(h);

    // ── 7. Azimuth ─────────────────────────────────────────────
    let azimuth = azimuth(lat, dec, zenith, hra);

    vlog!(
        "[SOLAR] jd={:.6} jc={:.10} mean_long={:.6} mean_anom={:.6} eot={:.4} tst={:.4} hra={:.4}",
        jd, jc, mean_long_sun, mean_anom_sun, eot, true_solar_time, hra
    );

    SolarPosition {
        elevation: h_corr,
        azimuth,
        julian_day: jd,
    }
}

/// [`solar_angles`] for a prepared [`Observation`].
pub fn solar_position(obs: &Observation) -> SolarPosition {
    solar_angles(
        obs.lat,
        obs.lon,
        obs.timezone,
        obs.year,
        obs.month,
        obs.day,
        obs.hour,
        obs.minute,
    )
}

// ─── Hour angle ──────────────────────────────────────────────
/// Hour angle (deg) from true solar time (minutes past solar midnight).
#[inline]
fn hour_angle(true_solar_time: f64) -> f64 {
    if true_solar_time / 4.0 < 0.0 {
        true_solar_time / 4.0 + 180.0
    } else {
        true_solar_time / 4.0 - 180.0
    }
}

// ─── Azimuth ─────────────────────────────────────────────────
/// Degrees clockwise from north. Afternoon (positive hour angle) and
/// morning resolve the arccosine into opposite halves of the circle.
fn azimuth(lat: f64, dec: f64, zenith: f64, hra: f64) -> f64 {
    let x = (((sin_deg(lat) * cos_deg(zenith)) - sin_deg(dec)) / (cos_deg(lat) * sin_deg(zenith)))
        .acos()
        .to_degrees();
    if hra > 0.0 {
        (x + 180.0).rem_euclid(360.0)
    } else {
        (540.0 - x).rem_euclid(360.0)
    }
}

// ─── Atmospheric refraction ──────────────────────────────────
/// Elevation bands of the refraction approximation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefractionBand {
    /// h ≥ 85°: negligible
    NearZenith,
    /// 5° ≤ h < 85°: cotangent series
    High,
    /// −0.575° ≤ h < 5°: quartic polynomial in h
    Low,
    /// h < −0.575°
    BelowHorizon,
}

impl RefractionBand {
    /// Band containing the geometric elevation `h` (deg). NaN maps to
    /// `BelowHorizon`, whose formula carries the NaN through.
    pub fn of(h: f64) -> Self {
        if h >= 85.0 {
            RefractionBand::NearZenith
        } else if h >= 5.0 {
            RefractionBand::High
        } else if h >= -0.575 {
            RefractionBand::Low
        } else {
            RefractionBand::BelowHorizon
        }
    }
}

/// Refraction correction (deg) to add to the geometric elevation `h` (deg).
pub fn refraction_correction(h: f64) -> f64 {
    let arcsec = match RefractionBand::of(h) {
        RefractionBand::NearZenith => 0.0,
        RefractionBand::High => {
            let t = tan_deg(h);
            58.1 / t - 0.07 / t.powi(3) + 0.000086 / t.powi(5)
        }
        RefractionBand::Low => {
            1735.0 - 518.2 * h + 103.4 * h.powi(2) - 12.79 * h.powi(3) + 0.711 * h.powi(4)
        }
        RefractionBand::BelowHorizon => -20.774 / tan_deg(h),
    };
    (1.0 / 3600.0) * arcsec
}

// ─── Degree trigonometry ─────────────────────────────────────
#[inline]
fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

#[inline]
fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

#[inline]
fn tan_deg(x: f64) -> f64 {
    x.to_radians().tan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_summer_solstice_boulder() {
        // Boulder, CO – summer solstice, 12:00 MST (UTC−7)
        let p = solar_angles(40.0, -105.0, -7.0, 2020, 6, 21, 12, 0.0);
        assert!(p.elevation > 60.0, "Elevation should be >60° at summer noon, got {:.2}", p.elevation);
        assert!(p.azimuth > 150.0 && p.azimuth < 210.0, "Azimuth should be near south, got {:.2}", p.azimuth);
        // 40°N at solstice culminates near 90 − 40 + 23.44
        assert!((p.elevation - 73.4).abs() < 0.5, "Culmination off, got {:.2}", p.elevation);
    }

    #[test]
    fn test_winter_solstice_lower() {
        let summer = solar_angles(40.0, -105.0, -7.0, 2020, 6, 21, 12, 0.0);
        let winter = solar_angles(40.0, -105.0, -7.0, 2020, 12, 21, 12, 0.0);
        assert!(winter.elevation > 20.0 && winter.elevation < 35.0,
            "Winter elevation should be 20-35°, got {:.2}", winter.elevation);
        assert!(summer.elevation - winter.elevation > 40.0);
    }

    #[test]
    fn test_julian_day_includes_time_and_zone() {
        // 12:00 at UTC−7 is 19:00 UTC.
        let p = solar_angles(40.0, -105.0, -7.0, 2000, 1, 1, 12, 0.0);
        let expected = 2_451_544.5 + 19.0 / 24.0;
        assert!((p.julian_day - expected).abs() < 1e-9, "jd = {}", p.julian_day);
    }

    #[test]
    fn test_midnight_below_horizon() {
        let p = solar_angles(40.0, -105.0, -7.0, 2020, 6, 21, 0, 0.0);
        assert!(p.elevation < -10.0, "Sun should be well below the horizon, got {:.2}", p.elevation);
        // roughly due north at solar midnight
        assert!(p.azimuth < 30.0 || p.azimuth > 330.0, "azimuth = {:.2}", p.azimuth);
    }

    #[test]
    fn test_morning_east_afternoon_west() {
        let morning = solar_angles(40.0, -105.0, -7.0, 2020, 3, 20, 8, 0.0);
        let afternoon = solar_angles(40.0, -105.0, -7.0, 2020, 3, 20, 16, 0.0);
        assert!(morning.azimuth > 90.0 && morning.azimuth < 180.0, "morning az {:.2}", morning.azimuth);
        assert!(afternoon.azimuth > 180.0 && afternoon.azimuth < 270.0, "afternoon az {:.2}", afternoon.azimuth);
    }

    #[test]
    fn test_southern_hemisphere_sun_to_the_north() {
        // Sydney, 12:00 AEST (UTC+10) in June – the sun culminates to the north.
        let p = solar_angles(-33.87, 151.21, 10.0, 2021, 6, 21, 12, 0.0);
        assert!(p.elevation > 25.0 && p.elevation < 40.0, "elevation {:.2}", p.elevation);
        assert!(p.azimuth < 30.0 || p.azimuth > 330.0, "azimuth {:.2}", p.azimuth);
    }

    #[test]
    fn test_solar_position_matches_solar_angles() {
        let obs = Observation {
            lat: 45.07,
            lon: 7.69,
            timezone: 2.0,
            year: 2025,
            month: 6,
            day: 21,
            hour: 13,
            minute: 25.5,
        };
        assert_eq!(
            solar_position(&obs),
            solar_angles(45.07, 7.69, 2.0, 2025, 6, 21, 13, 25.5)
        );
    }

    #[test]
    fn test_hour_angle_branch() {
        assert_eq!(hour_angle(720.0), 0.0);
        assert_eq!(hour_angle(0.0), -180.0);
        assert_eq!(hour_angle(1080.0), 90.0);
        assert_eq!(hour_angle(-4.0), 179.0);
    }

    #[test]
    fn test_azimuth_degenerate_at_zenith() {
        // Zenith angle 0 → 0/0 inside the arccosine.
        assert!(azimuth(23.0, 23.0, 0.0, 0.0).is_nan());
    }

    #[test]
    fn test_refraction_bands() {
        assert_eq!(RefractionBand::of(90.0), RefractionBand::NearZenith);
        assert_eq!(RefractionBand::of(85.0), RefractionBand::NearZenith);
        assert_eq!(RefractionBand::of(84.999), RefractionBand::High);
        assert_eq!(RefractionBand::of(5.0), RefractionBand::High);
        assert_eq!(RefractionBand::of(4.999), RefractionBand::Low);
        assert_eq!(RefractionBand::of(-0.575), RefractionBand::Low);
        assert_eq!(RefractionBand::of(-0.576), RefractionBand::BelowHorizon);
        assert_eq!(RefractionBand::of(-45.0), RefractionBand::BelowHorizon);
    }

    #[test]
    fn test_refraction_at_horizon() {
        // Roughly 29 arc-minutes at the horizon.
        let n = refraction_correction(0.0);
        assert!((n - 1735.0 / 3600.0).abs() < 1e-12);
        assert!(refraction_correction(89.0) == 0.0);
    }

    #[test]
    fn test_corrected_elevation_continuous_at_band_edges() {
        let eps = 1e-9;
        for edge in [85.0, 5.0, -0.575] {
            let below = (edge - eps) + refraction_correction(edge - eps);
            let at = edge + refraction_correction(edge);
            assert!((at - below).abs() < 0.005,
                "Jump of {:.6}° in corrected elevation at h = {}", at - below, edge);
        }
    }

    proptest! {
        #[test]
        fn azimuth_in_range(
            lat in -89.0_f64..89.0,
            lon in -180.0_f64..180.0,
            timezone in -12.0_f64..14.0,
            year in 1900_i32..2100,
            month in 1_u32..=12,
            day in 1_u32..=28,
            hour in 0_u32..24,
            minute in 0.0_f64..60.0,
        ) {
            let p = solar_angles(lat, lon, timezone, year, month, day, hour, minute);
            prop_assert!(p.azimuth >= 0.0 && p.azimuth <= 360.0, "azimuth = {}", p.azimuth);
            prop_assert!(p.elevation >= -91.0 && p.elevation <= 90.0, "elevation = {}", p.elevation);
        }
    }
}
