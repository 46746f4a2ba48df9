use chrono::{DateTime, Datelike, NaiveDate, Offset, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::services::calendar::date_to_jd;

// ─── Calendar input ──────────────────────────────────────────────────────────

/// A calendar date in astronomical year numbering (year 0 = 1 BCE).
///
/// `day` may carry a fractional time of day. The Julian or Gregorian calendar
/// is chosen from the date itself; see [`date_to_jd`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalendarDate {
    pub year: i32,
    /// 1 = January … 12 = December
    pub month: u32,
    pub day: f64,
}

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: f64) -> Self {
        Self { year, month, day }
    }

    /// Midnight at the start of `date`.
    pub fn from_naive_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month(), date.day() as f64)
    }

    pub fn julian_day(&self) -> f64 {
        date_to_jd(self.year, self.month, self.day)
    }
}

// ─── Observation instant and place ───────────────────────────────────────────

/// Where and when the sun is observed.
///
/// Clock fields are local civil time; `timezone` is the offset of that clock
/// from UTC in hours (east positive, e.g. −7.0 for MST).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Geographic latitude (−90 … +90)
    pub lat: f64,
    /// Geographic longitude (−180 … +180), east positive
    pub lon: f64,
    pub timezone: f64,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// 24-hour clock (0 … 23)
    pub hour: u32,
    /// Minutes past the hour, may be fractional (0 … <60)
    pub minute: f64,
}

impl Observation {
    /// Splits a `chrono` date-time into observation fields.
    ///
    /// The date-time's own UTC offset becomes `timezone`; seconds and
    /// sub-second precision are folded into the fractional `minute`.
    pub fn from_datetime<Tz: TimeZone>(lat: f64, lon: f64, dt: &DateTime<Tz>) -> Self {
        let local = dt.naive_local();
        let offset_s = dt.offset().fix().local_minus_utc();
        let minute = local.minute() as f64
            + local.second() as f64 / 60.0
            + local.nanosecond() as f64 / 60.0e9;

        Self {
            lat,
            lon,
            timezone: offset_s as f64 / 3600.0,
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute,
        }
    }
}

// ─── Engine output ───────────────────────────────────────────────────────────

/// Apparent sun position for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolarPosition {
    /// Refraction-corrected elevation angle (deg)
    pub elevation: f64,
    /// Degrees clockwise from north, wrapped into [0, 360).
    /// NaN when the sun sits exactly at the zenith or nadir.
    pub azimuth: f64,
    /// Julian Day of the instant, including the time of day (UTC)
    pub julian_day: f64,
}

/// Full pipeline result for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrradianceEstimate {
    pub position: SolarPosition,
    pub air_mass: f64,
    pub transmittance: f64,
    /// Direct normal extraterrestrial irradiance (W/m²)
    pub extraterrestrial_w_m2: f64,
    /// Direct beam irradiance on a horizontal surface (W/m²).
    /// Negative when the sun is below the horizon; not clamped.
    pub irradiance_w_m2: f64,
    pub is_day: bool,
}
