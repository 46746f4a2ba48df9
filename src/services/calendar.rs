/// ============================================================
///  Calendar date → Julian Day
///
///  Duffett-Smith & Zwart, "Practical Astronomy with your
///  Calculator or Spreadsheet", 4th ed. (2011).
///
///  Dates strictly before 1582-10-15 are read as proleptic Julian,
///  anything on or after as Gregorian.
/// ============================================================

// ─── Constants ───────────────────────────────────────────────
const JD_OFFSET: f64 = 1_720_994.5;

/// First day of the Gregorian calendar as (year, month, day).
const GREGORIAN_START: (i32, u32, f64) = (1582, 10, 15.0);

/// Converts a calendar date to a Julian Day.
///
/// * `year`  – astronomical numbering: 1 BCE is year 0, 10 BCE is year −9
/// * `month` – 1 = January … 12 = December
/// * `day`   – day of month, may carry a fractional time of day
///
/// Every intermediate term is truncated toward zero, never floored.
/// A month outside 1–12 is not rejected and yields a meaningless value.
pub fn date_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (yearp, monthp) = if month == 1 || month == 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };

    let b = if is_julian_calendar(year, month, day) {
        0.0
    } else {
        let a = (yearp / 100.0).trunc();
        2.0 - a + (a / 4.0).trunc()
    };

    let c = if yearp < 0.0 {
        (365.25 * yearp - 0.75).trunc()
    } else {
        (365.25 * yearp).trunc()
    };

    let d = (30.6001 * (monthp + 1.0)).trunc();

    b + c + d + day + JD_OFFSET
}

/// True when the date falls strictly before the Gregorian reform.
fn is_julian_calendar(year: i32, month: u32, day: f64) -> bool {
    let (g_year, g_month, g_day) = GREGORIAN_START;
    year < g_year
        || (year == g_year && month < g_month)
        || (year == g_year && month == g_month && day < g_day)
}
