//! Sun position, air mass and surface irradiance.
//!
//! The numeric pipeline runs calendar date → Julian Day → (NOAA solar
//! geometry) elevation & azimuth → air mass → transmittance → irradiance.
//! Every routine is a pure function of its arguments.
//!
//! ```
//! use sun_equations::{air_mass, irradiance, solar_angles};
//!
//! // Boulder, CO on the 2020 summer solstice, 12:00 MST (UTC-7).
//! let pos = solar_angles(40.0, -105.0, -7.0, 2020, 6, 21, 12, 0.0);
//! assert!(pos.elevation > 60.0);
//!
//! let m = air_mass(pos.elevation);
//! let ioh = irradiance(pos.elevation, pos.julian_day);
//! assert!(m > 1.0 && ioh > 0.0);
//! ```

/// Diagnostic output, compiled in only with the `verbose_log` feature.
#[cfg(feature = "verbose_log")]
macro_rules! vlog {
    ($($arg:tt)*) => {
        println!($($arg)*)
    };
}

#[cfg(not(feature = "verbose_log"))]
macro_rules! vlog {
    ($($arg:tt)*) => {};
}

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::{Config, SiteConfig};
pub use error::ConfigError;
pub use models::solar::{CalendarDate, IrradianceEstimate, Observation, SolarPosition};
pub use services::atmosphere::{air_mass, transmittance};
pub use services::batch::{
    air_mass_batch, estimate_batch, irradiance_batch, solar_angles_batch, transmittance_batch,
};
pub use services::calendar::date_to_jd;
pub use services::irradiance::{estimate, extraterrestrial_irradiance, irradiance};
pub use services::solar_algorithm::{
    RefractionBand, refraction_correction, solar_angles, solar_position,
};
