pub mod atmosphere;
pub mod batch;
pub mod calendar;
pub mod irradiance;
pub mod solar_algorithm;
