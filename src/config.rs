use std::collections::HashSet;
use std::path::Path;

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::models::solar::{IrradianceEstimate, Observation};
use crate::services::irradiance::estimate;

/// Widest UTC offsets in civil use, hours.
const MAX_TZ_OFFSET_H: f64 = 14.0;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    pub sites: Vec<SiteConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SiteConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Fixed offset of the site's civil clock from UTC, hours
    #[serde(default)]
    pub timezone: f64,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&content)?;
        vlog!(
            "[CONFIG] loaded {} sites from {}",
            config.sites.len(),
            path.as_ref().display()
        );
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects out-of-range coordinates and offsets, and repeated ids.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for site in &self.sites {
            site.validate()?;
            if !seen.insert(site.id.as_str()) {
                return Err(invalid(site, "duplicate site id"));
            }
        }
        Ok(())
    }

    pub fn site(&self, id: &str) -> Option<&SiteConfig> {
        self.sites.iter().find(|s| s.id == id)
    }
}

impl SiteConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(invalid(self, format!("latitude {} outside [-90, 90]", self.latitude)));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(invalid(self, format!("longitude {} outside [-180, 180]", self.longitude)));
        }
        if !(-MAX_TZ_OFFSET_H..=MAX_TZ_OFFSET_H).contains(&self.timezone) {
            return Err(invalid(self, format!("timezone offset {} h outside [-14, 14]", self.timezone)));
        }
        Ok(())
    }

    /// Observation at local civil time `local` on the site's clock.
    pub fn observation_at(&self, local: NaiveDateTime) -> Observation {
        Observation {
            lat: self.latitude,
            lon: self.longitude,
            timezone: self.timezone,
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute() as f64 + local.second() as f64 / 60.0,
        }
    }

    pub fn estimate_at(&self, local: NaiveDateTime) -> IrradianceEstimate {
        let est = estimate(&self.observation_at(local));
        vlog!(
            "[UPDATE] Site: {} | Elevation: {:.2}° | Azimuth: {:.2}° | Irradiance: {:.1} W/m²",
            self.id,
            est.position.elevation,
            est.position.azimuth,
            est.irradiance_w_m2
        );
        est
    }
}

fn invalid(site: &SiteConfig, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidSite {
        id: site.id.clone(),
        reason: reason.into(),
    }
}
