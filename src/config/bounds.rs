use crate::utils::error::{RealtyError, Result};
use crate::utils::validation::{validate_interval, validate_strictly_positive, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MIN_AREA: f64 = 30.0;
pub const MAX_AREA: f64 = 1000.0;
pub const MIN_BEDROOMS: i64 = 1;
pub const MAX_BEDROOMS: i64 = 10;
pub const MIN_TOILETS: i64 = 1;
pub const MAX_TOILETS: i64 = 5;
pub const MIN_SUBWAY_MINUTES: i64 = 1;
pub const MAX_SUBWAY_MINUTES: i64 = 60;
pub const MIN_PRICE: f64 = 20_000.0;
pub const MAX_PRICE: f64 = 10_000_000.0;

/// Closed inclusive interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> FieldRange<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Admissible ranges for every record field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationBounds {
    pub area: FieldRange<f64>,
    pub bedroom_count: FieldRange<i64>,
    pub toilet_count: FieldRange<i64>,
    pub subway_distance_minutes: FieldRange<i64>,
    pub price: FieldRange<f64>,
}

impl Default for ValidationBounds {
    fn default() -> Self {
        Self {
            area: FieldRange::new(MIN_AREA, MAX_AREA),
            bedroom_count: FieldRange::new(MIN_BEDROOMS, MAX_BEDROOMS),
            toilet_count: FieldRange::new(MIN_TOILETS, MAX_TOILETS),
            subway_distance_minutes: FieldRange::new(MIN_SUBWAY_MINUTES, MAX_SUBWAY_MINUTES),
            price: FieldRange::new(MIN_PRICE, MAX_PRICE),
        }
    }
}

impl ValidationBounds {
    /// Loads bounds from a TOML file; absent sections keep their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RealtyError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RealtyError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_interval("area", self.area.min, self.area.max)?;
        validate_interval("bedroom_count", self.bedroom_count.min, self.bedroom_count.max)?;
        validate_interval("toilet_count", self.toilet_count.min, self.toilet_count.max)?;
        validate_interval(
            "subway_distance_minutes",
            self.subway_distance_minutes.min,
            self.subway_distance_minutes.max,
        )?;
        validate_interval("price", self.price.min, self.price.max)?;

        // An area of 0.0 ends input, so it must never be admissible.
        validate_strictly_positive("area.min", self.area.min)?;
        validate_strictly_positive("price.min", self.price.min)?;

        Ok(())
    }
}

impl Validate for ValidationBounds {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
