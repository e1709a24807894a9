pub mod bounds;

use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use bounds::ValidationBounds;
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PRECISION: usize = 10;
pub const MAX_PRECISION: usize = 17;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "realty-estimator"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Estimate a property price from the nearest training record by area")
)]
pub struct CliConfig {
    /// TOML file overriding the admissible field ranges
    #[cfg_attr(feature = "cli", arg(long))]
    pub bounds: Option<String>,

    /// Significant digits used when printing an estimate
    #[cfg_attr(feature = "cli", arg(long, default_value_t = DEFAULT_PRECISION))]
    pub precision: usize,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            bounds: None,
            precision: DEFAULT_PRECISION,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Loads the bounds file when one was given, otherwise the built-in ranges.
    pub fn load_bounds(&self) -> Result<ValidationBounds> {
        let bounds = match &self.bounds {
            Some(path) => {
                tracing::debug!("Loading field bounds from {}", path);
                ValidationBounds::from_file(path)?
            }
            None => ValidationBounds::default(),
        };
        bounds.validate()?;
        Ok(bounds)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.bounds {
            validate_path("bounds", path)?;
        }
        validate_range("precision", self.precision, 1, MAX_PRECISION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = CliConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.load_bounds().unwrap(), ValidationBounds::default());
    }

    #[test]
    fn test_precision_out_of_range() {
        let config = CliConfig {
            precision: 0,
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());

        let config = CliConfig {
            precision: 18,
            ..CliConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_bounds_rejects_invalid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[toilet_count]\nmin = 4\nmax = 2\n")
            .unwrap();

        let config = CliConfig {
            bounds: Some(temp_file.path().to_string_lossy().into_owned()),
            ..CliConfig::default()
        };
        assert!(config.load_bounds().is_err());
    }

    #[test]
    fn test_load_bounds_missing_file() {
        let config = CliConfig {
            bounds: Some("/nonexistent/realty-bounds.toml".to_string()),
            ..CliConfig::default()
        };
        assert!(matches!(
            config.load_bounds(),
            Err(crate::utils::error::RealtyError::IoError(_))
        ));
    }
}
