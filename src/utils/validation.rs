use crate::utils::error::{RealtyError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RealtyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RealtyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RealtyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

/// Checks that a configured `[min, max]` pair describes a non-empty interval.
pub fn validate_interval<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    min: T,
    max: T,
) -> Result<()> {
    // NaN bounds fail both comparisons, so test the accepted shape instead.
    if !(min <= max) {
        return Err(RealtyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("[{}, {}]", min, max),
            reason: "min must not exceed max".to_string(),
        });
    }
    Ok(())
}

pub fn validate_strictly_positive(field_name: &str, value: f64) -> Result<()> {
    if !(value > 0.0) {
        return Err(RealtyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }
    Ok(())
}
