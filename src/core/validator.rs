use crate::config::bounds::ValidationBounds;
use crate::domain::model::RealEstateRecord;
use crate::utils::error::{RealtyError, Result};

/// Field admissibility checks against a fixed set of closed ranges.
///
/// Predicates take raw input values so that anything the parser could not
/// read, or a negative number, is simply reported as inadmissible.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    bounds: ValidationBounds,
}

impl Validator {
    pub fn new(bounds: ValidationBounds) -> Self {
        Self { bounds }
    }

    pub fn bounds(&self) -> &ValidationBounds {
        &self.bounds
    }

    pub fn is_valid_area(&self, area: f64) -> bool {
        self.bounds.area.contains(area)
    }

    pub fn is_valid_bedroom_count(&self, bedroom_count: i64) -> bool {
        self.bounds.bedroom_count.contains(bedroom_count)
    }

    pub fn is_valid_toilet_count(&self, toilet_count: i64) -> bool {
        self.bounds.toilet_count.contains(toilet_count)
    }

    pub fn is_valid_subway_distance(&self, minutes: i64) -> bool {
        self.bounds.subway_distance_minutes.contains(minutes)
    }

    pub fn is_valid_residential_flag(&self, flag: i64) -> bool {
        flag == 0 || flag == 1
    }

    pub fn is_valid_price(&self, price: f64) -> bool {
        self.bounds.price.contains(price)
    }

    /// Checks every feature field; the price is not consulted.
    pub fn validate_record(&self, record: &RealEstateRecord) -> Result<()> {
        check("area", record.area, self.is_valid_area(record.area))?;
        check(
            "bedroom_count",
            record.bedroom_count,
            self.is_valid_bedroom_count(record.bedroom_count.into()),
        )?;
        check(
            "toilet_count",
            record.toilet_count,
            self.is_valid_toilet_count(record.toilet_count.into()),
        )?;
        check(
            "subway_distance_minutes",
            record.subway_distance_minutes,
            self.is_valid_subway_distance(record.subway_distance_minutes.into()),
        )
    }

    pub fn validate_training_record(&self, record: &RealEstateRecord) -> Result<()> {
        self.validate_record(record)?;
        let price = record.price.ok_or(RealtyError::MissingPrice)?;
        check("price", price, self.is_valid_price(price))
    }
}

fn check<T: std::fmt::Display>(field: &str, value: T, valid: bool) -> Result<()> {
    if valid {
        Ok(())
    } else {
        Err(RealtyError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::bounds::FieldRange;
    use crate::domain::model::PropertyKind;

    #[test]
    fn test_area_bounds_are_inclusive() {
        let validator = Validator::default();
        assert!(validator.is_valid_area(30.0));
        assert!(validator.is_valid_area(1000.0));
        assert!(validator.is_valid_area(75.5));
        assert!(!validator.is_valid_area(29.999));
        assert!(!validator.is_valid_area(30.0 - f64::EPSILON * 30.0));
        assert!(!validator.is_valid_area(1000.0001));
        assert!(!validator.is_valid_area(0.0));
        assert!(!validator.is_valid_area(f64::NAN));
    }

    #[test]
    fn test_integer_field_bounds() {
        let validator = Validator::default();
        assert!(validator.is_valid_bedroom_count(1));
        assert!(validator.is_valid_bedroom_count(10));
        assert!(!validator.is_valid_bedroom_count(0));
        assert!(!validator.is_valid_bedroom_count(11));

        assert!(validator.is_valid_toilet_count(1));
        assert!(validator.is_valid_toilet_count(5));
        assert!(!validator.is_valid_toilet_count(0));
        assert!(!validator.is_valid_toilet_count(6));

        assert!(!validator.is_valid_subway_distance(0));
        assert!(validator.is_valid_subway_distance(1));
        assert!(validator.is_valid_subway_distance(60));
        assert!(!validator.is_valid_subway_distance(61));
    }

    #[test]
    fn test_residential_flag() {
        let validator = Validator::default();
        assert!(validator.is_valid_residential_flag(0));
        assert!(validator.is_valid_residential_flag(1));
        assert!(!validator.is_valid_residential_flag(2));
    }

    #[test]
    fn test_price_bounds() {
        let validator = Validator::default();
        assert!(validator.is_valid_price(20_000.0));
        assert!(validator.is_valid_price(10_000_000.0));
        assert!(!validator.is_valid_price(19_999.99));
        assert!(!validator.is_valid_price(10_000_000.5));
    }

    #[test]
    fn test_sentinel_rejected_everywhere() {
        let validator = Validator::default();
        assert!(!validator.is_valid_area(-1.0));
        assert!(!validator.is_valid_bedroom_count(-1));
        assert!(!validator.is_valid_toilet_count(-1));
        assert!(!validator.is_valid_subway_distance(-1));
        assert!(!validator.is_valid_residential_flag(-1));
        assert!(!validator.is_valid_price(-1.0));
    }

    #[test]
    fn test_custom_bounds() {
        let bounds = ValidationBounds {
            area: FieldRange::new(10.0, 20.0),
            ..ValidationBounds::default()
        };
        let validator = Validator::new(bounds);
        assert!(validator.is_valid_area(10.0));
        assert!(!validator.is_valid_area(30.0));
    }

    #[test]
    fn test_validate_training_record() {
        let validator = Validator::default();
        let mut record = RealEstateRecord {
            area: 45.0,
            bedroom_count: 2,
            toilet_count: 1,
            subway_distance_minutes: 15,
            kind: PropertyKind::Commercial,
            price: Some(80_000.0),
        };
        assert!(validator.validate_training_record(&record).is_ok());

        record.toilet_count = 9;
        assert!(matches!(
            validator.validate_training_record(&record),
            Err(RealtyError::ValidationError { field, value }) if field == "toilet_count" && value == "9"
        ));

        record.toilet_count = 1;
        record.price = Some(100.0);
        assert!(validator.validate_training_record(&record).is_err());

        record.price = None;
        assert!(validator.validate_record(&record).is_ok());
    }
}
