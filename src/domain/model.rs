use crate::core::validator::Validator;
use crate::utils::error::{RealtyError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyKind {
    Commercial,
    Residential,
}

impl PropertyKind {
    /// Maps the input code (0 = commercial, 1 = residential).
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(PropertyKind::Commercial),
            1 => Some(PropertyKind::Residential),
            _ => None,
        }
    }

    pub fn is_residential(self) -> bool {
        self == PropertyKind::Residential
    }
}

/// One property. `price` is known on training records and absent on queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealEstateRecord {
    pub area: f64,
    pub bedroom_count: u32,
    pub toilet_count: u32,
    pub subway_distance_minutes: u32,
    pub kind: PropertyKind,
    pub price: Option<f64>,
}

impl RealEstateRecord {
    pub fn is_residential(&self) -> bool {
        self.kind.is_residential()
    }
}

/// Outcome of asking a collector for the next record.
#[derive(Debug, Clone, PartialEq)]
pub enum Collected {
    Record(RealEstateRecord),
    EndOfInput,
}

/// Append-only, insertion-ordered set of validated, priced records.
#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    records: Vec<RealEstateRecord>,
}

impl TrainingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `record` after checking every field, including a present price.
    pub fn push(&mut self, record: RealEstateRecord, validator: &Validator) -> Result<()> {
        validator.validate_training_record(&record)?;
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[RealEstateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl TryFrom<Vec<RealEstateRecord>> for TrainingSet {
    type Error = RealtyError;

    /// Builds a set checked against the default bounds.
    fn try_from(records: Vec<RealEstateRecord>) -> Result<Self> {
        let validator = Validator::default();
        let mut set = TrainingSet::new();
        for record in records {
            set.push(record, &validator)?;
        }
        Ok(set)
    }
}
