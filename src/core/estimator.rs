use crate::domain::model::{RealEstateRecord, TrainingSet};
use crate::utils::error::{RealtyError, Result};

/// Single-feature nearest-neighbour price estimator.
///
/// The neighbour is the training record whose area is closest to the query's;
/// its price is scaled by `query.area / neighbour.area`. On equal distances
/// the earliest record wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct Estimator;

impl Estimator {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(&self, training: &TrainingSet, query: &RealEstateRecord) -> Result<f64> {
        predict(training.records(), query)
    }
}

/// Returns the earliest record with the smallest area distance to `query`.
pub fn nearest_by_area<'a>(
    records: &'a [RealEstateRecord],
    query: &RealEstateRecord,
) -> Option<&'a RealEstateRecord> {
    let mut records = records.iter();
    let mut best = records.next()?;
    let mut best_distance = (best.area - query.area).abs();

    for candidate in records {
        let distance = (candidate.area - query.area).abs();
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }

    Some(best)
}

pub fn predict(records: &[RealEstateRecord], query: &RealEstateRecord) -> Result<f64> {
    let nearest = nearest_by_area(records, query).ok_or(RealtyError::EmptyTrainingSet)?;
    let price = nearest.price.ok_or(RealtyError::MissingPrice)?;

    let area_coefficient = query.area / nearest.area;
    let estimate = price * area_coefficient;

    tracing::debug!(
        query_area = query.area,
        neighbour_area = nearest.area,
        neighbour_price = price,
        area_coefficient,
        estimate,
        "Estimated price from nearest neighbour"
    );

    Ok(estimate)
}
