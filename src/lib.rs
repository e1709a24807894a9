pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::console::Console;
pub use config::{bounds::ValidationBounds, CliConfig};
pub use crate::core::{
    estimator::Estimator, session::PredictionSession, validator::Validator, Collected,
    PropertyKind, RealEstateRecord, TrainingSet,
};
pub use utils::error::{RealtyError, Result};
