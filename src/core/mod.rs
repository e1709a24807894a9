pub mod estimator;
pub mod session;
pub mod validator;

pub use crate::domain::model::{Collected, PropertyKind, RealEstateRecord, TrainingSet};
pub use crate::domain::ports::{EstimateDisplay, Notice, RecordCollector};
pub use crate::utils::error::Result;
