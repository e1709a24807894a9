use crate::domain::model::Collected;
use crate::utils::error::Result;

/// Source of training and query records, typically an interactive prompt.
pub trait RecordCollector {
    fn collect_training_record(&mut self) -> Result<Collected>;
    fn collect_query_record(&mut self) -> Result<Collected>;
}

/// Phase messages shown to the user around the collection loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    TrainingPhase,
    InsufficientTraining,
    TrainingFinished,
    QueryPhase,
}

pub trait EstimateDisplay {
    fn display_estimate(&mut self, value: f64) -> Result<()>;
    fn display_notice(&mut self, notice: Notice) -> Result<()>;
}
