use crate::core::estimator::Estimator;
use crate::core::validator::Validator;
use crate::domain::model::{Collected, TrainingSet};
use crate::domain::ports::{EstimateDisplay, Notice, RecordCollector};
use crate::utils::error::{RealtyError, Result};

/// Drives one run: collect the training set, then answer queries until the
/// user ends input.
pub struct PredictionSession<T> {
    terminal: T,
    validator: Validator,
    estimator: Estimator,
}

impl<T: RecordCollector + EstimateDisplay> PredictionSession<T> {
    pub fn new(terminal: T, validator: Validator) -> Self {
        Self {
            terminal,
            validator,
            estimator: Estimator::new(),
        }
    }

    /// Runs both phases and returns the number of estimates produced.
    pub fn run(&mut self) -> Result<usize> {
        let training = self.collect_training_set()?;
        tracing::info!("Training set complete with {} records", training.len());

        let estimates = self.answer_queries(&training)?;
        tracing::info!("Session finished after {} estimates", estimates);
        Ok(estimates)
    }

    pub fn collect_training_set(&mut self) -> Result<TrainingSet> {
        let mut training = TrainingSet::new();

        loop {
            self.terminal.display_notice(Notice::TrainingPhase)?;

            // A closed stream ends the phase once at least one record exists.
            let collected = match self.terminal.collect_training_record() {
                Err(RealtyError::InputClosed) if !training.is_empty() => Collected::EndOfInput,
                other => other?,
            };

            match collected {
                Collected::Record(record) => {
                    training.push(record, &self.validator)?;
                    tracing::debug!("Accepted training record #{}", training.len());
                }
                Collected::EndOfInput if training.is_empty() => {
                    self.terminal.display_notice(Notice::InsufficientTraining)?;
                }
                Collected::EndOfInput => break,
            }
        }

        self.terminal.display_notice(Notice::TrainingFinished)?;
        Ok(training)
    }

    pub fn answer_queries(&mut self, training: &TrainingSet) -> Result<usize> {
        let mut estimates = 0;

        loop {
            self.terminal.display_notice(Notice::QueryPhase)?;

            let query = match self.terminal.collect_query_record() {
                Ok(Collected::Record(query)) => query,
                Ok(Collected::EndOfInput) | Err(RealtyError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            self.validator.validate_record(&query)?;
            let estimate = self.estimator.predict(training, &query)?;
            self.terminal.display_estimate(estimate)?;
            estimates += 1;
        }

        Ok(estimates)
    }

    pub fn into_inner(self) -> T {
        self.terminal
    }
}
