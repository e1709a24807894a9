use crate::core::validator::Validator;
use crate::domain::model::{Collected, PropertyKind, RealEstateRecord};
use crate::domain::ports::{EstimateDisplay, Notice, RecordCollector};
use crate::utils::error::{RealtyError, Result};
use crate::utils::format::format_significant;
use crate::utils::parse::{parse_double, parse_integer};
use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Interactive terminal over any line reader and writer.
///
/// Input is consumed one whitespace-separated token at a time, and every field
/// is re-requested until the validator accepts it.
pub struct Console<R, W> {
    input: R,
    output: W,
    validator: Validator,
    precision: usize,
    pending: VecDeque<String>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, validator: Validator, precision: usize) -> Self {
        Self {
            input,
            output,
            validator,
            precision,
            pending: VecDeque::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }

            // Raw bytes: non-UTF-8 input becomes a non-numeric token, not an error.
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Err(RealtyError::InputClosed);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn number(&self, value: f64) -> String {
        format_significant(value, self.precision)
    }

    /// Returns `None` when the user enters the `0` area that ends the phase.
    fn read_area(&mut self) -> Result<Option<f64>> {
        let range = self.validator.bounds().area;
        let prompt = format!(
            "Please enter area of apartment: (values from {} to {}).",
            self.number(range.min),
            self.number(range.max)
        );
        self.say(&prompt)?;

        loop {
            let value = parse_double(&self.next_token()?);
            match value {
                Some(area) if area == 0.0 => return Ok(None),
                Some(area) if self.validator.is_valid_area(area) => return Ok(Some(area)),
                _ => {
                    tracing::debug!("Rejected area input");
                    self.say("The area of the apartment is incorrect. Please, enter again.")?;
                }
            }
        }
    }

    fn read_integer(
        &mut self,
        prompt: &str,
        error: &str,
        is_valid: fn(&Validator, i64) -> bool,
    ) -> Result<i64> {
        self.say(prompt)?;

        loop {
            match parse_integer(&self.next_token()?) {
                Some(value) if is_valid(&self.validator, value) => return Ok(value),
                _ => self.say(error)?,
            }
        }
    }

    fn read_count(
        &mut self,
        field: &str,
        prompt: &str,
        error: &str,
        is_valid: fn(&Validator, i64) -> bool,
    ) -> Result<u32> {
        let value = self.read_integer(prompt, error, is_valid)?;
        u32::try_from(value).map_err(|_| RealtyError::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
        })
    }

    fn read_price(&mut self) -> Result<f64> {
        let range = self.validator.bounds().price;
        let prompt = format!(
            "Please, enter the cost of real estate. Pay attention that the target should be in the range between {} and {}.",
            self.number(range.min),
            self.number(range.max)
        );
        self.say(&prompt)?;

        loop {
            match parse_double(&self.next_token()?) {
                Some(price) if self.validator.is_valid_price(price) => return Ok(price),
                _ => self.say("The cost of the apartment is incorrect. Please, enter again.")?,
            }
        }
    }

    fn collect_record(&mut self, with_price: bool) -> Result<Collected> {
        let Some(area) = self.read_area()? else {
            return Ok(Collected::EndOfInput);
        };

        let bounds = self.validator.bounds().clone();

        let bedroom_count = self.read_count(
            "bedroom_count",
            &format!(
                "Please, enter the number of bedrooms: (values from {} to {}).",
                bounds.bedroom_count.min, bounds.bedroom_count.max
            ),
            "The number of bedrooms of the apartment is incorrect. Please, enter again.",
            Validator::is_valid_bedroom_count,
        )?;

        let toilet_count = self.read_count(
            "toilet_count",
            &format!(
                "Please, enter the number of toilets: (values from {} to {}).",
                bounds.toilet_count.min, bounds.toilet_count.max
            ),
            "The number of toilet of the apartment is incorrect. Please, enter again.",
            Validator::is_valid_toilet_count,
        )?;

        let subway_distance_minutes = self.read_count(
            "subway_distance_minutes",
            &format!(
                "Please, enter the distance to the subway in minute on foot: (values from {} to {}).",
                bounds.subway_distance_minutes.min, bounds.subway_distance_minutes.max
            ),
            "The number distance to subway of the apartment is incorrect. Please, enter again.",
            Validator::is_valid_subway_distance,
        )?;

        let code = self.read_integer(
            "Specify the type of real estate. If it's commercial write '0' and if it's residential write '1'.",
            "The entered value is incorrect. Please, enter again.",
            Validator::is_valid_residential_flag,
        )?;
        let kind = PropertyKind::from_code(code).ok_or_else(|| RealtyError::ValidationError {
            field: "kind".to_string(),
            value: code.to_string(),
        })?;

        let price = if with_price {
            Some(self.read_price()?)
        } else {
            None
        };

        Ok(Collected::Record(RealEstateRecord {
            area,
            bedroom_count,
            toilet_count,
            subway_distance_minutes,
            kind,
            price,
        }))
    }
}

impl<R: BufRead, W: Write> RecordCollector for Console<R, W> {
    fn collect_training_record(&mut self) -> Result<Collected> {
        self.collect_record(true)
    }

    fn collect_query_record(&mut self) -> Result<Collected> {
        self.collect_record(false)
    }
}

impl<R: BufRead, W: Write> EstimateDisplay for Console<R, W> {
    fn display_estimate(&mut self, value: f64) -> Result<()> {
        let line = format!("The calculated cost is: {}\n", self.number(value));
        self.say(&line)
    }

    fn display_notice(&mut self, notice: Notice) -> Result<()> {
        let text = match notice {
            Notice::TrainingPhase => {
                "Please enter the training data about the house to evaluate price of the apartments in next step.\n\
                 Enter '0' as value for area parameter to finish input data.\n"
            }
            Notice::InsufficientTraining => {
                "You have entered insufficient amount of real estate units. Please enter data about at least one real estate.\n"
            }
            Notice::TrainingFinished => "Process inputting training data is finished!\n",
            Notice::QueryPhase => {
                "Please enter the specified data about the house to determine the approximate price of the apartments.\n\
                 Enter '0' as value for area parameter to finish input data.\n"
            }
        };
        self.say(text)
    }
}
