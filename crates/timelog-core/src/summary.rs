use std::path::Path;

use tracing::debug;

use crate::errors::SummaryError;
use crate::model::{ExtremaSeed, SeriesSummary};
use crate::reader::MeasurementSeries;

/// Running sum and extrema over a stream of values.
#[derive(Debug, Clone)]
pub struct SummaryAccumulator {
    seed: ExtremaSeed,
    sum: f64,
    minimum: f64,
    maximum: f64,
    observed: usize,
}

impl SummaryAccumulator {
    pub fn new(seed: ExtremaSeed) -> Self {
        let (minimum, maximum) = seed.initial();
        Self {
            seed,
            sum: 0.0,
            minimum,
            maximum,
            observed: 0,
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.observed == 0 && self.seed == ExtremaSeed::FirstObservation {
            self.minimum = value;
            self.maximum = value;
        }

        self.sum += value;
        if value > self.maximum {
            self.maximum = value;
        }
        if value < self.minimum {
            self.minimum = value;
        }
        self.observed += 1;
    }

    pub fn finish(&self) -> SeriesSummary {
        SeriesSummary {
            sum: self.sum,
            minimum: self.minimum,
            maximum: self.maximum,
            observed: self.observed,
        }
    }
}

pub fn summarize(path: impl AsRef<Path>) -> Result<SeriesSummary, SummaryError> {
    summarize_with(path, ExtremaSeed::UnitInterval)
}

pub fn summarize_with(
    path: impl AsRef<Path>,
    seed: ExtremaSeed,
) -> Result<SeriesSummary, SummaryError> {
    let series = MeasurementSeries::open(path)?;
    let mut accumulator = SummaryAccumulator::new(seed);
    let path = series.path().to_path_buf();

    for value in series {
        accumulator.push(value?);
    }

    let summary = accumulator.finish();
    debug!(
        path = %path.display(),
        observed = summary.observed,
        sum = summary.sum,
        minimum = summary.minimum,
        maximum = summary.maximum,
        "summarized measurement source"
    );
    Ok(summary)
}
