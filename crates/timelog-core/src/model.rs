/// How the running minimum and maximum are initialised before the first value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtremaSeed {
    /// Minimum starts at 1.0 and maximum at 0.0. Only values inside `[0, 1)`
    /// are guaranteed to move both extrema; an empty series reports the seeds.
    #[default]
    UnitInterval,
    /// Both extrema start at the first observed value. An empty series
    /// reports NaN for both.
    FirstObservation,
}

impl ExtremaSeed {
    pub(crate) fn initial(&self) -> (f64, f64) {
        match self {
            ExtremaSeed::UnitInterval => (1.0, 0.0),
            ExtremaSeed::FirstObservation => (f64::NAN, f64::NAN),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub sum: f64,
    pub minimum: f64,
    pub maximum: f64,
    /// Number of values parsed. Not used as the averaging divisor.
    pub observed: usize,
}

impl SeriesSummary {
    pub fn average(&self, divisor: f64) -> f64 {
        self.sum / divisor
    }
}
