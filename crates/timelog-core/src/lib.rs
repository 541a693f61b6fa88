pub mod errors;
pub mod model;
pub mod reader;
pub mod report;
pub mod summary;

pub use errors::{ReportError, SummaryError};
pub use model::{ExtremaSeed, SeriesSummary};
pub use reader::MeasurementSeries;
pub use report::{
    default_sources, default_sources_in, format_value, generate_report, render_source,
    ReportSource, DEFAULT_DIVISOR, SIMPLE_LOG, TEST_LOG,
};
pub use summary::{summarize, summarize_with, SummaryAccumulator};
