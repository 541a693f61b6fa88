use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::errors::ReportError;
use crate::model::SeriesSummary;
use crate::summary::summarize;

pub const SIMPLE_LOG: &str = "simplelog";
pub const TEST_LOG: &str = "testlog";

/// Every source is averaged over this many samples, however many lines it has.
pub const DEFAULT_DIVISOR: f64 = 15.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSource {
    pub path: PathBuf,
    /// Program name shown on the average line, e.g. `simple_test.c`.
    pub label: &'static str,
    /// Short name shown on the fastest/slowest line, e.g. `simple`.
    pub short_label: &'static str,
    pub divisor: f64,
}

impl ReportSource {
    pub fn new(path: impl Into<PathBuf>, label: &'static str, short_label: &'static str) -> Self {
        Self {
            path: path.into(),
            label,
            short_label,
            divisor: DEFAULT_DIVISOR,
        }
    }
}

pub fn default_sources() -> Vec<ReportSource> {
    default_sources_in(Path::new(""))
}

pub fn default_sources_in(dir: &Path) -> Vec<ReportSource> {
    vec![
        ReportSource::new(dir.join(SIMPLE_LOG), "simple_test.c", "simple"),
        ReportSource::new(dir.join(TEST_LOG), "test_cases.c", "test"),
    ]
}

/// Shortest representation that round-trips, always keeping a fractional
/// part for integral values (`1.0`, not `1`).
pub fn format_value(value: f64) -> String {
    format!("{value:?}")
}

pub fn render_source(source: &ReportSource, summary: &SeriesSummary) -> [String; 2] {
    [
        format!(
            "{} average: {} seconds",
            source.label,
            format_value(summary.average(source.divisor))
        ),
        format!(
            "fastest, slowest in {}: {} {}",
            source.short_label,
            format_value(summary.minimum),
            format_value(summary.maximum)
        ),
    ]
}

/// Summarizes every source in order, then writes two lines per source.
///
/// Nothing is written unless all sources summarize successfully.
pub fn generate_report<W: Write>(sources: &[ReportSource], out: &mut W) -> Result<(), ReportError> {
    let mut summaries = Vec::with_capacity(sources.len());
    for source in sources {
        let summary = summarize(&source.path)?;
        if summary.observed as f64 != source.divisor {
            warn!(
                path = %source.path.display(),
                observed = summary.observed,
                divisor = source.divisor,
                "sample count differs from divisor; reported average is not the mean"
            );
        }
        summaries.push(summary);
    }

    for (source, summary) in sources.iter().zip(&summaries) {
        for line in render_source(source, summary) {
            writeln!(out, "{line}").map_err(ReportError::Output)?;
        }
    }
    out.flush().map_err(ReportError::Output)?;

    Ok(())
}
