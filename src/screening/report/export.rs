use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::views::ScreeningReportView;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report rows: {0}")]
    Csv(#[from] csv::Error),
}

/// Outbound delivery hook for finished reports (dashboard push, email
/// adapters, file export). Implementations contain no decisions of their
/// own — they only consume the view shapes.
pub trait ReportSink {
    fn deliver(&self, report: &ScreeningReportView) -> Result<(), SinkError>;
}

/// Writes one CSV row per candidate, header first. The XLSX container the
/// original export used is an external-collaborator concern; these rows
/// carry the same columns.
pub struct CsvReportWriter;

impl CsvReportWriter {
    pub fn write<W: Write>(report: &ScreeningReportView, writer: W) -> Result<(), SinkError> {
        let mut rows = csv::Writer::from_writer(writer);
        for candidate in &report.candidates {
            rows.serialize(candidate)?;
        }
        rows.flush()?;
        Ok(())
    }

    pub fn write_to_path(
        report: &ScreeningReportView,
        path: impl AsRef<Path>,
    ) -> Result<(), SinkError> {
        let file = File::create(path)?;
        Self::write(report, file)
    }
}

/// [`ReportSink`] writing the CSV rows to a fixed path.
#[derive(Debug, Clone)]
pub struct CsvFileSink {
    path: PathBuf,
}

impl CsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSink for CsvFileSink {
    fn deliver(&self, report: &ScreeningReportView) -> Result<(), SinkError> {
        CsvReportWriter::write_to_path(report, &self.path)
    }
}
