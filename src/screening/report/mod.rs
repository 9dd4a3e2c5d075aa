//! Report sink seam. The engine defines only the shapes a sink consumes:
//! serializable per-candidate and batch views, spreadsheet-style CSV rows,
//! and the delivery trait an email or dashboard adapter would implement.

mod export;
mod views;

pub use export::{CsvFileSink, CsvReportWriter, ReportSink, SinkError};
pub use views::{BatchSummaryView, CandidateView, ScreeningReportView};
