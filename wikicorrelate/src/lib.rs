pub mod commands;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    SpinnerWriter, format_outcome, init_tracing, options_from_matches, resolve_output_path,
    write_report,
};

pub use wikicorrelate_core::report::{CorrelationReport, ReportFormat};
pub use wikicorrelate_core::{CorrelateOptions, SearchResult, execute_correlation};
