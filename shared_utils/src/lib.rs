//! Shared Utilities for the img-webp tool
//!
//! - Batch accounting (`BatchResult`)
//! - Conversion error taxonomy (`ConvertError`)
//! - Logging setup (tracing + rolling file appender)
//! - Summary reporting
//! - Safety checks (dangerous directory detection)

pub mod batch;
pub mod img_errors;
pub mod logging;
pub mod report;
pub mod safety;

pub use batch::BatchResult;
pub use img_errors::ConvertError;
pub use report::{format_bytes, format_duration, print_run_summary, summary_line};
pub use safety::{check_dangerous_directory, check_safe_for_destructive};
