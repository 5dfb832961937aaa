//! Report Module
//!
//! End-of-run summary for a WebP migration.

use crate::batch::BatchResult;
use std::time::Duration;

pub fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 3600 {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    } else if secs >= 60 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}s", secs)
    }
}

/// The headline printed after every run: a "nothing to convert" notice when
/// no file converted, otherwise the converted count.
pub fn summary_line(result: &BatchResult) -> String {
    if result.nothing_converted() {
        "🤔 Nothing to convert (every image is already WebP, or there are no images)".to_string()
    } else {
        format!("🎉 Converted {} image(s) to WebP", result.succeeded)
    }
}

pub fn size_reduction_percent(input_bytes: u64, output_bytes: u64) -> f64 {
    if input_bytes > 0 {
        (1.0 - output_bytes as f64 / input_bytes as f64) * 100.0
    } else {
        0.0
    }
}

/// Header above the list of failed files, with the share of eligible files
/// that still converted.
pub fn failure_header(result: &BatchResult) -> String {
    format!(
        "❌ {} file(s) failed and were left in place ({:.1}% of eligible files converted):",
        result.failed,
        result.success_rate()
    )
}

pub fn print_run_summary(result: &BatchResult, duration: Duration) {
    println!();
    println!("{}", summary_line(result));

    if !result.nothing_converted() {
        println!(
            "   💾 {} → {} ({:.1}% smaller) in {}",
            format_bytes(result.input_bytes),
            format_bytes(result.output_bytes),
            size_reduction_percent(result.input_bytes, result.output_bytes),
            format_duration(duration)
        );
    }

    if !result.errors.is_empty() {
        eprintln!();
        eprintln!("{}", failure_header(result));
        for (path, error) in &result.errors {
            eprintln!("   {} → {}", path.display(), error);
        }
    }
}
