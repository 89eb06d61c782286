//! Run reporting: aggregate a run's results for the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::materialize::{SegmentArtifact, SegmentStatus};
use crate::plan::SegmentPlan;

/// The final report of a split run.
///
/// This is the sole value surfaced to the CLI layer; field names are stable
/// for machine consumption (`--json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Absolute path of the source that was split.
    pub source_file: PathBuf,
    /// Total source duration in whole seconds.
    pub total_seconds: u64,
    /// Maximum segment length the plan was computed for.
    pub max_part_seconds: u64,
    /// Number of planned segments.
    pub num_parts: usize,
    /// Absolute path of the output root directory.
    pub output_root: PathBuf,
    /// Ordered output paths, including skipped and dry-run segments.
    pub outputs: Vec<PathBuf>,
    /// Whether this was a dry run (nothing was written).
    pub dry_run: bool,
}

impl RunReport {
    /// Render the report for the terminal.
    pub fn print_human(&self) {
        println!("Source: {}", self.source_file.display());
        println!(
            "Total duration: {} ({} seconds)",
            format_hms(self.total_seconds),
            self.total_seconds
        );
        println!("Max segment length: {} seconds", self.max_part_seconds);
        println!("Segments: {}", self.num_parts);
        println!("Output root: {}", self.output_root.display());

        for output in &self.outputs {
            println!("  {}", output.display());
        }

        if self.dry_run {
            println!("\n[dry-run] No files were written.");
        }
    }
}

/// Aggregate a plan and its artifacts into a [`RunReport`].
pub fn summarize(
    source: &Path,
    plan: &SegmentPlan,
    artifacts: &[SegmentArtifact],
    output_root: &Path,
    dry_run: bool,
) -> RunReport {
    let skipped = artifacts
        .iter()
        .filter(|a| a.status == SegmentStatus::SkippedExisting)
        .count();
    if skipped > 0 {
        tracing::info!("{skipped} of {} segments already existed", artifacts.len());
    }

    RunReport {
        source_file: std::path::absolute(source).unwrap_or_else(|_| source.to_path_buf()),
        total_seconds: plan.total_seconds(),
        max_part_seconds: plan.max_part_seconds(),
        num_parts: plan.len(),
        output_root: std::path::absolute(output_root)
            .unwrap_or_else(|_| output_root.to_path_buf()),
        outputs: artifacts.iter().map(|a| a.output_path.clone()).collect(),
        dry_run,
    }
}

/// Format whole seconds as `HH:MM:SS`.
pub fn format_hms(total_seconds: u64) -> String {
    let mins = total_seconds / 60;
    let hours = mins / 60;
    format!("{:02}:{:02}:{:02}", hours, mins % 60, total_seconds % 60)
}
