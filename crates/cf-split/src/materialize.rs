//! Segment materialization: idempotent, fail-fast execution of a plan.
//!
//! The [`Materializer`] walks a [`SegmentPlan`] in index order and produces
//! one output file plus one `info.json` metadata sidecar per segment. The
//! existence check makes a re-run cheap and safe: already-produced segments
//! are skipped (their metadata still refreshed) unless overwrite is
//! requested. The first extractor failure aborts the whole run.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use cf_core::{Error, Result};

use crate::extractor::SegmentExtractor;
use crate::plan::{SegmentDescriptor, SegmentPlan};

/// Name of the per-segment metadata sidecar.
const METADATA_FILE: &str = "info.json";

/// Outcome of materializing one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStatus {
    /// The output file was produced by the extractor during this run.
    Created,
    /// The output already existed and overwrite was not requested.
    SkippedExisting,
    /// The extractor failed; the run aborts at this segment.
    Failed,
    /// Dry run: the output would be produced at the recorded path.
    Planned,
}

/// The materialized (or would-be) output for one planned segment.
#[derive(Debug, Clone)]
pub struct SegmentArtifact {
    /// The descriptor this artifact was produced for.
    pub descriptor: SegmentDescriptor,
    /// Where the segment's media file lives (or would live).
    pub output_path: PathBuf,
    /// What happened to this segment.
    pub status: SegmentStatus,
}

/// The metadata record persisted next to each segment output.
///
/// Field names are stable; external consumers parse this file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub index: u32,
    pub start_seconds: u64,
    pub duration_seconds: u64,
    pub end_seconds: u64,
    /// Absolute path of the source the segment was cut from.
    pub source_file: PathBuf,
}

impl MetadataRecord {
    /// Build the record for one descriptor of `source`.
    pub fn new(descriptor: &SegmentDescriptor, source: &Path) -> Self {
        Self {
            index: descriptor.index,
            start_seconds: descriptor.start_seconds,
            duration_seconds: descriptor.length_seconds,
            end_seconds: descriptor.end_seconds,
            source_file: source.to_path_buf(),
        }
    }
}

/// Executes a [`SegmentPlan`] against a [`SegmentExtractor`].
///
/// Construction resolves the source to an absolute path once; the extractor
/// arrives fully configured (resolved tool path, timeout), so nothing is
/// looked up ambiently during the run.
pub struct Materializer {
    source: PathBuf,
    output_root: PathBuf,
    overwrite: bool,
    dry_run: bool,
    extractor: Arc<dyn SegmentExtractor>,
}

impl Materializer {
    /// Create a materializer for `source`, writing under `output_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source path cannot be made absolute.
    pub fn new(
        source: &Path,
        output_root: &Path,
        extractor: Arc<dyn SegmentExtractor>,
    ) -> Result<Self> {
        Ok(Self {
            source: std::path::absolute(source)?,
            output_root: output_root.to_path_buf(),
            overwrite: false,
            dry_run: false,
            extractor,
        })
    }

    /// Request regeneration of segments whose output already exists.
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Plan and derive paths only; no filesystem mutation, no extractor call.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Materialize every segment of `plan`, sequentially, in index order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Extract`] naming the failing segment index on the
    /// first extractor failure (fail-fast: later segments are never
    /// attempted; earlier outputs are left in place). I/O failures writing
    /// metadata or creating directories propagate as [`Error::Io`].
    pub async fn run(&self, plan: &SegmentPlan) -> Result<Vec<SegmentArtifact>> {
        let width = part_width(plan.len());
        let mut artifacts = Vec::with_capacity(plan.len());

        for seg in plan.segments() {
            let part_name = format!("part_{:0w$}", seg.index, w = width);
            let part_dir = self.output_root.join(&part_name);
            let out_file = part_dir.join(format!("{part_name}.mp4"));

            if self.dry_run {
                tracing::info!(
                    "[dry-run] would produce {} (start {}s, length {}s)",
                    out_file.display(),
                    seg.start_seconds,
                    seg.length_seconds
                );
                artifacts.push(SegmentArtifact {
                    descriptor: *seg,
                    output_path: out_file,
                    status: SegmentStatus::Planned,
                });
                continue;
            }

            std::fs::create_dir_all(&part_dir)?;
            let info_path = part_dir.join(METADATA_FILE);

            if out_file.exists() {
                if self.overwrite {
                    // Stale output; ffmpeg's own -y overwrite is the
                    // fallback, so a failed removal is not fatal.
                    if let Err(e) = std::fs::remove_file(&out_file) {
                        tracing::warn!(
                            "Failed to remove stale output {}: {e}",
                            out_file.display()
                        );
                    }
                } else {
                    tracing::info!("Skipping existing output {}", out_file.display());
                    self.write_metadata(&info_path, seg)?;
                    artifacts.push(SegmentArtifact {
                        descriptor: *seg,
                        output_path: out_file,
                        status: SegmentStatus::SkippedExisting,
                    });
                    continue;
                }
            }

            match self
                .extractor
                .extract(&self.source, seg.start_seconds, seg.length_seconds, &out_file)
                .await
            {
                Ok(()) => {
                    self.write_metadata(&info_path, seg)?;
                    tracing::info!(
                        "Produced segment {}/{}: {}",
                        seg.index,
                        plan.len(),
                        out_file.display()
                    );
                    artifacts.push(SegmentArtifact {
                        descriptor: *seg,
                        output_path: out_file,
                        status: SegmentStatus::Created,
                    });
                }
                Err(e) => {
                    artifacts.push(SegmentArtifact {
                        descriptor: *seg,
                        output_path: out_file,
                        status: SegmentStatus::Failed,
                    });
                    tracing::error!("Segment {} failed, aborting run: {e}", seg.index);
                    return Err(Error::extract(seg.index, e.to_string()));
                }
            }
        }

        Ok(artifacts)
    }

    /// Write (always overwriting) the metadata sidecar for one segment.
    fn write_metadata(&self, path: &Path, descriptor: &SegmentDescriptor) -> Result<()> {
        let record = MetadataRecord::new(descriptor, &self.source);
        let json = serde_json::to_string_pretty(&record)
            .map_err(|e| Error::Internal(format!("metadata serialization failed: {e}")))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Zero-padding width for part numbers: at least 3 digits, widened when the
/// plan has 1000+ parts.
fn part_width(num_parts: usize) -> usize {
    num_parts.to_string().len().max(3)
}
