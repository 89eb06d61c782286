//! # cf-split
//!
//! Segmentation planning and execution for clipforge.
//!
//! This crate provides:
//!
//! - **Planning** ([`plan`]) -- turn a total duration and a maximum segment
//!   length into a deterministic, gap-free, non-overlapping partition.
//! - **The collaborator interface** ([`SegmentExtractor`]) -- the
//!   single-purpose "extract this time window" trait implemented by cf-av's
//!   ffmpeg backend.
//! - **Materialization** ([`Materializer`]) -- idempotent, fail-fast,
//!   sequential execution of a plan against the extractor, with a metadata
//!   sidecar per segment.
//! - **Reporting** ([`summarize`], [`RunReport`]) -- aggregation of a run's
//!   results for human and JSON output.

pub mod extractor;
pub mod materialize;
pub mod plan;
pub mod report;

// ---- Re-exports for convenience ----

pub use extractor::SegmentExtractor;
pub use materialize::{Materializer, MetadataRecord, SegmentArtifact, SegmentStatus};
pub use plan::{plan, SegmentDescriptor, SegmentPlan};
pub use report::{summarize, RunReport};
