//! # cf-av
//!
//! External tool integration for clipforge.
//!
//! This crate provides:
//!
//! - **Tool discovery** ([`ToolRegistry`]) -- find and cache paths to ffmpeg
//!   and ffprobe.
//! - **Command execution** ([`ToolCommand`]) -- async builder with timeout
//!   support for running external processes.
//! - **Duration probing** ([`probe_duration`]) -- ffprobe-backed source
//!   duration inspection.
//! - **Segment extraction** ([`FfmpegExtractor`]) -- the ffmpeg stream-copy
//!   implementation of [`cf_split::SegmentExtractor`].

pub mod command;
pub mod extract;
pub mod probe;
pub mod tools;

// ---- Re-exports for convenience ----

pub use command::{ToolCommand, ToolOutput};
pub use extract::FfmpegExtractor;
pub use probe::probe_duration;
pub use tools::{ToolConfig, ToolInfo, ToolRegistry};
