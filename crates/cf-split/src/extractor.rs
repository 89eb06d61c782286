//! The transcode collaborator interface.

use std::path::Path;

use async_trait::async_trait;

/// Extracts one time window of a source file into an output file.
///
/// This is the seam between planning/materialization and the external
/// transcode tool: implementations run the tool (ffmpeg stream copy in
/// production) and report success or failure, with captured diagnostics
/// carried in the error. The extractor is handed a fully resolved output
/// path and never consults ambient state.
#[async_trait]
pub trait SegmentExtractor: Send + Sync {
    /// Produce an output file covering `[start_seconds, start_seconds +
    /// length_seconds)` of `source`, written to `output`.
    async fn extract(
        &self,
        source: &Path,
        start_seconds: u64,
        length_seconds: u64,
        output: &Path,
    ) -> cf_core::Result<()>;
}
