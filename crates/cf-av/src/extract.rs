//! FFmpeg stream-copy extraction of one planned time window.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use cf_split::SegmentExtractor;

use crate::command::ToolCommand;

/// Default extraction timeout: 10 minutes (copy is fast).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// [`SegmentExtractor`] backed by `ffmpeg -c copy`.
///
/// Holds a resolved ffmpeg path supplied at construction; nothing is looked
/// up from the environment at extract time.
#[derive(Debug, Clone)]
pub struct FfmpegExtractor {
    ffmpeg_path: PathBuf,
    timeout: Duration,
}

impl FfmpegExtractor {
    /// Create an extractor using the given ffmpeg path.
    pub fn new(ffmpeg_path: PathBuf) -> Self {
        Self {
            ffmpeg_path,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the maximum execution time for one extraction.
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = d;
        self
    }
}

#[async_trait]
impl SegmentExtractor for FfmpegExtractor {
    /// Extract `[start, start+length)` of `source` into `output` without
    /// re-encoding. Input-side `-ss` keeps the seek fast; `-c copy` keeps
    /// the codec data untouched.
    async fn extract(
        &self,
        source: &Path,
        start_seconds: u64,
        length_seconds: u64,
        output: &Path,
    ) -> cf_core::Result<()> {
        tracing::info!(
            "extract {}s +{}s: {:?} -> {:?}",
            start_seconds,
            length_seconds,
            source,
            output
        );

        let mut cmd = ToolCommand::new(self.ffmpeg_path.clone());
        cmd.timeout(self.timeout);
        cmd.args(["-y", "-ss"]);
        cmd.arg(start_seconds.to_string());
        cmd.arg("-i");
        cmd.arg(source.to_string_lossy().as_ref());
        cmd.arg("-t");
        cmd.arg(length_seconds.to_string());
        cmd.args(["-c", "copy"]);
        cmd.arg(output.to_string_lossy().as_ref());
        cmd.execute().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_configurable() {
        let extractor = FfmpegExtractor::new(PathBuf::from("/usr/bin/ffmpeg"))
            .timeout(Duration::from_secs(30));
        assert_eq!(extractor.timeout, Duration::from_secs(30));
    }

    #[tokio::test]
    async fn missing_tool_surfaces_as_error() {
        let extractor = FfmpegExtractor::new(PathBuf::from("nonexistent_ffmpeg_xyz"));
        let dir = tempfile::tempdir().unwrap();
        let result = extractor
            .extract(
                &dir.path().join("in.mp4"),
                0,
                60,
                &dir.path().join("out.mp4"),
            )
            .await;
        assert!(result.is_err());
    }
}
