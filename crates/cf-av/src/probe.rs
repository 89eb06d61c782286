//! FFprobe-backed duration probing.
//!
//! Shells out to `ffprobe -v quiet -print_format json -show_format` and
//! pulls the container duration out of the JSON output.

use std::path::Path;

use serde::Deserialize;

use crate::command::ToolCommand;
use crate::tools::ToolConfig;

/// Probe the total duration of `path` in seconds.
///
/// # Errors
///
/// Returns [`cf_core::Error::Probe`] when ffprobe exits non-zero, when its
/// output is not parseable JSON, or when the output carries no duration.
pub async fn probe_duration(ffprobe: &ToolConfig, path: &Path) -> cf_core::Result<f64> {
    let mut cmd = ToolCommand::new(ffprobe.path.clone());
    cmd.timeout(ffprobe.timeout);
    cmd.args(["-v", "quiet", "-print_format", "json", "-show_format"]);
    cmd.arg(path.to_string_lossy().as_ref());

    let output = cmd
        .execute()
        .await
        .map_err(|e| cf_core::Error::Probe(format!("ffprobe failed for {}: {e}", path.display())))?;

    parse_duration_json(&output.stdout)
}

/// Extract `format.duration` from ffprobe JSON output.
fn parse_duration_json(stdout: &str) -> cf_core::Result<f64> {
    let ff: FfprobeOutput = serde_json::from_str(stdout)
        .map_err(|e| cf_core::Error::Probe(format!("ffprobe JSON parse error: {e}")))?;

    let duration = ff
        .format
        .duration
        .ok_or_else(|| cf_core::Error::Probe("ffprobe output has no format.duration".into()))?;

    duration
        .parse::<f64>()
        .map_err(|e| cf_core::Error::Probe(format!("unparseable duration {duration:?}: {e}")))
}

// ---------------------------------------------------------------------------
// JSON structures
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    format: FfprobeFormat,
}

#[derive(Debug, Deserialize)]
struct FfprobeFormat {
    duration: Option<String>,
}
