//! Unified error type for clipforge.
//!
//! All crates funnel their failures into [`Error`], which carries enough
//! context to identify the offending input, tool, or segment index.

/// Unified error type covering all failure modes in clipforge.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A duration expression could not be parsed.
    #[error("Invalid duration expression: {0}")]
    InvalidDuration(String),

    /// A caller-supplied parameter failed validation.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Probing the source duration failed.
    #[error("Probe error: {0}")]
    Probe(String),

    /// One segment's external conversion failed. Aborts the run.
    #[error("Extract error [segment {index}]: {message}")]
    Extract {
        /// 1-based index of the segment that failed.
        index: u32,
        /// Human-readable error description.
        message: String,
    },

    /// An external tool (ffmpeg, ffprobe) returned an error.
    #[error("Tool error [{tool}]: {message}")]
    Tool {
        /// Name of the tool that failed.
        tool: String,
        /// Human-readable error description.
        message: String,
    },

    /// An I/O operation failed.
    #[error("IO error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Catch-all for unexpected internal errors.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Convenience constructor for [`Error::Tool`].
    pub fn tool(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Tool {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Convenience constructor for [`Error::Extract`].
    pub fn extract(index: u32, message: impl Into<String>) -> Self {
        Error::Extract {
            index,
            message: message.into(),
        }
    }
}

/// Result alias using the crate-level [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
