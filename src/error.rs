//! Error types for the convert-icon library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`ConvertError`] — **Fatal**: the run as a whole cannot produce the PNG
//!   (missing source file, or every strategy skipped/failed). Returned as
//!   `Err(ConvertError)` from the top-level `render*` functions.
//!
//! * [`StrategyError`] — **Non-fatal**: a single strategy could not produce
//!   the PNG. The orchestrator logs it and moves on to the next strategy in
//!   the priority list; it never propagates out of the loop.
//!
//! Within [`StrategyError`], "the executable is not installed" is a skip, not
//! a failure — [`StrategyError::is_unavailable`] makes that distinction so
//! the orchestrator can stay quiet about tools that were never there.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// All fatal errors returned by the convert-icon library.
///
/// Per-strategy failures use [`StrategyError`] and are consumed inside the
/// orchestrator rather than propagated here.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source SVG was not found at the given path.
    #[error("SVG file not found: '{path}'\nCheck the path exists and is readable.")]
    SourceMissing { path: PathBuf },

    /// Every strategy in the priority list was skipped or failed.
    #[error(
        "could not find a suitable SVG to PNG converter\n\n\
Please install one of:\n\
  \u{2022} ImageMagick 7 (`magick`): https://imagemagick.org/script/download.php\n\
  \u{2022} ImageMagick 6 (`convert`): packaged as `imagemagick` on most distros\n\n\
Or rebuild with the built-in renderer enabled: cargo build --features resvg"
    )]
    Exhausted,
}

/// A non-fatal error from a single conversion strategy.
///
/// The overall run continues unless ALL strategies end up here.
#[derive(Debug, Error)]
pub enum StrategyError {
    /// The executable backing this strategy is not installed.
    ///
    /// This is a skip, not a failure: the strategy was never attempted.
    #[error("`{binary}` not found on PATH")]
    MissingBinary { binary: String },

    /// The subprocess could be located but spawning or collecting it failed.
    #[error("failed to run `{binary}`: {source}")]
    Io {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The subprocess ran and exited with a non-zero status.
    #[error("`{binary}` exited with {status}: {stderr}")]
    CommandFailed {
        binary: String,
        status: ExitStatus,
        stderr: String,
    },

    /// In-process rasterisation failed (read, parse, allocate, or write).
    #[error("rasterisation failed: {detail}")]
    RenderFailed { detail: String },
}

impl StrategyError {
    /// True when the strategy's required executable is simply absent.
    ///
    /// Absent tools are skipped silently (debug log only); everything else
    /// is a real failure and is surfaced as a warning.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StrategyError::MissingBinary { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhausted_names_both_imagemagick_commands() {
        let msg = ConvertError::Exhausted.to_string();
        assert!(msg.contains("magick"), "got: {msg}");
        assert!(msg.contains("convert"), "got: {msg}");
        assert!(msg.contains("imagemagick.org"), "got: {msg}");
    }

    #[test]
    fn source_missing_display() {
        let e = ConvertError::SourceMissing {
            path: PathBuf::from("icon.svg"),
        };
        assert!(e.to_string().contains("icon.svg"));
    }

    #[test]
    fn missing_binary_is_unavailable() {
        let e = StrategyError::MissingBinary {
            binary: "magick".into(),
        };
        assert!(e.is_unavailable());
        assert!(e.to_string().contains("magick"));
    }

    #[test]
    fn render_failed_is_not_unavailable() {
        let e = StrategyError::RenderFailed {
            detail: "bad svg".into(),
        };
        assert!(!e.is_unavailable());
        assert!(e.to_string().contains("bad svg"));
    }
}
