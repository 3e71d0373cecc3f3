//! External ImageMagick invocation.
//!
//! ImageMagick 7 installs a `magick` entry point; version 6 (still what many
//! distros package) installs `convert`. The invocation is identical for
//! both, so one strategy type covers the pair — the default list simply
//! contains two instances with different binary names.
//!
//! ## Why `Command::output()`?
//!
//! The orchestrator is strictly sequential: it must see the tool's final
//! exit status, with stdout/stderr fully drained, before deciding whether to
//! fall through to the next strategy. `output()` does exactly that in one
//! blocking call, and its `ErrorKind::NotFound` spawn error is how we tell
//! "not installed" (skip) apart from "installed but broken" (failure).

use crate::error::StrategyError;
use crate::strategy::RenderStrategy;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Strategy 2/3: shell out to an ImageMagick binary.
///
/// Invocation shape, for source `P`, destination `Q`, and size `S`:
///
/// ```text
/// <binary> P -background none -resize SxS Q
/// ```
pub struct MagickStrategy {
    binary: String,
}

impl MagickStrategy {
    /// A strategy invoking the named binary (`magick`, `convert`, or an
    /// absolute path — handy for tests).
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl RenderStrategy for MagickStrategy {
    fn name(&self) -> &str {
        &self.binary
    }

    fn render(&self, source: &Path, dest: &Path, size: u32) -> Result<(), StrategyError> {
        debug!("invoking {} on '{}'", self.binary, source.display());

        let output = Command::new(&self.binary)
            .arg(source)
            .args(["-background", "none", "-resize"])
            .arg(format!("{size}x{size}"))
            .arg(dest)
            .output();

        let output = match output {
            Ok(o) => o,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StrategyError::MissingBinary {
                    binary: self.binary.clone(),
                });
            }
            Err(e) => {
                return Err(StrategyError::Io {
                    binary: self.binary.clone(),
                    source: e,
                });
            }
        };

        if output.status.success() {
            Ok(())
        } else {
            Err(StrategyError::CommandFailed {
                binary: self.binary.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_reports_unavailable() {
        let strategy = MagickStrategy::new("definitely-not-an-installed-tool");
        let err = strategy
            .render(Path::new("icon.svg"), Path::new("icon.png"), 128)
            .expect_err("unknown binary must not succeed");
        assert!(err.is_unavailable(), "got: {err}");
        assert!(err.to_string().contains("definitely-not-an-installed-tool"));
    }

    #[cfg(unix)]
    #[test]
    fn nonzero_exit_reports_failure_with_stderr() {
        // `false` exists everywhere on unix and ignores its arguments.
        let strategy = MagickStrategy::new("false");
        let err = strategy
            .render(Path::new("icon.svg"), Path::new("icon.png"), 128)
            .expect_err("`false` always exits 1");
        assert!(!err.is_unavailable());
        assert!(matches!(err, StrategyError::CommandFailed { .. }), "got: {err}");
    }

    #[test]
    fn name_is_the_binary() {
        assert_eq!(MagickStrategy::new("convert").name(), "convert");
    }
}
