//! The converter orchestrator: sequential fallback over the strategy list.
//!
//! Attempts each strategy in priority order against the same source/dest
//! pair and stops at the first success. A strategy whose tool is simply not
//! installed is skipped without comment beyond a debug log; a strategy that
//! was present but errored is logged as a warning and must not leave a
//! half-written PNG behind. Only when the whole list is exhausted does the
//! run fail.

use crate::error::ConvertError;
use crate::strategy::{default_strategies, RenderStrategy};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Edge length, in pixels, of the rendered icon.
pub const ICON_SIZE: u32 = 128;

/// Render `source` (SVG) to `dest` (PNG) at [`ICON_SIZE`]×[`ICON_SIZE`].
///
/// This is the primary entry point for the library. Tries the default
/// strategy list in priority order and returns the name of the strategy
/// that produced the file.
///
/// # Errors
/// - [`ConvertError::SourceMissing`] if the SVG does not exist
/// - [`ConvertError::Exhausted`] if every strategy was skipped or failed
pub fn render_icon(source: &Path, dest: &Path) -> Result<String, ConvertError> {
    render_with(&default_strategies(), source, dest, ICON_SIZE)
}

/// Render using a caller-supplied strategy list.
///
/// The list is tried strictly in order; the first success wins and no later
/// strategy runs. Exposed so callers (and tests) can substitute their own
/// strategies or sizes; [`render_icon`] is this with the defaults.
pub fn render_with(
    strategies: &[Box<dyn RenderStrategy>],
    source: &Path,
    dest: &Path,
    size: u32,
) -> Result<String, ConvertError> {
    if !source.exists() {
        return Err(ConvertError::SourceMissing {
            path: source.to_path_buf(),
        });
    }

    for strategy in strategies {
        let existed_before = dest.exists();
        info!("trying {}", strategy.name());

        match strategy.render(source, dest, size) {
            Ok(()) => {
                info!(
                    "created '{}' ({size}x{size}) using {}",
                    dest.display(),
                    strategy.name()
                );
                return Ok(strategy.name().to_string());
            }
            Err(e) if e.is_unavailable() => {
                debug!("{} skipped: {e}", strategy.name());
            }
            Err(e) => {
                warn!("{} failed: {e}", strategy.name());
                remove_partial_output(dest, existed_before);
            }
        }
    }

    Err(ConvertError::Exhausted)
}

/// Delete a file a failed strategy newly created.
///
/// A destination that already existed before the attempt is left alone;
/// a later successful strategy overwrites it.
fn remove_partial_output(dest: &Path, existed_before: bool) {
    if !existed_before && dest.exists() {
        if let Err(e) = fs::remove_file(dest) {
            warn!("could not remove partial output '{}': {e}", dest.display());
        } else {
            debug!("removed partial output '{}'", dest.display());
        }
    }
}
