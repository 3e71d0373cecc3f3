//! Conversion strategies: independent ways of rendering an SVG to a PNG.
//!
//! Each submodule implements exactly one way of producing the output file.
//! Keeping them behind one trait makes each independently testable and lets
//! the orchestrator iterate a plain priority list — no dispatch machinery
//! beyond `Box<dyn RenderStrategy>`.
//!
//! ## Priority order
//!
//! ```text
//! resvg ──▶ magick ──▶ convert
//! (in-process)  (ImageMagick 7)  (ImageMagick 6)
//! ```
//!
//! 1. [`resvg`]  — rasterise in-process via resvg/tiny-skia; compiled in
//!    only when the `resvg` cargo feature is enabled
//! 2. [`magick`] — shell out to ImageMagick; one implementation covers both
//!    the `magick` and `convert` entry points, they differ only in name

pub mod magick;
#[cfg(feature = "resvg")]
pub mod resvg;

use crate::error::StrategyError;
use std::path::Path;

pub use self::magick::MagickStrategy;
#[cfg(feature = "resvg")]
pub use self::resvg::ResvgStrategy;

/// One way of rendering an SVG file to a fixed-size PNG.
pub trait RenderStrategy {
    /// Short human-readable name, used in logs and the success message.
    fn name(&self) -> &str;

    /// Render `source` (SVG) to `dest` (PNG) at `size`×`size` pixels.
    ///
    /// Blocks until the attempt has fully completed. A
    /// [`StrategyError::is_unavailable`] error means the strategy was
    /// skipped, not that it failed.
    fn render(&self, source: &Path, dest: &Path, size: u32) -> Result<(), StrategyError>;
}

/// The default strategy list, in priority order.
pub fn default_strategies() -> Vec<Box<dyn RenderStrategy>> {
    vec![
        #[cfg(feature = "resvg")]
        Box::new(ResvgStrategy),
        Box::new(MagickStrategy::new("magick")),
        Box::new(MagickStrategy::new("convert")),
    ]
}
