//! # convert-icon
//!
//! Render the packaged SVG icon to a 128×128 PNG.
//!
//! ## Why this crate?
//!
//! Packaging pipelines want a raster icon, designers hand over vector art,
//! and no single converter is installed everywhere. Instead of demanding one
//! specific tool, this crate walks a priority list of converters and uses
//! the first one that is present and works.
//!
//! ## Fallback chain
//!
//! ```text
//! icon.svg
//!  │
//!  ├─ 1. resvg    in-process rasterisation (feature `resvg`, default on)
//!  ├─ 2. magick   ImageMagick 7 subprocess
//!  ├─ 3. convert  ImageMagick 6 subprocess
//!  └─ ✗  exhausted: print install guidance, exit 1
//! ```
//!
//! A converter that is not installed is skipped silently; one that is
//! installed but errors is logged and the chain moves on. Either way the
//! run only fails once every option is spent.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use convert_icon::render_icon;
//! use std::path::Path;
//!
//! fn main() -> Result<(), convert_icon::ConvertError> {
//!     let used = render_icon(Path::new("icon.svg"), Path::new("icon.png"))?;
//!     println!("rendered with {used}");
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `convert-icon` binary (tracing-subscriber) |
//! | `resvg` | on      | Compiles in the resvg renderer as the first strategy |
//!
//! With both features off the library shells out to ImageMagick only.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod convert;
pub mod error;
pub mod strategy;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use convert::{render_icon, render_with, ICON_SIZE};
pub use error::{ConvertError, StrategyError};
pub use strategy::{default_strategies, MagickStrategy, RenderStrategy};
#[cfg(feature = "resvg")]
pub use strategy::ResvgStrategy;
