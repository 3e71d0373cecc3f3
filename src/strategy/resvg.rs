//! In-process SVG rasterisation via resvg.
//!
//! ## Why scale-to-fit?
//!
//! The output must always be exactly `size`×`size` pixels, but the SVG's
//! own view box can be any aspect ratio. We scale uniformly by the smaller
//! axis ratio and centre the result on a transparent canvas — the same
//! visual outcome as ImageMagick's `-background none -resize WxH` applied
//! to a square icon, without ever distorting a non-square one.

use crate::error::StrategyError;
use crate::strategy::RenderStrategy;
use resvg::{tiny_skia, usvg};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Strategy 1: rasterise with the bundled resvg renderer.
///
/// No external processes, no system dependencies. Present in the default
/// strategy list only when the `resvg` cargo feature is enabled.
pub struct ResvgStrategy;

impl RenderStrategy for ResvgStrategy {
    fn name(&self) -> &str {
        "resvg"
    }

    fn render(&self, source: &Path, dest: &Path, size: u32) -> Result<(), StrategyError> {
        let data = fs::read(source).map_err(|e| StrategyError::RenderFailed {
            detail: format!("failed to read '{}': {e}", source.display()),
        })?;

        let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).map_err(|e| {
            StrategyError::RenderFailed {
                detail: format!("invalid SVG '{}': {e}", source.display()),
            }
        })?;

        let mut pixmap =
            tiny_skia::Pixmap::new(size, size).ok_or_else(|| StrategyError::RenderFailed {
                detail: format!("could not allocate a {size}x{size} pixmap"),
            })?;

        // Pixmap::new zero-fills, so the background is already transparent.
        let svg_size = tree.size();
        let scale = (size as f32 / svg_size.width()).min(size as f32 / svg_size.height());
        let tx = (size as f32 - svg_size.width() * scale) / 2.0;
        let ty = (size as f32 - svg_size.height() * scale) / 2.0;
        let transform = tiny_skia::Transform::from_scale(scale, scale).post_translate(tx, ty);

        debug!(
            "rendering {}x{} SVG at scale {scale:.3} onto {size}x{size} canvas",
            svg_size.width(),
            svg_size.height()
        );

        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap
            .save_png(dest)
            .map_err(|e| StrategyError::RenderFailed {
                detail: format!("failed to write '{}': {e}", dest.display()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64">
  <rect width="64" height="64" rx="12" fill="#2d7dd2"/>
</svg>"##;

    const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 200 50">
  <ellipse cx="100" cy="25" rx="95" ry="20" fill="#97cc04"/>
</svg>"##;

    fn write_svg(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("icon.svg");
        fs::write(&path, contents).expect("write test SVG");
        path
    }

    #[test]
    fn renders_square_svg_to_exact_size() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = write_svg(&dir, SQUARE_SVG);
        let dest = dir.path().join("icon.png");

        ResvgStrategy
            .render(&source, &dest, 128)
            .expect("render should succeed");

        let (w, h) = image::image_dimensions(&dest).expect("valid PNG");
        assert_eq!((w, h), (128, 128));
    }

    #[test]
    fn non_square_svg_still_fills_square_canvas() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = write_svg(&dir, WIDE_SVG);
        let dest = dir.path().join("icon.png");

        ResvgStrategy
            .render(&source, &dest, 128)
            .expect("render should succeed");

        // The canvas is padded, not stretched.
        let (w, h) = image::image_dimensions(&dest).expect("valid PNG");
        assert_eq!((w, h), (128, 128));
    }

    #[test]
    fn invalid_svg_is_a_failure_not_a_skip() {
        let dir = tempfile::tempdir().expect("tempdir");
        let source = dir.path().join("icon.svg");
        fs::write(&source, "this is not an svg").expect("write garbage");
        let dest = dir.path().join("icon.png");

        let err = ResvgStrategy
            .render(&source, &dest, 128)
            .expect_err("garbage input must fail");
        assert!(!err.is_unavailable());
        assert!(!dest.exists(), "no output file on parse failure");
    }

    #[test]
    fn missing_source_is_a_failure() {
        let dir = tempfile::tempdir().expect("tempdir");
        let err = ResvgStrategy
            .render(
                &dir.path().join("nope.svg"),
                &dir.path().join("icon.png"),
                128,
            )
            .expect_err("missing source must fail");
        assert!(!err.is_unavailable());
    }
}
