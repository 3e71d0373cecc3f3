//! CLI binary for convert-icon.
//!
//! Argument-free by design: the tool always renders the `icon.svg` sitting
//! next to `Cargo.toml` into `icon.png` in the same directory, at 128×128.
//! Exit status 0 means the PNG was produced, 1 means every converter was
//! unavailable or failed.

use convert_icon::{render_icon, ICON_SIZE};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Progress lines are part of the tool's console output, so the
    // subscriber writes to stdout rather than the usual stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stdout)
        .with_target(false)
        .init();

    let dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let source = dir.join("icon.svg");
    let dest = dir.join("icon.png");

    match render_icon(&source, &dest) {
        Ok(strategy) => {
            println!(
                "Successfully created {} ({ICON_SIZE}x{ICON_SIZE}) using {strategy}",
                dest.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
