//! Show or initialize the configuration file.

use std::path::{Path, PathBuf};

use framekit_common::config::FrameKitConfig;

/// `path` is the file chosen with `--config`, if any.
pub fn run(config: &FrameKitConfig, path: Option<&Path>, init: bool) -> anyhow::Result<()> {
    let path = target_path(path);

    if init {
        if write_if_missing(config, &path)? {
            tracing::info!(path = %path.display(), "wrote config");
            println!("Wrote config to: {}", path.display());
        } else {
            println!("Config already exists at: {}", path.display());
        }
        return Ok(());
    }

    println!("# {}", path.display());
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn target_path(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(FrameKitConfig::default_path)
}

/// Returns `false` without touching the file when it already exists.
fn write_if_missing(config: &FrameKitConfig, path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    config.save_to(path)?;
    Ok(true)
}
