use std::{fs, path::Path};

use anyhow::{Context, Result};

pub mod interface_package;
pub mod running_node;

/// Write a model file, creating parent directories as needed.
fn write_model(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!("Writing model to {}", path.display());
    Ok(())
}
