use crate::conf::CONFIG_FILE_NAME;
use anyhow::{Context, Result, bail};
use rust_embed::RustEmbed;
use std::fs;
use std::path::PathBuf;

#[derive(RustEmbed)]
#[folder = "config-templates/"]
pub struct ConfigTemplates;

/// Write the starter config to `path`, or to `path/killmon.hcl` when `path` is not an
/// `.hcl` file. Never overwrites.
pub fn init(path: PathBuf) -> Result<PathBuf> {
    let target = if path.extension().is_some_and(|ext| ext == "hcl") {
        path
    } else {
        path.join(CONFIG_FILE_NAME)
    };

    if target.exists() {
        bail!("{} already exists; refusing to overwrite", target.display());
    }

    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let template =
        ConfigTemplates::get(CONFIG_FILE_NAME).context("embedded config template missing")?;
    fs::write(&target, template.data.as_ref())
        .with_context(|| format!("failed to write {}", target.display()))?;

    // User feedback
    println!("✔ Initialized killmon config at {}", target.display());
    println!();
    println!("Next steps:");
    println!("  set monitor.handle to your in-game name");
    println!("  killmon config check {}", target.display());
    println!("  killmon run --config {}", target.display());

    Ok(target)
}
