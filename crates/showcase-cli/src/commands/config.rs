use anyhow::Result;

use showcase_core::AppConfig;

/// Print the configuration file path
pub fn run() -> Result<()> {
    let path = AppConfig::config_path();
    let note = if path.exists() { "" } else { " (not created yet)" };
    println!("{}{}", path.display(), note);
    Ok(())
}
