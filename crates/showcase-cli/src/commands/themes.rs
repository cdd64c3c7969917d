use anyhow::Result;

use showcase_core::{AppConfig, PrefStore, ThemePreference};

/// List the available appearances and mark the stored preference
pub fn run(config: &AppConfig) -> Result<()> {
    let prefs = PrefStore::open(config.prefs_path());
    let stored = prefs.theme_preference();

    for pref in [ThemePreference::Light, ThemePreference::Dark] {
        let marker = if stored == Some(pref) { "*" } else { " " };
        println!("{} {}", marker, pref.as_str());
    }
    if stored.is_none() {
        println!("(no stored preference; the system appearance is used)");
    }

    Ok(())
}
