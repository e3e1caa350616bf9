use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::{info, warn};

use crate::ui::settings::HubSettings;

fn settings_path() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("midtown_hub");
    path.push("settings.json");
    Some(path)
}

/// Loads settings from the user's config directory. A missing file means
/// defaults; a broken one is logged and also means defaults.
pub fn load_settings() -> HubSettings {
    let Some(path) = settings_path() else {
        warn!("no config directory on this platform, using default settings");
        return HubSettings::default();
    };

    if !path.exists() {
        info!("no settings at {}, using defaults", path.display());
        return HubSettings::default();
    }

    match read_settings(&path) {
        Ok(settings) => {
            info!("loaded settings from {}", path.display());
            settings
        }
        Err(err) => {
            warn!("{err:#}; using default settings");
            HubSettings::default()
        }
    }
}

pub fn read_settings(path: &Path) -> anyhow::Result<HubSettings> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid settings in {}", path.display()))
}
