use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::model::config::Settings;

/// Read tool settings. A missing file gives the defaults; a file that can't
/// be read or parsed is reported and also falls back to the defaults.
pub fn read_settings(path: &Path) -> Settings {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Settings::default(),
        Err(e) => {
            tracing::warn!("could not read {}: {}", path.display(), e);
            return Settings::default();
        }
    };

    match toml::from_str::<Settings>(&text) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("could not parse {} (using defaults): {}", path.display(), e);
            Settings::default()
        }
    }
}
