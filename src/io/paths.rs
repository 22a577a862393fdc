use std::path::{Path, PathBuf};

/// Directory under $HOME holding the rc layers
pub const CONFIG_DIR_NAME: &str = ".taskrc.d";
pub const BASE_FILE_NAME: &str = "urgency.base.rc";
pub const USER_FILE_NAME: &str = "urgency.rc";
pub const SETTINGS_FILE_NAME: &str = "tweak-urgency.toml";

/// Locations of every file the tool reads or writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Read-only defaults; must exist
    pub base: PathBuf,
    /// User override layer; the only file written
    pub user: PathBuf,
    /// Optional tool settings
    pub settings: PathBuf,
}

impl ConfigPaths {
    /// All files inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        ConfigPaths {
            base: dir.join(BASE_FILE_NAME),
            user: dir.join(USER_FILE_NAME),
            settings: dir.join(SETTINGS_FILE_NAME),
        }
    }

    /// The standard `~/.taskrc.d` layout
    pub fn from_home() -> Self {
        Self::in_dir(&home_dir().join(CONFIG_DIR_NAME))
    }
}

/// Get the user's home directory
fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}
