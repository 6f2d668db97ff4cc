use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Default name of the keyword/template configuration document.
pub const CONFIG_FILENAME: &str = "config.json";

/// Default name of the exchange history document.
pub const HISTORY_FILENAME: &str = "message_history.json";

/// Resolves where the responder keeps its files.
///
/// Everything lives under a single data directory so the application stays portable:
/// copy the directory and the configuration and history move with it.
#[derive(Debug, Clone)]
pub struct PortablePathManager {
    data_dir: PathBuf,
}

impl PortablePathManager {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Uses `./data` under the current working directory.
    pub fn from_current_dir() -> Self {
        match std::env::current_dir() {
            Ok(dir) => Self::new(dir.join("data")),
            Err(e) => {
                error!("Failed to get current directory: {}. Using relative ./data", e);
                Self::new("data")
            }
        }
    }

    /// Root data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Location of the configuration document (`<data>/config.json`).
    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join(CONFIG_FILENAME)
    }

    /// Location of the history document (`<data>/message_history.json`).
    pub fn history_file(&self) -> PathBuf {
        self.data_dir.join(HISTORY_FILENAME)
    }

    /// Creates the data directory if it does not exist.
    pub fn init(&self) -> Result<(), std::io::Error> {
        if !self.data_dir.exists() {
            info!("Creating data directory: {:?}", self.data_dir);
            fs::create_dir_all(&self.data_dir)?;
        }
        Ok(())
    }
}

/// Creates the parent directory of `path` when it is missing.
pub fn ensure_parent_dir(path: &Path) -> Result<(), std::io::Error> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            info!("Creating directory: {:?}", parent);
            fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_are_under_data_dir() {
        let paths = PortablePathManager::new("/srv/responder");
        assert_eq!(paths.config_file(), PathBuf::from("/srv/responder/config.json"));
        assert_eq!(
            paths.history_file(),
            PathBuf::from("/srv/responder/message_history.json")
        );
    }

    #[test]
    fn test_init_creates_nested_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PortablePathManager::new(temp_dir.path().join("a").join("b"));

        paths.init().unwrap();

        assert!(paths.data_dir().is_dir());
    }

    #[test]
    fn test_ensure_parent_dir_for_bare_filename() {
        assert!(ensure_parent_dir(Path::new("history.json")).is_ok());
    }
}
