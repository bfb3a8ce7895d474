use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::debug;

use crate::{
    Result,
    fs::{config_dir, data_dir},
};

const FILE_NAME: &str = "core.toml";
const STORE_FILE_NAME: &str = "profiles.db";

/// Handle to the core configuration
pub type Cfg = Arc<RwLock<CoreConfig>>;

/// The core configuration, serialized to TOML.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Location of the profile database. Falls back to the data directory when unset.
    pub store_path: Option<PathBuf>,
    pub notice_style: NoticeStyle,
}

/// How notices are rendered to the user
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NoticeStyle {
    Plain,
    #[default]
    Color,
}

impl CoreConfig {
    /// Load the configuration from the config directory, writing the defaults there on first
    /// run.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_dir()?.join(FILE_NAME))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            debug!("No configuration at {}, writing defaults", path.display());
            let cfg = Self::default();
            cfg.save_to(path)?;
            Ok(cfg)
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;

        Ok(())
    }

    /// The database path to open, honouring `store_path` when it is set.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join(STORE_FILE_NAME)),
        }
    }
}

#[cfg(test)]
mod test {
    use std::{fs, path::PathBuf};

    use tempfile::tempdir;

    use super::{CoreConfig, NoticeStyle};
    use crate::Error;

    #[test]
    fn test_load_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("core.toml");

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg, CoreConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("core.toml");
        let cfg = CoreConfig {
            store_path: Some(PathBuf::from("/tmp/folio/profiles.db")),
            notice_style: NoticeStyle::Plain,
        };

        cfg.save_to(&path).unwrap();

        assert_eq!(CoreConfig::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("core.toml");
        fs::write(&path, "notice_style = \"plain\"\n").unwrap();

        let cfg = CoreConfig::load_from(&path).unwrap();

        assert_eq!(cfg.store_path, None);
        assert_eq!(cfg.notice_style, NoticeStyle::Plain);
    }

    #[test]
    fn test_invalid_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("core.toml");
        fs::write(&path, "notice_style = 3\n").unwrap();

        assert!(matches!(
            CoreConfig::load_from(&path),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn test_explicit_store_path() {
        let cfg = CoreConfig {
            store_path: Some(PathBuf::from("/srv/profiles.db")),
            ..Default::default()
        };

        assert_eq!(cfg.store_path().unwrap(), PathBuf::from("/srv/profiles.db"));
    }
}
