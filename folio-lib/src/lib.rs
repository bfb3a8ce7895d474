//! Local storage for personal profiles.
//!
//! Everything goes through a [`ProfileStore`], which keeps a set of known names, one archived
//! record per name and a snapshot of the most recently saved or loaded form in a small embedded
//! key-value database.

use thiserror::Error;

pub mod fs;
pub mod notice;
pub mod repository;

pub use notice::{Notice, NoticeLength, Notifier};
pub use repository::{
    Cfg, CoreConfig, Db, Initialized, NoticeStyle, ProfileStore,
    entities::{Profile, ProfileField},
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Entity(#[from] repository::entities::Error),
    #[error("Failed to open profile database: {0}")]
    Db(#[from] agdb::DbError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
    #[error("$HOME must exist")]
    NoHome,
    #[error("Path is not valid UTF-8: {0}")]
    NonUtf8Path(std::path::PathBuf),
}
