//! Core domain entities for Folio.
//!
//! A [`Profile`] is the seven-field personal record the store saves, loads and deletes.
//! [`Error`] covers everything a store operation can fail with.

use thiserror::Error;

mod profile;

pub use profile::{Profile, ProfileField};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Delete was requested without a valid row selected
    #[error("Select a name to delete")]
    Selection,
    /// Search was requested with a blank query
    #[error("Enter a name to search")]
    EmptyQuery,
    #[error("No data found for the name")]
    NotFound(String),
    /// The archived record for `name` did not split into six fields
    #[error("Data format is incorrect")]
    MalformedRecord { name: String, fields: usize },
    #[error("Stored value for '{key}' has an unexpected type")]
    UnexpectedType { key: String },
    #[error("Internal database error {0}")]
    Internal(#[from] agdb::DbError),
}

impl Error {
    /// Whether the user can fix this by changing their input, as opposed to a storage fault.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::Selection | Error::EmptyQuery | Error::NotFound(_) | Error::MalformedRecord { .. }
        )
    }
}
