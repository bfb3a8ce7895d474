use getset::Getters;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::repository::{
    db::models::{DATA_SAVED_KEY, NAME_LIST_KEY, ProfileRecord, name_data_key},
    entities::{Error, Profile, ProfileField, Result},
};

mod db;

pub mod config;
pub mod entities;

pub use config::{Cfg, CoreConfig, NoticeStyle};
pub use db::{Db, Editor, Prefs};

/// Central access point for all persisted profile data.
///
/// The [`ProfileStore`] owns the name index, one archived record per saved name and the
/// current-form snapshot. Each operation reads one consistent view of the database and
/// commits its writes together, so callers never observe half of an operation.
#[derive(Clone, Debug)]
pub struct ProfileStore {
    db: Db,
}

/// What a caller needs to populate its view on startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Initialized {
    /// Saved names in display order
    names: Vec<String>,
    /// The last saved or loaded profile, if anything has ever been saved
    form: Option<Profile>,
}

impl ProfileStore {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Open the store at the location given by the configuration.
    pub fn open(cfg: &Cfg) -> crate::Result<Self> {
        let path = cfg.read().store_path()?;
        debug!("Opening profile store at {}", path.display());

        Ok(Self::new(Db::open(&path)?))
    }

    /// Load the name index and, once anything has been saved, the current-form snapshot.
    /// An empty store is the normal first-run state and is not an error.
    pub fn initialize(&self) -> Result<Initialized> {
        let prefs = self.db.prefs()?;

        Ok(Initialized {
            names: sorted_names(&prefs)?,
            form: load_form(&prefs)?,
        })
    }

    /// The current-form snapshot, if anything has ever been saved.
    pub fn current_form(&self) -> Result<Option<Profile>> {
        load_form(&self.db.prefs()?)
    }

    /// Save `profile`, overwriting any profile with the same name, and make it the current
    /// form. Returns the saved profile.
    pub fn save(&self, profile: &Profile) -> Result<Profile> {
        let record = ProfileRecord::from_profile(profile);

        let collisions = record.collisions();
        if !collisions.is_empty() {
            warn!(
                "Profile '{}' has fields containing ',' which will not load back: {:?}",
                profile.name, collisions
            );
        }

        let mut names = self.db.prefs()?.string_set(NAME_LIST_KEY)?;
        names.insert(profile.name.clone());

        put_form(self.db.edit(), profile)
            .put_flag(DATA_SAVED_KEY, true)
            .put_string(&name_data_key(&profile.name), &record.serialize())
            .put_string_set(NAME_LIST_KEY, &names)
            .commit()?;

        debug!("Saved profile: {}", profile.name);

        Ok(profile.clone())
    }

    /// Every saved name, sorted for display.
    pub fn list_names(&self) -> Result<Vec<String>> {
        sorted_names(&self.db.prefs()?)
    }

    /// Saved names where the whole name, or any space separated word of it, starts with
    /// `query`, ignoring case. An empty query matches everything.
    pub fn filter_names(&self, query: &str) -> Result<Vec<String>> {
        let query = query.to_lowercase();

        Ok(self
            .list_names()?
            .into_iter()
            .filter(|name| {
                let name = name.to_lowercase();
                name.starts_with(&query) || name.split(' ').any(|word| word.starts_with(&query))
            })
            .collect())
    }

    /// Delete the profile shown at `position` in the caller's list `names`.
    ///
    /// Fails with [`Error::Selection`] and changes nothing when no valid row is selected.
    /// The caller is responsible for removing the same row from its own list.
    pub fn delete_by_position(&self, position: Option<usize>, names: &[String]) -> Result<String> {
        let name = position
            .and_then(|position| names.get(position))
            .ok_or(Error::Selection)?;

        let mut index = self.db.prefs()?.string_set(NAME_LIST_KEY)?;
        if !index.remove(name) {
            warn!("'{name}' was not in the name index");
        }

        self.db
            .edit()
            .put_string_set(NAME_LIST_KEY, &index)
            .remove(&name_data_key(name))
            .commit()?;

        debug!("Removed profile: {name}");

        Ok(name.clone())
    }

    /// Load the profile saved under `query` and make it the current form.
    ///
    /// `query` is trimmed before use. A malformed record is reported and nothing is applied.
    pub fn search_by_name(&self, query: &str) -> Result<Profile> {
        let name = query.trim();
        if name.is_empty() {
            return Err(Error::EmptyQuery);
        }

        let data = self
            .db
            .prefs()?
            .string(&name_data_key(name))?
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        let profile = ProfileRecord::parse(name, &data)?.into_profile(name);

        put_form(self.db.edit(), &profile).commit()?;

        debug!("Loaded profile: {name}");

        Ok(profile)
    }

    /// Return a mock version of a [`ProfileStore`] backed by an in-memory database.
    #[cfg(test)]
    pub(crate) fn mock() -> Self {
        Self::new(Db::in_memory().unwrap())
    }

    #[cfg(test)]
    pub(crate) fn db(&self) -> &Db {
        &self.db
    }
}

fn sorted_names(prefs: &Prefs) -> Result<Vec<String>> {
    // BTreeSet iterates in sorted order
    Ok(prefs.string_set(NAME_LIST_KEY)?.into_iter().collect())
}

fn load_form(prefs: &Prefs) -> Result<Option<Profile>> {
    if !prefs.flag(DATA_SAVED_KEY, false)? {
        return Ok(None);
    }

    let mut profile = Profile::default();
    for field in ProfileField::iter() {
        profile.set(field, prefs.string(field.key())?.unwrap_or_default());
    }

    Ok(Some(profile))
}

fn put_form<'a>(editor: Editor<'a>, profile: &Profile) -> Editor<'a> {
    ProfileField::iter().fold(editor, |editor, field| {
        editor.put_string(field.key(), profile.get(field))
    })
}
