use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fs::create_dir_all,
    path::Path,
    sync::Arc,
};

use agdb::{DbAny, DbError, DbKeyValue, DbValue, QueryBuilder};
use derive_more::Deref;
use parking_lot::RwLock;
use tracing::trace;

use crate::{
    Error,
    repository::entities::{self, Result},
};

pub(crate) mod models;

/// Alias of the single node whose key/value pairs hold every preference.
const PREFS: &str = "prefs";

/// Handle to the embedded key-value database backing a [`ProfileStore`].
///
/// Reads go through [`Db::prefs`], which takes one consistent snapshot of every stored value.
/// Writes are batched in an [`Editor`] and applied in a single transaction on
/// [`Editor::commit`].
///
/// [`ProfileStore`]: crate::ProfileStore
#[derive(Debug, Clone, Deref)]
pub struct Db {
    #[deref]
    db: Arc<RwLock<DbAny>>,
}

impl Db {
    /// Open (or create) a file backed database at `path`.
    pub fn open(path: &Path) -> crate::Result<Self> {
        if let Some(parent) = path.parent() {
            create_dir_all(parent)?;
        }
        let path_str = path
            .to_str()
            .ok_or_else(|| Error::NonUtf8Path(path.to_path_buf()))?;

        let db = Self {
            db: Arc::new(RwLock::new(DbAny::new_file(path_str)?)),
        };

        db.init()?;

        Ok(db)
    }

    /// Create a memory backed database. Nothing written to it outlives the handle.
    pub fn in_memory() -> crate::Result<Self> {
        let db = Self {
            db: Arc::new(RwLock::new(DbAny::new_memory("folio")?)),
        };

        db.init()?;

        Ok(db)
    }

    fn init(&self) -> std::result::Result<(), DbError> {
        let alias_count = self
            .db
            .read()
            .exec(QueryBuilder::select().aliases().query())?
            .result;

        if alias_count == 0 {
            self.db
                .write()
                .exec_mut(QueryBuilder::insert().nodes().aliases([PREFS]).query())?;
        }

        Ok(())
    }

    /// Read every stored preference at once.
    pub fn prefs(&self) -> Result<Prefs> {
        let values = self
            .db
            .read()
            .exec(QueryBuilder::select().ids(PREFS).query())?
            .elements
            .pop()
            .map(|element| element.values)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|kv| match kv.key {
                DbValue::String(key) => Some((key, kv.value)),
                _ => None,
            })
            .collect();

        Ok(Prefs { values })
    }

    /// Start a batch of writes. Nothing is stored until [`Editor::commit`] is called.
    pub fn edit(&self) -> Editor<'_> {
        Editor {
            db: self,
            edits: BTreeMap::new(),
        }
    }
}

/// A point-in-time copy of the stored preferences.
#[derive(Debug, Clone, Default)]
pub struct Prefs {
    values: HashMap<String, DbValue>,
}

impl Prefs {
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn string(&self, key: &str) -> Result<Option<String>> {
        match self.values.get(key) {
            None => Ok(None),
            Some(DbValue::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(unexpected_type(key)),
        }
    }

    pub fn flag(&self, key: &str, default: bool) -> Result<bool> {
        match self.values.get(key) {
            None => Ok(default),
            Some(DbValue::U64(value)) => Ok(*value != 0),
            Some(_) => Err(unexpected_type(key)),
        }
    }

    pub fn string_set(&self, key: &str) -> Result<BTreeSet<String>> {
        match self.values.get(key) {
            None => Ok(BTreeSet::new()),
            Some(DbValue::VecString(values)) => Ok(values.iter().cloned().collect()),
            Some(_) => Err(unexpected_type(key)),
        }
    }
}

fn unexpected_type(key: &str) -> entities::Error {
    entities::Error::UnexpectedType {
        key: key.to_string(),
    }
}

/// A batch of preference writes.
///
/// Later writes to the same key replace earlier ones, so a `put` followed by a `remove` of
/// the same key removes it.
#[derive(Debug)]
#[must_use = "edits are discarded unless committed"]
pub struct Editor<'a> {
    db: &'a Db,
    /// `None` marks a removal
    edits: BTreeMap<String, Option<DbValue>>,
}

impl Editor<'_> {
    pub fn put_string(mut self, key: &str, value: &str) -> Self {
        self.edits
            .insert(key.to_string(), Some(DbValue::from(value)));
        self
    }

    pub fn put_flag(mut self, key: &str, value: bool) -> Self {
        self.edits
            .insert(key.to_string(), Some(DbValue::U64(u64::from(value))));
        self
    }

    /// Store a string set. An empty set is stored as an absent key, which reads back as empty.
    pub fn put_string_set(mut self, key: &str, values: &BTreeSet<String>) -> Self {
        let value = if values.is_empty() {
            None
        } else {
            Some(DbValue::VecString(values.iter().cloned().collect()))
        };
        self.edits.insert(key.to_string(), value);
        self
    }

    pub fn remove(mut self, key: &str) -> Self {
        self.edits.insert(key.to_string(), None);
        self
    }

    /// Apply every edit in one transaction. Either all of them are stored or none are.
    pub fn commit(self) -> Result<()> {
        let mut inserts: Vec<DbKeyValue> = Vec::new();
        let mut removals: Vec<DbValue> = Vec::new();

        for (key, value) in self.edits {
            match value {
                Some(value) => inserts.push((key, value).into()),
                None => removals.push(key.into()),
            }
        }

        trace!(
            "Committing {} insert(s) and {} removal(s)",
            inserts.len(),
            removals.len()
        );

        self.db
            .write()
            .transaction_mut(|t| -> std::result::Result<(), DbError> {
                if !removals.is_empty() {
                    t.exec_mut(QueryBuilder::remove().values(removals).ids(PREFS).query())?;
                }
                if !inserts.is_empty() {
                    t.exec_mut(
                        QueryBuilder::insert()
                            .values(vec![inserts])
                            .ids(PREFS)
                            .query(),
                    )?;
                }

                Ok(())
            })?;

        Ok(())
    }
}
