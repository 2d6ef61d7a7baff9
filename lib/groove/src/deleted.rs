use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{error::Result, traits::KeyValueStore};

/// Composite identity of a library item: `title|artist`, trimmed and
/// lowercased, so items differing only in case or surrounding whitespace
/// share a key.
pub fn key_ta(title: Option<&str>, artist: Option<&str>) -> String {
    let normalize = |part: Option<&str>| part.unwrap_or_default().trim().to_lowercase();
    format!("{}|{}", normalize(title), normalize(artist))
}

/// Composite keys of deleted items, persisted as a JSON array of strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeletedSet(BTreeSet<String>);

impl DeletedSet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Returns whether the key was not already present.
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.0.insert(key.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DeletedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Reads the set stored under `key`. Never fails: a missing value, malformed
/// JSON or anything but an array gives an empty set, and non-string entries
/// are dropped.
pub fn load_set<S: KeyValueStore + ?Sized>(store: &S, key: &str) -> DeletedSet {
    let Some(json) = store.get(key) else {
        debug!("Nothing stored under {}", key);
        return DeletedSet::new();
    };

    match parse_set(&json) {
        Ok(set) => set,
        Err(e) => {
            warn!("Discarding unreadable set under {}: {}", key, e);
            DeletedSet::new()
        }
    }
}

fn parse_set(json: &str) -> Result<DeletedSet> {
    let entries: Option<Vec<Value>> = serde_json::from_str(json)?;
    Ok(entries
        .unwrap_or_default()
        .into_iter()
        .filter_map(|entry| match entry {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect())
}

/// Writes `set` under `key`, replacing whatever was there.
pub fn save_set<S: KeyValueStore + ?Sized>(store: &S, key: &str, set: &DeletedSet) -> Result<()> {
    let json = serde_json::to_string(set)?;
    store.set(key, &json)
}
