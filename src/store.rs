//! String-keyed store of JSON documents.
//!
//! Every value is kept as the raw serialized string, the same shape a browser's
//! `localStorage` would hold. Typed access goes through [`LocalStore::read_json`] and
//! [`LocalStore::write_json`], which default missing keys and reject corrupted ones.

use crate::errors::StoreError;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::collections::BTreeMap;

pub const USER_KEY: &str = "mindconnect_user";
pub const ADMIN_KEY: &str = "mindconnect_admin";
pub const USERS_KEY: &str = "mindconnect_users";
pub const MOOD_ENTRIES_KEY: &str = "mood_entries";
pub const JOURNAL_ENTRIES_KEY: &str = "journal_entries";
pub const SETTINGS_KEY: &str = "mindconnect_settings";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LocalStore {
    items: BTreeMap<String, String>,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_item(&self, key: &str) -> Option<&str> {
        self.items.get(key).map(String::as_str)
    }

    pub fn set_item(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }

    pub fn remove_item(&mut self, key: &str) -> Option<String> {
        self.items.remove(key)
    }

    /// Parses the value under `key`. A missing key or a stored `null` yields `T::default()`.
    pub fn read_json<T>(&self, key: &str) -> Result<T, StoreError>
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.get_item(key) else {
            return Ok(T::default());
        };
        let value: Option<T> = serde_json::from_str(raw).map_err(|source| StoreError::Corrupt {
            key: key.to_string(),
            source,
        })?;
        Ok(value.unwrap_or_default())
    }

    pub fn write_json<T>(&mut self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.set_item(key, raw);
        Ok(())
    }

    /// Read-modify-write of the array under `key`.
    pub fn append<T>(&mut self, key: &str, record: T) -> Result<usize, StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut records: Vec<T> = self.read_json(key)?;
        records.push(record);
        self.write_json(key, &records)?;
        Ok(records.len())
    }
}
