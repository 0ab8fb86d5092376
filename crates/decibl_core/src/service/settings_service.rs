//! Settings use-cases over durable key-value storage.
//!
//! # Responsibility
//! - Load the stored settings object and complete it with defaults.
//! - Persist full settings objects and reset to defaults.
//!
//! # Invariants
//! - `get` always returns a complete `Settings`; nothing partial escapes.
//! - Merging is deep: a stored `hotkeys` object missing a key keeps the
//!   default for that key.
//! - A stored field that cannot be decoded falls back to its default alone;
//!   unreadable JSON falls back to all defaults.
//! - `update` overwrites the stored object as a whole.

use crate::latency::{LatencyProfile, Operation};
use crate::model::settings::Settings;
use crate::repo::kv_repo::{KeyValueStore, StorageError};
use log::{info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized settings object.
pub const SETTINGS_STORAGE_KEY: &str = "decibl_settings";

#[derive(Debug)]
pub enum SettingsError {
    Storage(StorageError),
    Serialize(serde_json::Error),
}

impl Display for SettingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize settings: {err}"),
        }
    }
}

impl Error for SettingsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for SettingsError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Settings facade over a key-value store implementation.
pub struct SettingsService<S: KeyValueStore> {
    store: S,
    latency: LatencyProfile,
}

impl<S: KeyValueStore> SettingsService<S> {
    pub fn new(store: S, latency: LatencyProfile) -> Self {
        Self { store, latency }
    }

    /// Returns stored settings merged over defaults.
    pub async fn get(&self) -> Result<Settings, SettingsError> {
        self.latency.pause(Operation::SettingsRead).await;
        let stored = self.store.get(SETTINGS_STORAGE_KEY)?;
        Ok(stored.map_or_else(Settings::default, |raw| resolve_settings(&raw)))
    }

    /// Replaces the stored settings object and returns a copy of it.
    pub async fn update(&self, settings: &Settings) -> Result<Settings, SettingsError> {
        self.latency.pause(Operation::SettingsWrite).await;
        let raw = serde_json::to_string(settings)?;
        self.store.set(SETTINGS_STORAGE_KEY, &raw)?;
        info!("event=settings_update module=service status=ok");
        Ok(settings.clone())
    }

    /// Drops the stored object; later `get` calls return defaults.
    pub async fn reset(&self) -> Result<Settings, SettingsError> {
        self.latency.pause(Operation::SettingsRead).await;
        self.store.remove(SETTINGS_STORAGE_KEY)?;
        info!("event=settings_reset module=service status=ok");
        Ok(Settings::default())
    }
}

/// Completes a stored settings document with defaults.
pub fn resolve_settings(stored: &str) -> Settings {
    let defaults = Settings::default();
    let stored_fields = match serde_json::from_str::<Value>(stored) {
        Ok(Value::Object(fields)) => fields,
        Ok(_) => {
            warn!("event=settings_load module=service status=fallback reason=not_an_object");
            return defaults;
        }
        Err(err) => {
            warn!("event=settings_load module=service status=fallback reason=invalid_json error={err}");
            return defaults;
        }
    };

    let mut merged = match serde_json::to_value(&defaults) {
        Ok(value) => value,
        Err(_) => return defaults,
    };

    for (field, value) in stored_fields {
        let mut candidate = merged.clone();
        if let Value::Object(candidate_fields) = &mut candidate {
            deep_merge(
                candidate_fields.entry(field.clone()).or_insert(Value::Null),
                value,
            );
        }
        if serde_json::from_value::<Settings>(candidate.clone()).is_ok() {
            merged = candidate;
        } else {
            warn!("event=settings_load module=service status=fallback field={field}");
        }
    }

    serde_json::from_value(merged).unwrap_or(defaults)
}

fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_fields), Value::Object(overlay_fields)) => {
            for (key, value) in overlay_fields {
                deep_merge(base_fields.entry(key).or_insert(Value::Null), value);
            }
        }
        (slot, value) => *slot = value,
    }
}
