//! Almacenamiento clave → texto, local al dispositivo.
//!
//! `LocalStore` es la copia en memoria con la que trabaja la app; se
//! vuelca al `eframe::Storage` (localStorage en web, fichero en nativo)
//! en el mismo frame en que cambia.

use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

pub mod repos;

pub use repos::{
    AudioRepo, AuthRepo, FirstAccessRepo, GameSaveRepo, LoginCountRepo, NotificationRepo,
    ProgressRepo, Repository, ThemeRepo,
};

pub const AUTH_KEY: &str = "sleep-app-auth";
pub const FIRST_ACCESS_KEY: &str = "sleep-app-first-access";
pub const LOGIN_COUNT_KEY: &str = "sleep-app-login-count";
pub const THEME_KEY: &str = "sleep-app-theme";
pub const PROGRESS_KEY: &str = "sleep-app-progress";
pub const NOTIFICATIONS_KEY: &str = "sleep-app-notifications";
pub const GAME_SAVE_KEY: &str = "dream-story-save";
pub const GAME_AUDIO_KEY: &str = "game-audio-settings";

pub const ALL_KEYS: [&str; 8] = [
    AUTH_KEY,
    FIRST_ACCESS_KEY,
    LOGIN_COUNT_KEY,
    THEME_KEY,
    PROGRESS_KEY,
    NOTIFICATIONS_KEY,
    GAME_SAVE_KEY,
    GAME_AUDIO_KEY,
];

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("No se pudo serializar el valor de '{key}': {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

#[derive(Debug, Default, Clone)]
pub struct LocalStore {
    values: BTreeMap<String, String>,
    dirty: BTreeSet<String>,
}

impl LocalStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lee las claves conocidas del almacenamiento de eframe.
    /// Un valor vacío equivale a "sin dato".
    pub fn from_eframe(storage: Option<&dyn eframe::Storage>, keys: &[&str]) -> Self {
        let mut store = Self::new();
        if let Some(storage) = storage {
            for key in keys {
                if let Some(value) = storage.get_string(key).filter(|v| !v.is_empty()) {
                    store.values.insert((*key).to_string(), value);
                }
            }
        }
        store
    }

    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// Vuelca los cambios pendientes. eframe no tiene borrado: una clave
    /// eliminada se escribe como cadena vacía.
    pub fn sync_into(&mut self, storage: &mut dyn eframe::Storage) {
        for key in std::mem::take(&mut self.dirty) {
            let value = self.values.get(&key).cloned().unwrap_or_default();
            storage.set_string(&key, value);
        }
        storage.flush();
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        self.dirty.insert(key.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
        self.dirty.insert(key.to_string());
    }
}
