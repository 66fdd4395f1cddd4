use super::*;
use crate::auth::AuthSession;
use crate::game::{AudioSettings, GameState};
use crate::model::{Progress, Theme};
use crate::notifications::NotificationSettings;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Acceso tipado a una clave. `load` nunca falla: ausente o corrupto es `None`.
pub trait Repository {
    type Value: Serialize + DeserializeOwned;
    const KEY: &'static str;

    fn load(store: &dyn KeyValueStore) -> Option<Self::Value> {
        let raw = store.get(Self::KEY)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Descartando valor ilegible en '{}': {e}", Self::KEY);
                None
            }
        }
    }

    fn save(store: &mut dyn KeyValueStore, value: &Self::Value) -> Result<(), StorageError> {
        let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: Self::KEY,
            source,
        })?;
        store.set(Self::KEY, json);
        Ok(())
    }

    fn clear(store: &mut dyn KeyValueStore) {
        store.remove(Self::KEY);
    }
}

pub struct AuthRepo;
impl Repository for AuthRepo {
    type Value = AuthSession;
    const KEY: &'static str = AUTH_KEY;
}

pub struct FirstAccessRepo;
impl Repository for FirstAccessRepo {
    type Value = DateTime<Utc>;
    const KEY: &'static str = FIRST_ACCESS_KEY;
}

pub struct LoginCountRepo;
impl Repository for LoginCountRepo {
    type Value = u32;
    const KEY: &'static str = LOGIN_COUNT_KEY;
}

pub struct ThemeRepo;
impl Repository for ThemeRepo {
    type Value = Theme;
    const KEY: &'static str = THEME_KEY;
}

pub struct ProgressRepo;
impl Repository for ProgressRepo {
    type Value = Vec<Progress>;
    const KEY: &'static str = PROGRESS_KEY;
}

pub struct NotificationRepo;
impl Repository for NotificationRepo {
    type Value = NotificationSettings;
    const KEY: &'static str = NOTIFICATIONS_KEY;
}

pub struct GameSaveRepo;
impl Repository for GameSaveRepo {
    type Value = GameState;
    const KEY: &'static str = GAME_SAVE_KEY;
}

pub struct AudioRepo;
impl Repository for AudioRepo {
    type Value = AudioSettings;
    const KEY: &'static str = GAME_AUDIO_KEY;
}
