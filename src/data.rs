// src/data.rs

use crate::model::{FaqEntry, Module, Tip};
use serde::Deserialize;
use serde_yaml;

/// Carga el catálogo de módulos desde el YAML embebido
pub fn read_modules_embedded() -> Catalog {
    let file_content = include_str!("data/modules.yaml");
    let modules: Vec<Module> =
        serde_yaml::from_str(file_content).expect("No se pudo parsear el catálogo YAML");
    Catalog { modules }
}

pub fn read_faq_embedded() -> Vec<FaqEntry> {
    let file_content = include_str!("data/faq.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear el FAQ YAML")
}

pub fn read_tips_embedded() -> Vec<Tip> {
    let file_content = include_str!("data/tips.yaml");
    serde_yaml::from_str(file_content).expect("No se pudo parsear las dicas YAML")
}

/// Catálogo estático, de solo lectura en tiempo de ejecución.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub modules: Vec<Module>,
}

impl Catalog {
    pub fn module(&self, id: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    pub fn module_index(&self, id: &str) -> Option<usize> {
        self.modules.iter().position(|m| m.id == id)
    }

    pub fn next_module(&self, idx: usize) -> Option<&Module> {
        self.modules.get(idx + 1)
    }

    pub fn previous_module(&self, idx: usize) -> Option<&Module> {
        idx.checked_sub(1).and_then(|i| self.modules.get(i))
    }

    pub fn is_last_module(&self, idx: usize) -> bool {
        idx + 1 == self.modules.len()
    }

    pub fn total_lessons(&self) -> usize {
        self.modules.iter().map(|m| m.lessons.len()).sum()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct NotificationConfig {
    pub poll_interval_secs: u64,
    pub inactivity_hours: i64,
    pub cooldown_hours: i64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct GameConfig {
    pub tick_interval_ms: u64,
    pub minutes_per_tick: u32,
    pub activity_reset_secs: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub window_title: String,
    pub window_size: [f32; 2],
    pub credentials: Credentials,
    pub login_delay_ms: u64,
    pub logout_saving_ms: u64,
    pub logout_success_ms: u64,
    pub notifications: NotificationConfig,
    pub game: GameConfig,
}

impl AppConfig {
    pub fn embedded() -> Self {
        let file_content = include_str!("data/config.yaml");
        serde_yaml::from_str(file_content).expect("No se pudo parsear la configuración YAML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_modules_of_five_lessons() {
        let catalog = read_modules_embedded();
        assert_eq!(catalog.modules.len(), 3);
        assert!(catalog.modules.iter().all(|m| m.lessons.len() == 5));
        assert_eq!(catalog.total_lessons(), 15);
        assert_eq!(catalog.modules[1].lessons[2].video_id, "1_PK98iw1B4");
    }

    #[test]
    fn test_catalog_lookups() {
        let catalog = read_modules_embedded();
        assert_eq!(catalog.module_index("deep-sleep-mastery"), Some(1));
        assert!(catalog.module("nope").is_none());
        assert_eq!(
            catalog.next_module(0).map(|m| m.id.as_str()),
            Some("deep-sleep-mastery")
        );
        assert!(catalog.next_module(2).is_none());
        assert!(catalog.previous_module(0).is_none());
        assert!(catalog.is_last_module(2));
    }

    #[test]
    fn test_embedded_config_and_texts() {
        let config = AppConfig::embedded();
        assert_eq!(config.game.minutes_per_tick, 15);
        assert_eq!(config.notifications.poll_interval_secs, 60);
        assert!(!read_faq_embedded().is_empty());
        assert_eq!(read_tips_embedded().len(), 7);
    }
}
