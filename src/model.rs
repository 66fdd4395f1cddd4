use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub video_id: String,
    pub duration: String,
    // Heredado del catálogo; la compleción real sale de `Progress`
    #[serde(default)]
    pub completed: bool,
}

impl Lesson {
    /// URL del reproductor embebible para esta aula.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub lessons: Vec<Lesson>,
}

impl Module {
    pub fn is_completed_by(&self, completed_lessons: usize) -> bool {
        completed_lessons >= self.lessons.len()
    }

    pub fn last_lesson_index(&self) -> usize {
        self.lessons.len().saturating_sub(1)
    }
}

/// Posición y compleción de un usuario dentro de un módulo.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub module_id: String,
    pub current_lesson: usize,
    pub completed_lessons: usize,
    pub last_watched: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Tip {
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Pestañas de la barra inferior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Continue,
    More,
    Settings,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Continue, Tab::More, Tab::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "🏠 Principal",
            Tab::Continue => "▶ Continuar",
            Tab::More => "📚 Mais conteúdos",
            Tab::Settings => "⚙ Configurações",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Login,
    Home,
    Continue,
    More,
    Settings,
    Module,
    SleepCalculator,
    HelpCenter,
    QuickTips,
    Game,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Login
    }
}

impl AppState {
    /// Pestaña que se resalta para cada pantalla.
    pub fn tab(self) -> Option<Tab> {
        match self {
            AppState::Login => None,
            AppState::Home | AppState::Module => Some(Tab::Home),
            AppState::Continue => Some(Tab::Continue),
            AppState::More
            | AppState::SleepCalculator
            | AppState::HelpCenter
            | AppState::QuickTips
            | AppState::Game => Some(Tab::More),
            AppState::Settings => Some(Tab::Settings),
        }
    }
}
