// src/view_models.rs

#[derive(Clone, Debug)]
pub struct ModuleCard {
    pub idx: usize,    // índice 0-based en catalog.modules
    pub number: usize, // número "humano" (1,2,3)
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub total_lessons: usize,
    pub completed_lessons: usize,
    pub percent: u32,
}

#[derive(Clone, Debug)]
pub struct LessonRow {
    pub index: usize,
    pub title: String,
    pub duration: String,
    pub watched: bool,
    pub current: bool,
}

/// Una tarjeta de "Continuar Assistindo".
#[derive(Clone, Debug)]
pub struct ContinueRow {
    pub module_idx: usize,
    pub title: String,
    pub current_lesson: usize,
    pub current_lesson_title: Option<String>,
    pub completed_lessons: usize,
    pub total_lessons: usize,
    pub percent: u32,
    pub last_watched: String, // dd/mm/aaaa
    pub next_module: Option<(usize, usize)>, // (índice, número) si el módulo está completo
}

impl ModuleCard {
    pub fn is_completed(&self) -> bool {
        self.completed_lessons >= self.total_lessons
    }

    pub fn label(&self) -> String {
        if self.is_completed() {
            format!("Módulo {}: {} ✅", self.number, self.title)
        } else {
            format!("Módulo {}: {}", self.number, self.title)
        }
    }

    pub fn progress_label(&self) -> String {
        format!(
            "{}/{} aulas · {}%",
            self.completed_lessons, self.total_lessons, self.percent
        )
    }
}

impl LessonRow {
    pub fn label(&self) -> String {
        let icon = if self.current {
            "▶"
        } else if self.watched {
            "✅"
        } else {
            "○"
        };
        format!("{icon} {}. {}  ({})", self.index + 1, self.title, self.duration)
    }
}

impl ContinueRow {
    pub fn is_completed(&self) -> bool {
        self.completed_lessons >= self.total_lessons
    }

    pub fn status_label(&self) -> String {
        match (&self.current_lesson_title, self.is_completed()) {
            (_, true) => "✅ Módulo concluído!".to_string(),
            (Some(title), false) => format!("Aula {}: {}", self.current_lesson + 1, title),
            (None, false) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_row_label_prefers_current_marker() {
        let row = LessonRow {
            index: 1,
            title: "Respiração".to_string(),
            duration: "5:10".to_string(),
            watched: true,
            current: true,
        };
        assert_eq!(row.label(), "▶ 2. Respiração  (5:10)");
        let watched = LessonRow { current: false, ..row };
        assert!(watched.label().starts_with("✅ 2."));
    }

    #[test]
    fn test_module_card_labels() {
        let card = ModuleCard {
            idx: 0,
            number: 1,
            title: "Fundamentos".to_string(),
            description: String::new(),
            cover_image: String::new(),
            total_lessons: 5,
            completed_lessons: 5,
            percent: 100,
        };
        assert_eq!(card.label(), "Módulo 1: Fundamentos ✅");
        assert_eq!(card.progress_label(), "5/5 aulas · 100%");
    }
}
