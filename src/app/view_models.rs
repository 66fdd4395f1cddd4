use super::*;
use crate::progress::{completion_percent, local_date_label};

impl SleepApp {
    pub fn module_cards(&self) -> Vec<ModuleCard> {
        self.catalog
            .modules
            .iter()
            .enumerate()
            .map(|(idx, m)| {
                let completed = self.tracker.completed_lessons(&m.id);
                ModuleCard {
                    idx,
                    number: idx + 1,
                    title: m.title.clone(),
                    description: m.description.clone(),
                    cover_image: m.cover_image.clone(),
                    total_lessons: m.lessons.len(),
                    completed_lessons: completed,
                    percent: completion_percent(completed, m.lessons.len()),
                }
            })
            .collect()
    }

    pub fn lesson_rows(&self) -> Vec<LessonRow> {
        let Some(session) = self.session else {
            return Vec::new();
        };
        let Some(module) = self.catalog.modules.get(session.module) else {
            return Vec::new();
        };
        let completed = self.tracker.completed_lessons(&module.id);
        module
            .lessons
            .iter()
            .enumerate()
            .map(|(i, lesson)| LessonRow {
                index: i,
                title: lesson.title.clone(),
                duration: lesson.duration.clone(),
                watched: i < completed,
                current: i == session.lesson,
            })
            .collect()
    }

    /// Vistos recientemente con su módulo; registros de módulos desconocidos se omiten.
    pub fn continue_rows(&self) -> Vec<ContinueRow> {
        self.tracker
            .recently_watched()
            .into_iter()
            .filter_map(|p| {
                let module_idx = self.catalog.module_index(&p.module_id)?;
                let module = &self.catalog.modules[module_idx];
                let total = module.lessons.len();
                let completed = module.is_completed_by(p.completed_lessons);
                let next_module = if completed {
                    self.catalog
                        .next_module(module_idx)
                        .map(|_| (module_idx + 1, module_idx + 2))
                } else {
                    None
                };
                Some(ContinueRow {
                    module_idx,
                    title: module.title.clone(),
                    current_lesson: p.current_lesson,
                    current_lesson_title: module
                        .lessons
                        .get(p.current_lesson)
                        .map(|l| l.title.clone()),
                    completed_lessons: p.completed_lessons,
                    total_lessons: total,
                    percent: completion_percent(p.completed_lessons, total),
                    last_watched: local_date_label(p.last_watched),
                    next_module,
                })
            })
            .collect()
    }
}
