//! Registro de progreso por módulo.
//!
//! Un `Progress` por módulo abierto, identificado por `module_id`. Se
//! sobrescribe en cada aula vista y se borra entero con un reset explícito.

use crate::data::Catalog;
use crate::model::Progress;
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use std::collections::HashSet;

pub const RECENTLY_WATCHED_LIMIT: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    records: Vec<Progress>,
}

/// Última aula vista: para "continuar donde lo dejé".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastWatched {
    pub module_id: String,
    pub lesson_index: usize,
}

impl ProgressTracker {
    pub fn from_records(records: Vec<Progress>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Progress] {
        &self.records
    }

    pub fn update_progress(&mut self, module_id: &str, lesson_index: usize, completed_count: usize) {
        self.update_progress_at(module_id, lesson_index, completed_count, Utc::now());
    }

    /// Sustituye (o crea) el registro del módulo. Sin validación de rangos:
    /// eso es cosa de quien llama.
    pub fn update_progress_at(
        &mut self,
        module_id: &str,
        lesson_index: usize,
        completed_count: usize,
        now: DateTime<Utc>,
    ) {
        self.records.retain(|p| p.module_id != module_id);
        self.records.push(Progress {
            module_id: module_id.to_string(),
            current_lesson: lesson_index,
            completed_lessons: completed_count,
            last_watched: now,
        });
    }

    pub fn module_progress(&self, module_id: &str) -> Option<&Progress> {
        self.records.iter().find(|p| p.module_id == module_id)
    }

    pub fn completed_lessons(&self, module_id: &str) -> usize {
        self.module_progress(module_id)
            .map(|p| p.completed_lessons)
            .unwrap_or(0)
    }

    /// Más reciente primero, como mucho 5.
    pub fn recently_watched(&self) -> Vec<&Progress> {
        let mut sorted: Vec<&Progress> = self.records.iter().collect();
        sorted.sort_by(|a, b| b.last_watched.cmp(&a.last_watched));
        sorted.truncate(RECENTLY_WATCHED_LIMIT);
        sorted
    }

    pub fn last_watched_video(&self) -> Option<LastWatched> {
        self.records
            .iter()
            .max_by_key(|p| p.last_watched)
            .map(|p| LastWatched {
                module_id: p.module_id.clone(),
                lesson_index: p.current_lesson,
            })
    }

    pub fn has_any_progress(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn reset_all_progress(&mut self) {
        self.records.clear();
    }
}

pub fn completion_percent(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((completed as f64 / total as f64) * 100.0).round() as u32
}

/// Fecha de calendario de `at` vista desde la zona `tz`.
pub fn calendar_date<Tz: TimeZone>(at: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    at.with_timezone(tz).date_naive()
}

/// Fecha local en formato dd/mm/aaaa.
pub fn local_date_label(at: DateTime<Utc>) -> String {
    calendar_date(at, &Local).format("%d/%m/%Y").to_string()
}

/// Estadísticas de la pantalla de configuración.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub active_days: usize,
    pub lessons_watched: usize,
    pub lessons_available: usize,
    pub progress_percentage: u32,
}

impl UserStats {
    /// Días activos según el calendario local del usuario.
    pub fn compute(tracker: &ProgressTracker, catalog: &Catalog) -> Self {
        Self::compute_in(tracker, catalog, &Local)
    }

    pub fn compute_in<Tz: TimeZone>(tracker: &ProgressTracker, catalog: &Catalog, tz: &Tz) -> Self {
        let recent = tracker.recently_watched();

        let lessons_available = catalog.total_lessons();
        let lessons_watched = catalog
            .modules
            .iter()
            .filter_map(|m| recent.iter().find(|p| p.module_id == m.id))
            .map(|p| p.completed_lessons)
            .sum();

        let active_days = recent
            .iter()
            .map(|p| calendar_date(p.last_watched, tz))
            .collect::<HashSet<_>>()
            .len();

        Self {
            active_days,
            lessons_watched,
            lessons_available,
            progress_percentage: completion_percent(lessons_watched, lessons_available),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_modules_embedded;
    use chrono::{FixedOffset, TimeZone};

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, h, m, 0).unwrap()
    }

    #[test]
    fn test_update_replaces_existing_record() {
        let mut tracker = ProgressTracker::default();
        tracker.update_progress_at("a", 0, 1, at(8, 0));
        tracker.update_progress_at("a", 2, 3, at(9, 0));
        assert_eq!(tracker.records().len(), 1);
        let p = tracker.module_progress("a").unwrap();
        assert_eq!(p.current_lesson, 2);
        assert_eq!(p.completed_lessons, 3);
        assert_eq!(p.last_watched, at(9, 0));
    }

    #[test]
    fn test_completed_is_max_over_selected_indices() {
        let mut tracker = ProgressTracker::default();
        let mut expected = 0;
        for (minute, idx) in [3usize, 0, 4, 1, 2].into_iter().enumerate() {
            let prev = tracker.completed_lessons("a");
            let next = prev.max(idx + 1);
            assert!(next >= prev);
            tracker.update_progress_at("a", idx, next, at(10, minute as u32));
            expected = expected.max(idx + 1);
            assert_eq!(tracker.completed_lessons("a"), expected);
        }
        assert_eq!(tracker.completed_lessons("a"), 5);
    }

    #[test]
    fn test_recently_watched_sorted_and_capped() {
        let mut tracker = ProgressTracker::default();
        for i in 0..7u32 {
            tracker.update_progress_at(&format!("m{i}"), 0, 1, at(1 + i, 0));
        }
        let recent = tracker.recently_watched();
        assert_eq!(recent.len(), 5);
        assert!(recent.windows(2).all(|w| w[0].last_watched >= w[1].last_watched));
        assert_eq!(recent[0].module_id, "m6");
    }

    #[test]
    fn test_last_watched_video() {
        let mut tracker = ProgressTracker::default();
        assert!(tracker.last_watched_video().is_none());
        tracker.update_progress_at("a", 3, 4, at(9, 0));
        tracker.update_progress_at("b", 1, 2, at(11, 0));
        tracker.update_progress_at("c", 0, 1, at(10, 0));
        assert_eq!(
            tracker.last_watched_video(),
            Some(LastWatched {
                module_id: "b".into(),
                lesson_index: 1
            })
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut tracker = ProgressTracker::default();
        tracker.update_progress_at("a", 0, 1, at(9, 0));
        tracker.update_progress_at("b", 0, 1, at(9, 5));
        assert!(tracker.has_any_progress());
        tracker.reset_all_progress();
        assert!(!tracker.has_any_progress());
        assert!(tracker.module_progress("a").is_none());
        assert!(tracker.module_progress("b").is_none());
    }

    #[test]
    fn test_module_completed_only_at_last_lesson() {
        let catalog = read_modules_embedded();
        let module = &catalog.modules[0];
        let mut tracker = ProgressTracker::default();

        tracker.update_progress_at(&module.id, 2, 3, at(9, 0));
        assert_eq!(tracker.completed_lessons(&module.id), 3);
        assert!(!module.is_completed_by(tracker.completed_lessons(&module.id)));

        tracker.update_progress_at(&module.id, 4, 5, at(9, 1));
        assert!(module.is_completed_by(tracker.completed_lessons(&module.id)));
    }

    #[test]
    fn test_user_stats() {
        let catalog = read_modules_embedded();
        let mut tracker = ProgressTracker::default();
        tracker.update_progress_at("military-sleep-technique", 4, 5, at(9, 0));
        tracker.update_progress_at("deep-sleep-mastery", 1, 2, at(22, 0));
        tracker.update_progress_at(
            "sleep-optimization",
            0,
            1,
            Utc.with_ymd_and_hms(2024, 3, 12, 7, 0, 0).unwrap(),
        );
        tracker.update_progress_at("retired-module", 0, 9, at(10, 0));

        let stats = UserStats::compute_in(&tracker, &catalog, &Utc);
        assert_eq!(stats.lessons_watched, 8);
        assert_eq!(stats.lessons_available, 15);
        assert_eq!(stats.progress_percentage, 53);
        assert_eq!(stats.active_days, 2);
    }

    #[test]
    fn test_active_days_follow_local_calendar() {
        let catalog = read_modules_embedded();
        let sao_paulo = FixedOffset::west_opt(3 * 3600).unwrap();
        let mut tracker = ProgressTracker::default();
        // 20:00 y 22:00 del día 10 en hora local
        tracker.update_progress_at("military-sleep-technique", 1, 2, at(23, 0));
        tracker.update_progress_at(
            "deep-sleep-mastery",
            0,
            1,
            Utc.with_ymd_and_hms(2024, 3, 11, 1, 0, 0).unwrap(),
        );

        assert_eq!(UserStats::compute_in(&tracker, &catalog, &sao_paulo).active_days, 1);
        assert_eq!(UserStats::compute_in(&tracker, &catalog, &Utc).active_days, 2);
        assert_eq!(
            calendar_date(Utc.with_ymd_and_hms(2024, 3, 11, 1, 0, 0).unwrap(), &sao_paulo),
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
        );
    }

    #[test]
    fn test_completion_percent_rounds() {
        assert_eq!(completion_percent(0, 5), 0);
        assert_eq!(completion_percent(1, 3), 33);
        assert_eq!(completion_percent(2, 3), 67);
        assert_eq!(completion_percent(3, 0), 0);
    }
}
