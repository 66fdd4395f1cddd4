use super::*;
use crate::navigation::{CompletionBanner, NavEvent, completion_banner, step};
use crate::progress::UserStats;

impl SleepApp {
    fn save_progress(&mut self) {
        let records = self.tracker.records().to_vec();
        self.persist::<ProgressRepo>(&records);
    }

    /// Abre un módulo sin tocar el progreso; solo elegir un aula lo marca.
    pub fn open_module(&mut self, module_idx: usize, lesson: usize) {
        let Some(module) = self.catalog.modules.get(module_idx) else {
            log::warn!("Módulo inexistente: {module_idx}");
            return;
        };
        let lesson = lesson.min(module.last_lesson_index());
        log::debug!("Abriendo módulo {} en el aula {}", module.id, lesson + 1);
        self.session = Some(ModuleSession::open(module_idx, lesson));
        self.state = AppState::Module;
        self.scroll_to_top = true;
    }

    pub fn open_module_by_id(&mut self, module_id: &str, lesson: usize) {
        if let Some(idx) = self.catalog.module_index(module_id) {
            self.open_module(idx, lesson);
        }
    }

    /// "Continuar de onde parou": la última aula vista, o el módulo 1.
    pub fn resume_last_watched(&mut self) {
        match self.tracker.last_watched_video() {
            Some(last) => self.open_module_by_id(&last.module_id, last.lesson_index),
            None => self.open_module(0, 0),
        }
    }

    pub fn navigate(&mut self, event: NavEvent) {
        let Some(session) = self.session else {
            return;
        };
        let Some(module_id) = self.catalog.modules.get(session.module).map(|m| m.id.clone())
        else {
            return;
        };
        let completed = self.tracker.completed_lessons(&module_id);
        let transition = step(&self.catalog, session, completed, event);

        if let Some(write) = transition.write {
            self.tracker
                .update_progress(&module_id, write.lesson_index, write.completed_lessons);
            self.save_progress();
        }
        if transition.switched_module {
            self.scroll_to_top = true;
        }
        self.session = Some(transition.session);
    }

    pub fn current_completion_banner(&self) -> CompletionBanner {
        let Some(session) = self.session else {
            return CompletionBanner::None;
        };
        let completed = self
            .catalog
            .modules
            .get(session.module)
            .map(|m| self.tracker.completed_lessons(&m.id))
            .unwrap_or(0);
        completion_banner(&self.catalog, session.module, completed)
    }

    pub fn user_stats(&self) -> UserStats {
        UserStats::compute(&self.tracker, &self.catalog)
    }

    /// Borra todo el progreso y muestra la pantalla de empezar de nuevo.
    pub fn reset_all_progress(&mut self) {
        self.tracker.reset_all_progress();
        ProgressRepo::clear(&mut self.store);
        self.session = None;
        self.confirm_reset = false;
        self.show_start_screen = true;
        log::info!("Progreso borrado");
    }

    /// Desde la pantalla de inicio tras el reset: primer módulo, primera aula.
    pub fn start_from_beginning(&mut self) {
        self.show_start_screen = false;
        self.open_module(0, 0);
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Resetar Todo o Progresso?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(
                    "Esta ação irá apagar permanentemente todo o seu progresso em todos os módulos. \
                     Você terá que começar do zero. Esta ação não pode ser desfeita.",
                );
                ui.horizontal(|ui| {
                    if ui.button("Cancelar").clicked() {
                        self.confirm_reset = false;
                    }
                    if ui.button("Resetar Tudo").clicked() {
                        self.reset_all_progress();
                    }
                });
            });
    }
}
