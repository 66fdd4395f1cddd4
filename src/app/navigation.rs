use super::*;
use crate::model::Tab;

impl SleepApp {
    /// Cambiar de pestaña cierra cualquier módulo abierto.
    pub fn go_tab(&mut self, tab: Tab) {
        if self.state == AppState::Game {
            self.close_game();
        }
        self.session = None;
        self.show_start_screen = false;
        self.confirm_reset = false;
        self.state = match tab {
            Tab::Home => AppState::Home,
            Tab::Continue => AppState::Continue,
            Tab::More => AppState::More,
            Tab::Settings => AppState::Settings,
        };
        self.scroll_to_top = true;
    }

    /// Pantallas secundarias que cuelgan de "Mais conteúdos".
    pub fn open_screen(&mut self, state: AppState) {
        if state == AppState::Module || state == AppState::Login {
            return;
        }
        if state == AppState::SleepCalculator {
            self.calculator_result = None;
        }
        self.session = None;
        self.state = state;
        self.scroll_to_top = true;
    }

    /// Flecha "volver" de la cabecera.
    pub fn back(&mut self) {
        match self.state {
            AppState::Module => self.go_tab(Tab::Home),
            AppState::SleepCalculator
            | AppState::HelpCenter
            | AppState::QuickTips
            | AppState::Game => self.go_tab(Tab::More),
            _ => {}
        }
    }
}
