mod helpers;
pub mod layout;
pub mod views;

use crate::app::SleepApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::{Context, Visuals};
use layout::{bottom_panel, reminder_banner, top_panel};

impl App for SleepApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.tick(now);

        ctx.set_visuals(if self.theme.is_dark() {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        if self.state == AppState::Login {
            views::login::ui_login(self, ctx);
        } else {
            top_panel(self, ctx);
            bottom_panel(self, ctx);
            reminder_banner(self, ctx);

            // Dispatch por estado a las funciones en views/
            match self.state {
                AppState::Login => {}
                AppState::Home => views::home::ui_home(self, ctx),
                AppState::Continue => views::continue_watching::ui_continue(self, ctx),
                AppState::More => views::more::ui_more(self, ctx),
                AppState::Settings => views::settings::ui_settings(self, ctx),
                AppState::Module => views::module::ui_module(self, ctx),
                AppState::SleepCalculator => views::calculator::ui_calculator(self, ctx),
                AppState::HelpCenter => views::info::ui_help_center(self, ctx),
                AppState::QuickTips => views::info::ui_quick_tips(self, ctx),
                AppState::Game => views::game::ui_game(self, ctx),
            }
            self.scroll_to_top = false;

            if self.confirm_reset {
                self.confirm_reset(ctx);
            }
            if self.logout_flow.is_open() {
                views::settings::logout_window(self, ctx, now);
            }
        }

        // Las escrituras llegan al almacenamiento en el mismo frame
        if self.store.is_dirty() {
            if let Some(storage) = frame.storage_mut() {
                self.store.sync_into(storage);
            }
        }

        if let Some(wait) = self.next_repaint(now) {
            ctx.request_repaint_after(wait);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.store.sync_into(storage);
    }
}
