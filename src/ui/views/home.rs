use crate::SleepApp;
use crate::ui::helpers::{percent_bar, section_title};
use crate::ui::layout::scroll_panel;
use egui::{Button, Context, Frame, RichText};

pub fn ui_home(app: &mut SleepApp, ctx: &Context) {
    let cards = app.module_cards();
    let has_progress = app.tracker.has_any_progress();

    scroll_panel(ctx, app.scroll_to_top, 560.0, |ui| {
        ui.label(RichText::new("Bem-vindo ao Sleep Protocol").size(22.0).strong());
        ui.label("Durma em até 2 minutos com as técnicas usadas por militares.");
        ui.add_space(12.0);

        let width = ui.available_width();
        let resume_label = if has_progress {
            "▶ Continuar de onde parou"
        } else {
            "▶ Começar agora"
        };
        if ui
            .add(Button::new(resume_label).min_size([width, 40.0].into()))
            .clicked()
        {
            app.resume_last_watched();
            return;
        }

        section_title(ui, "Módulos");
        for card in &cards {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width);
                ui.label(RichText::new(card.label()).strong());
                ui.label(&card.description);
                ui.add_space(4.0);
                percent_bar(ui, card.percent);
                ui.horizontal(|ui| {
                    ui.label(card.progress_label());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Assistir").clicked() {
                            app.open_module(card.idx, 0);
                        }
                    });
                });
            });
            ui.add_space(8.0);
        }
    });
}
