use crate::SleepApp;
use crate::ui::helpers::{percent_bar, section_title};
use crate::ui::layout::{centered_panel, scroll_panel};
use egui::{Align, Button, Color32, Context, Frame, RichText};

pub fn ui_continue(app: &mut SleepApp, ctx: &Context) {
    if app.show_start_screen {
        ui_start_screen(app, ctx);
        return;
    }

    let rows = app.continue_rows();
    if rows.is_empty() {
        centered_panel(ctx, 200.0, 380.0, |ui| {
            ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
                ui.heading("Nenhum progresso ainda");
                ui.label("Comece assistindo algum módulo para aparecer aqui");
                ui.add_space(16.0);
                if ui.button("Começar Agora").clicked() {
                    app.open_module(0, 0);
                }
            });
        });
        return;
    }

    scroll_panel(ctx, app.scroll_to_top, 560.0, |ui| {
        let width = ui.available_width();
        ui.label(RichText::new("Continuar Assistindo").size(22.0).strong());
        ui.label("Retome de onde parou");
        ui.add_space(10.0);

        for row in &rows {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width);
                ui.label(RichText::new(&row.title).strong());
                ui.label(
                    RichText::new(format!("Última visualização: {}", row.last_watched)).small(),
                );
                let status = row.status_label();
                if !status.is_empty() {
                    ui.label(status);
                }
                percent_bar(ui, row.percent);
                ui.horizontal(|ui| {
                    ui.label(format!("{}/{} aulas", row.completed_lessons, row.total_lessons));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("▶ Continuar").clicked() {
                            app.open_module(row.module_idx, row.current_lesson);
                        }
                    });
                });
                if let Some((next_idx, number)) = row.next_module {
                    if ui.button(format!("Seguir para o módulo {number} ➡")).clicked() {
                        app.open_module(next_idx, 0);
                    }
                }
            });
            ui.add_space(8.0);
        }

        section_title(ui, "Ações Rápidas");
        let reset = Button::new(
            RichText::new("⟲ Resetar progresso\nApagar todo o histórico de visualização")
                .color(Color32::from_rgb(239, 68, 68)),
        )
        .min_size([width, 44.0].into());
        if ui.add(reset).clicked() {
            app.confirm_reset = true;
        }
    });
}

fn ui_start_screen(app: &mut SleepApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 400.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("Progresso Resetado!");
            ui.add_space(8.0);
            ui.label(
                "Seu progresso foi completamente resetado. Agora você pode começar sua jornada \
                 do Sleep Protocol desde o início e descobrir novamente as técnicas militares \
                 para dormir melhor.",
            );
            ui.add_space(16.0);
            let width = ui.available_width();
            if ui
                .add(Button::new("Começar Agora").min_size([width, 40.0].into()))
                .clicked()
            {
                app.start_from_beginning();
            }
            ui.label(
                RichText::new("Você será direcionado para a primeira aula do primeiro módulo")
                    .small(),
            );
        });
    });
}
