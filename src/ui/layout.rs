use crate::SleepApp;
use crate::model::{AppState, Tab};
use egui::{Button, CentralPanel, Color32, Context, Frame, RichText, ScrollArea, Ui};

/// Cabecera: volver (en pantallas secundarias), título y cambio de tema.
pub fn top_panel(app: &mut SleepApp, ctx: &Context) {
    egui::TopBottomPanel::top("header_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            let has_back = matches!(
                app.state,
                AppState::Module
                    | AppState::SleepCalculator
                    | AppState::HelpCenter
                    | AppState::QuickTips
                    | AppState::Game
            );
            if has_back && ui.button("⬅").clicked() {
                app.back();
            }
            ui.heading(RichText::new("🌙 Sleep Protocol").strong());

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if app.theme.is_dark() {
                    "☀ Modo claro"
                } else {
                    "🌙 Modo escuro"
                };
                if ui.button(label).clicked() {
                    app.toggle_theme();
                }
            });
        });
        ui.add_space(4.0);
    });
}

/// Barra de pestañas inferior.
pub fn bottom_panel(app: &mut SleepApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("tab_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        let active = app.state.tab();
        let w = (ui.available_width() - 3.0 * ui.spacing().item_spacing.x) / 4.0;
        ui.horizontal(|ui| {
            for tab in Tab::ALL {
                let button = Button::new(tab.label()).selected(active == Some(tab));
                if ui.add_sized([w, 36.0], button).clicked() {
                    app.go_tab(tab);
                }
            }
        });
        ui.add_space(4.0);
    });
}

/// Aviso de recordatorio bajo la cabecera.
pub fn reminder_banner(app: &mut SleepApp, ctx: &Context) {
    let Some(reminder) = app.notifier.banner().cloned() else {
        return;
    };
    egui::TopBottomPanel::top("reminder_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(reminder.title).strong().color(Color32::from_rgb(52, 211, 153)));
                ui.label(reminder.message);
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("✖").clicked() {
                    app.notifier.dismiss();
                }
            });
        });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Panel con scroll vertical; vuelve arriba si la app lo pide.
pub fn scroll_panel(
    ctx: &Context,
    scroll_to_top: bool,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let mut area = ScrollArea::vertical().auto_shrink([false; 2]);
        if scroll_to_top {
            area = area.vertical_scroll_offset(0.0);
        }
        area.show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let w = ui.available_width().min(max_width);
                Frame::default()
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.set_width(w);
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
                    });
            });
        });
    });
}
