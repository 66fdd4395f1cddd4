// src/ui/helpers.rs
use egui::{Button, Color32, ProgressBar, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: impl Into<String>, width: f32, height: f32) -> bool {
    ui.add(Button::new(label.into()).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Dibuja dos botones del mismo tamaño en una fila.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left: (&str, bool),
    right: (&str, bool),
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        clicked_left = ui
            .add_enabled_ui(left.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(left.0)))
            .inner
            .clicked();
        clicked_right = ui
            .add_enabled_ui(right.1, |ui| ui.add_sized([btn_w, 36.0], Button::new(right.0)))
            .inner
            .clicked();
    });
    (clicked_left, clicked_right)
}

/// Barra de progreso con etiqueta de porcentaje.
pub fn percent_bar(ui: &mut Ui, percent: u32) {
    ui.add(
        ProgressBar::new(percent as f32 / 100.0)
            .text(format!("{percent}%"))
            .fill(Color32::from_rgb(16, 185, 129)),
    );
}

/// Estadística del juego: nombre + barra 0..100.
pub fn stat_bar(ui: &mut Ui, label: &str, value: f32) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).strong());
        let color = if value >= 60.0 {
            Color32::from_rgb(16, 185, 129)
        } else if value >= 30.0 {
            Color32::from_rgb(234, 179, 8)
        } else {
            Color32::from_rgb(239, 68, 68)
        };
        ui.add(
            ProgressBar::new(value / 100.0)
                .text(format!("{value:.0}"))
                .fill(color),
        );
    });
}

pub fn section_title(ui: &mut Ui, text: &str) {
    ui.add_space(12.0);
    ui.label(RichText::new(text).heading().strong());
    ui.add_space(6.0);
}
