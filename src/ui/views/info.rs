use crate::SleepApp;
use crate::ui::layout::scroll_panel;
use egui::{Button, Context, Frame, RichText};

/// Preguntas frecuentes; solo una respuesta abierta a la vez.
pub fn ui_help_center(app: &mut SleepApp, ctx: &Context) {
    scroll_panel(ctx, app.scroll_to_top, 560.0, |ui| {
        let width = ui.available_width();
        ui.label(RichText::new("❓ Central de Ajuda").size(22.0).strong());
        ui.label("Perguntas frequentes sobre o Sleep Protocol");
        ui.add_space(10.0);

        for (i, entry) in app.faq.iter().enumerate() {
            let open = app.open_faq == Some(i);
            let marker = if open { "▼" } else { "▶" };
            let button = Button::new(format!("{marker} {}", entry.question))
                .selected(open)
                .min_size([width, 36.0].into());
            if ui.add(button).clicked() {
                app.open_faq = if open { None } else { Some(i) };
            }
            if open {
                Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(width);
                    ui.label(&entry.answer);
                });
            }
            ui.add_space(4.0);
        }

        ui.add_space(12.0);
        ui.label(RichText::new("Ainda tem dúvidas? Fale com o nosso suporte.").weak());
    });
}

pub fn ui_quick_tips(app: &mut SleepApp, ctx: &Context) {
    scroll_panel(ctx, app.scroll_to_top, 560.0, |ui| {
        let width = ui.available_width();
        ui.label(RichText::new("💡 Dicas Rápidas").size(22.0).strong());
        ui.label("Técnicas para implementar hoje");
        ui.add_space(10.0);

        for (i, tip) in app.tips.iter().enumerate() {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width);
                ui.label(RichText::new(format!("{}. {}", i + 1, tip.title)).strong());
                ui.label(&tip.description);
            });
            ui.add_space(6.0);
        }
    });
}
