use crate::SleepApp;
use crate::model::AppState;
use crate::ui::helpers::{big_list_button, section_title};
use crate::ui::layout::scroll_panel;
use egui::{Context, Frame, RichText};

const BONUS: [(&str, &str, &str); 2] = [
    (
        "🎧 Meditação Guiada para Relaxamento e Sono",
        "Novo",
        "Uma meditação guiada relaxante para ajudar a acalmar sua mente e preparar seu corpo para uma noite de sono profundo e reparador.",
    ),
    (
        "☑ Checklist de Higiene do Sono",
        "Popular",
        "Certifique-se de que todas as condições ideais para um sono perfeito estão sendo atendidas. Um checklist simples para garantir noites de descanso ideais.",
    ),
];

const RESOURCES: [(&str, &str, AppState); 4] = [
    ("🧮 Calculadora de Sono", "Descubra seu horário ideal para dormir", AppState::SleepCalculator),
    ("❓ Central de Ajuda", "Encontre respostas para suas dúvidas", AppState::HelpCenter),
    ("💡 Dicas Rápidas", "Técnicas para implementar hoje", AppState::QuickTips),
    ("🌙 Dream Story", "Histórias relaxantes para dormir", AppState::Game),
];

pub fn ui_more(app: &mut SleepApp, ctx: &Context) {
    scroll_panel(ctx, app.scroll_to_top, 560.0, |ui| {
        let width = ui.available_width();
        ui.label(RichText::new("Mais Conteúdos").size(22.0).strong());
        ui.label("Recursos extras para aprimorar seu sono");

        section_title(ui, "Conteúdo Bônus");
        for (title, badge, description) in BONUS {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width);
                ui.horizontal(|ui| {
                    ui.label(RichText::new(title).strong());
                    ui.label(RichText::new(badge).small());
                });
                ui.label(description);
                ui.label(RichText::new("🔒 Conteúdo premium").small().weak());
            });
            ui.add_space(6.0);
        }

        section_title(ui, "Recursos Úteis");
        for (title, description, target) in RESOURCES {
            if big_list_button(ui, format!("{title}\n{description}"), width, 48.0) {
                app.open_screen(target);
            }
            ui.add_space(6.0);
        }
    });
}
