use crate::SleepApp;
use crate::game::actions::room_interactions;
use crate::game::clock::{day_of_week, format_game_time};
use crate::game::{GamePhase, GameSpeed, Room};
use crate::ui::helpers::{section_title, stat_bar};
use crate::ui::layout::{centered_panel, scroll_panel};
use egui::{Align, Button, Color32, Context, Frame, RichText};

pub fn ui_game(app: &mut SleepApp, ctx: &Context) {
    match app.game.phase() {
        GamePhase::Welcome => ui_welcome(app, ctx),
        GamePhase::Playing => ui_playing(app, ctx),
    }
}

fn ui_welcome(app: &mut SleepApp, ctx: &Context) {
    let has_saved = app.has_saved_game();
    centered_panel(ctx, 420.0, 420.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(RichText::new("🌙 Dream Story").strong());
            ui.add_space(8.0);
            ui.label(
                "Bem-vindo ao Dream Story! Ajude Alex a criar uma rotina de sono saudável \
                 através de ações diárias. O tempo passa rapidamente: cada segundo real \
                 equivale a 15 minutos no jogo!",
            );
            ui.add_space(10.0);
            Frame::group(ui.style()).show(ui, |ui| {
                ui.label(RichText::new("⏰ Sistema de Tempo:").strong());
                ui.label("• 1 segundo real = 15 minutos no jogo");
                ui.label("• 1 minuto real = 15 horas no jogo");
                ui.label("• 1 hora real = 37.5 dias no jogo");
            });
            ui.add_space(8.0);
            ui.label("🎯 Objetivo: Mantenha energia, felicidade e saúde altas");
            ui.label("🏠 Navegação: Toque nos botões dos cômodos para se mover");
            ui.label("🎮 Ações: Toque nos objetos para interagir");
            ui.add_space(14.0);

            let width = ui.available_width();
            if ui
                .add(Button::new("Começar Jornada").min_size([width, 40.0].into()))
                .clicked()
            {
                app.start_game();
            }
            if has_saved
                && ui
                    .add(Button::new("📂 Carregar jogo salvo").min_size([width, 36.0].into()))
                    .clicked()
            {
                app.load_saved_game();
            }
        });
    });
}

fn ui_playing(app: &mut SleepApp, ctx: &Context) {
    let state = app.game.state().clone();
    let muted = app.audio.is_muted;

    scroll_panel(ctx, app.scroll_to_top, 560.0, |ui| {
        let width = ui.available_width();

        // Cabecera: reloj y controles
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(format!(
                    "Dia {} · {} · {}",
                    state.day,
                    day_of_week(state.day),
                    format_game_time(state.hour, state.minute)
                ))
                .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                if ui.button(if muted { "🔇" } else { "🔊" }).clicked() {
                    app.toggle_mute();
                }
                if ui.button(if state.is_playing { "⏸" } else { "▶" }).clicked() {
                    app.toggle_play_pause();
                }
            });
        });
        ui.horizontal(|ui| {
            for speed in GameSpeed::ALL {
                let button = Button::new(speed.label()).selected(state.game_speed == speed);
                if ui.add(button).clicked() {
                    app.change_game_speed(speed);
                }
            }
            ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                if ui.button("⟲ Reiniciar").clicked() {
                    app.reset_game();
                }
                if ui.button("💾 Salvar").clicked() {
                    app.save_game();
                }
            });
        });
        if state.game_speed != GameSpeed::Normal {
            ui.label(
                RichText::new(format!("⚡ Velocidade {} ativa", state.game_speed.label()))
                    .small()
                    .color(Color32::from_rgb(234, 179, 8)),
            );
        }

        if let Some(message) = &app.game_message {
            ui.add_space(6.0);
            ui.label(RichText::new(message).color(Color32::from_rgb(52, 211, 153)));
        }

        section_title(ui, &state.character.name);
        ui.label(format!(
            "{} · {}",
            state.character.mood.label(),
            state.character.activity.label()
        ));
        stat_bar(ui, "⚡ Energia", state.energy);
        stat_bar(ui, "😊 Felicidade", state.happiness);
        stat_bar(ui, "❤ Saúde", state.health);
        stat_bar(ui, "🌙 Sono", state.sleep_quality);

        section_title(ui, "Cômodos");
        ui.horizontal_wrapped(|ui| {
            for room in Room::ALL {
                let button = Button::new(room.label()).selected(state.current_room == room);
                if ui.add(button).clicked() {
                    app.change_room(room);
                }
            }
        });

        section_title(ui, state.current_room.label());
        for &(action, object, label) in room_interactions(state.current_room) {
            if ui
                .add(Button::new(label).min_size([width, 36.0].into()))
                .clicked()
            {
                app.game_action(action, object);
            }
            ui.add_space(4.0);
        }

        section_title(ui, "Conquistas");
        ui.label(format!("⭐ Pontuação: {}", state.total_score));
        if state.achievements.is_empty() {
            ui.label(RichText::new("Nenhuma conquista ainda").weak());
        } else {
            for achievement in &state.achievements {
                ui.label(format!("🏆 {achievement}"));
            }
        }
    });
}
