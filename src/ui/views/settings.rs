use crate::SleepApp;
use crate::auth::LogoutFlow;
use crate::ui::helpers::{percent_bar, section_title};
use crate::ui::layout::scroll_panel;
use egui::{Button, Color32, Context, Frame, RichText};

pub fn ui_settings(app: &mut SleepApp, ctx: &Context) {
    let stats = app.user_stats();
    let email = app.user_email().unwrap_or_default().to_string();
    let member_since = app.member_since();

    scroll_panel(ctx, app.scroll_to_top, 560.0, |ui| {
        let width = ui.available_width();
        ui.label(RichText::new("Configurações").size(22.0).strong());

        // Perfil
        Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(width);
            ui.label(RichText::new("Cliente Sleep Protocol").strong());
            ui.label(email);
            if let Some(date) = member_since {
                ui.label(RichText::new(format!("Membro desde {date}")).small());
            }
        });

        section_title(ui, "Progresso");
        ui.columns(3, |cols| {
            cols[0].vertical_centered(|ui| {
                ui.label(RichText::new(stats.active_days.to_string()).size(20.0).strong());
                ui.label("Dias ativos");
            });
            cols[1].vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!("{}/{}", stats.lessons_watched, stats.lessons_available))
                        .size(20.0)
                        .strong(),
                );
                ui.label("Aulas assistidas");
            });
            cols[2].vertical_centered(|ui| {
                ui.label(
                    RichText::new(format!("{}%", stats.progress_percentage))
                        .size(20.0)
                        .strong(),
                );
                ui.label("Progresso");
            });
        });
        percent_bar(ui, stats.progress_percentage);

        section_title(ui, "Aparência");
        let mut dark = app.theme.is_dark();
        if ui.checkbox(&mut dark, "🌙 Modo escuro").changed() {
            app.toggle_theme();
        }

        section_title(ui, "Notificações");
        let mut enabled = app.notifier.settings().enabled;
        if ui.checkbox(&mut enabled, "🔔 Lembretes").changed() {
            app.toggle_notifications();
        }
        if app.notifier.settings().enabled {
            ui.label(RichText::new("Notificações Ativadas").color(Color32::from_rgb(52, 211, 153)));
            ui.label("✅ Lembretes de progresso incompleto");
            ui.label("✅ Alertas de inatividade (após 24h)");
            ui.label("✅ Mensagens motivacionais personalizadas");
            if ui.button("🧪 Enviar notificação de teste").clicked() {
                app.send_test_notification();
            }
        }

        ui.add_space(20.0);
        let logout = Button::new(RichText::new("Sair da Conta").color(Color32::WHITE))
            .fill(Color32::from_rgb(220, 38, 38))
            .min_size([width, 40.0].into());
        if ui.add(logout).clicked() {
            app.request_logout();
        }
        ui.label(RichText::new("Seu progresso será salvo automaticamente").small());

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Sleep Protocol App").weak());
            ui.label(RichText::new(format!("Versão {}", env!("CARGO_PKG_VERSION"))).weak());
        });
    });
}

/// Confirmación y pasos de salida: confirmar, guardando, listo.
pub fn logout_window(app: &mut SleepApp, ctx: &Context, now: f64) {
    egui::Window::new("Sair da Conta")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| match app.logout_flow {
            LogoutFlow::Idle => {}
            LogoutFlow::Confirm => {
                ui.label("Tem certeza que deseja sair? Seu progresso ficará salvo neste dispositivo.");
                ui.horizontal(|ui| {
                    if ui.button("Cancelar").clicked() {
                        app.cancel_logout();
                    }
                    if ui.button("Sair").clicked() {
                        app.confirm_logout(now);
                    }
                });
            }
            LogoutFlow::Saving { .. } => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Saindo da conta...");
                });
                ui.label(RichText::new("Dados sendo preservados...").small());
            }
            LogoutFlow::Success { .. } => {
                ui.label(RichText::new("✅ Progresso salvo!").strong());
            }
        });
}
