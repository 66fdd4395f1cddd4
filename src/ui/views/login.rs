use crate::SleepApp;
use crate::auth::LoginFlow;
use crate::ui::layout::centered_panel;
use egui::{Align, Button, Color32, Context, Key, RichText, TextEdit};

pub fn ui_login(app: &mut SleepApp, ctx: &Context) {
    let now = ctx.input(|i| i.time);
    centered_panel(ctx, 360.0, 360.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading(RichText::new("🌙 Sleep Protocol").size(28.0).strong());
            ui.label("Técnicas militares para dormir melhor");
            ui.add_space(24.0);

            let width = ui.available_width();
            let busy = app.login_flow.is_busy();

            let email = ui.add_enabled(
                !busy,
                TextEdit::singleline(&mut app.login_form.email)
                    .hint_text("Seu e-mail")
                    .desired_width(width),
            );
            ui.add_space(8.0);
            let password = ui.add_enabled(
                !busy,
                TextEdit::singleline(&mut app.login_form.password)
                    .hint_text("Sua senha")
                    .password(!app.login_form.show_password)
                    .desired_width(width),
            );
            if email.changed() || password.changed() {
                app.login_flow.edit();
            }
            ui.checkbox(&mut app.login_form.show_password, "Mostrar senha");
            ui.add_space(16.0);

            let label = if busy { "⏳ Entrando..." } else { "Entrar" };
            let clicked = ui
                .add_enabled(!busy, Button::new(label).min_size([width, 40.0].into()))
                .clicked();
            let submitted = password.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            if clicked || submitted {
                app.submit_login(now);
            }

            if app.login_flow == LoginFlow::Failed {
                ui.add_space(10.0);
                ui.label(
                    RichText::new("Credenciais incorretas. Tente novamente.")
                        .color(Color32::from_rgb(239, 68, 68)),
                );
            }
        });
    });
}
