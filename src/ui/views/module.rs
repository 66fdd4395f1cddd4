use crate::SleepApp;
use crate::navigation::{CompletionBanner, Focus, NavEvent};
use crate::progress::completion_percent;
use crate::ui::helpers::{percent_bar, section_title, two_button_row};
use crate::ui::layout::scroll_panel;
use egui::{Button, Color32, Context, Frame, RichText};

pub fn ui_module(app: &mut SleepApp, ctx: &Context) {
    let Some(session) = app.session else {
        return;
    };
    let Some(module) = app.catalog.modules.get(session.module).cloned() else {
        return;
    };
    let completed = app.tracker.completed_lessons(&module.id);
    let rows = app.lesson_rows();
    let banner = app.current_completion_banner();
    let is_first = session.module == 0 && session.lesson == 0;

    scroll_panel(ctx, app.scroll_to_top, 640.0, |ui| {
        let width = ui.available_width();

        ui.label(
            RichText::new(format!("Módulo {}: {}", session.module + 1, module.title))
                .size(20.0)
                .strong(),
        );
        ui.label(&module.description);
        ui.add_space(6.0);
        percent_bar(ui, completion_percent(completed, module.lessons.len()));
        ui.label(format!("{completed}/{} aulas concluídas", module.lessons.len()));

        // Reproductor: la aula actual se abre en el reproductor externo
        if let Some(lesson) = module.lessons.get(session.lesson) {
            ui.add_space(10.0);
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width);
                ui.label(
                    RichText::new(format!("Aula {}: {}", session.lesson + 1, lesson.title))
                        .strong(),
                );
                ui.label(format!("⏱ {}", lesson.duration));
                ui.hyperlink_to("▶ Assistir vídeo", lesson.watch_url());
            });
        }

        ui.add_space(8.0);
        let (prev, next) = two_button_row(
            ui,
            width,
            ("⬅ Aula anterior", !is_first),
            ("Próxima aula ➡", true),
        );
        if prev {
            app.navigate(NavEvent::PreviousLesson);
        }
        if next {
            app.navigate(NavEvent::NextLesson);
        }

        match session.focus {
            Focus::Player => {}
            Focus::NextModuleOffer => {
                ui.add_space(6.0);
                ui.label(
                    RichText::new("Você chegou à última aula deste módulo.")
                        .color(Color32::from_rgb(52, 211, 153)),
                );
            }
            Focus::Congratulations => {
                ui.add_space(6.0);
                ui.label(
                    RichText::new("Esta é a última aula do Sleep Protocol.")
                        .color(Color32::from_rgb(52, 211, 153)),
                );
            }
        }

        section_title(ui, "Aulas");
        for row in &rows {
            let button = Button::new(row.label())
                .selected(row.current)
                .min_size([width, 34.0].into());
            if ui.add(button).clicked() {
                app.navigate(NavEvent::SelectLesson(row.index));
            }
            ui.add_space(4.0);
        }

        match banner {
            CompletionBanner::None => {}
            CompletionBanner::NextModule { number } => {
                ui.add_space(12.0);
                ui.label(RichText::new("🎉 Módulo concluído!").strong());
                let label = format!("Seguir para o módulo {number} ➡");
                if ui
                    .add(Button::new(label).min_size([width, 40.0].into()))
                    .clicked()
                {
                    app.navigate(NavEvent::NextModule);
                }
            }
            CompletionBanner::AllModulesComplete => {
                ui.add_space(12.0);
                Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(width);
                    ui.label(RichText::new("🏆 Parabéns!").size(20.0).strong());
                    ui.label(
                        "Você concluiu todos os módulos do Sleep Protocol. \
                         Agora é colocar as técnicas em prática todas as noites.",
                    );
                });
            }
        }
    });
}
