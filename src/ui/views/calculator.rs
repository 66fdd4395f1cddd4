use crate::SleepApp;
use crate::calculator::{CYCLE_OPTIONS, CalculationType, MINUTE_STEP, cycle_label};
use crate::ui::helpers::section_title;
use crate::ui::layout::scroll_panel;
use egui::{Button, ComboBox, Context, Frame, RichText};

pub fn ui_calculator(app: &mut SleepApp, ctx: &Context) {
    scroll_panel(ctx, app.scroll_to_top, 520.0, |ui| {
        let width = ui.available_width();
        ui.label(RichText::new("🧮 Calculadora de Sono").size(22.0).strong());
        ui.label("Calcule o melhor horário baseado nos ciclos de 90 minutos");

        section_title(ui, "O que você quer calcular?");
        ui.horizontal(|ui| {
            for kind in [CalculationType::WakeUp, CalculationType::Bedtime] {
                let button = Button::new(kind.label())
                    .selected(app.calculator.calculation_type == kind)
                    .min_size([(width - 8.0) / 2.0, 36.0].into());
                if ui.add(button).clicked() {
                    app.calculator.calculation_type = kind;
                    app.calculator_result = None;
                }
            }
        });

        section_title(ui, app.calculator.calculation_type.label());
        ui.horizontal(|ui| {
            ComboBox::from_id_salt("calc_hour")
                .selected_text(format!("{:02}", app.calculator.hour))
                .show_ui(ui, |ui| {
                    for h in 0..24 {
                        ui.selectable_value(&mut app.calculator.hour, h, format!("{h:02}"));
                    }
                });
            ui.label(":");
            ComboBox::from_id_salt("calc_minute")
                .selected_text(format!("{:02}", app.calculator.minute))
                .show_ui(ui, |ui| {
                    for m in (0..60).step_by(MINUTE_STEP as usize) {
                        ui.selectable_value(&mut app.calculator.minute, m, format!("{m:02}"));
                    }
                });
        });

        section_title(ui, "Ciclos de sono");
        for cycles in CYCLE_OPTIONS {
            let button = Button::new(cycle_label(cycles))
                .selected(app.calculator.cycles == cycles)
                .min_size([width, 34.0].into());
            if ui.add(button).clicked() {
                app.calculator.cycles = cycles;
            }
            ui.add_space(4.0);
        }

        ui.add_space(10.0);
        if ui
            .add(Button::new("Calcular").min_size([width, 40.0].into()))
            .clicked()
        {
            app.calculate_sleep();
        }

        if let Some(plan) = &app.calculator_result {
            ui.add_space(12.0);
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_width(width);
                ui.label(RichText::new("Seu plano de sono").strong());
                ui.label(format!("🛌 Comece a se preparar: {}", plan.preparation_time));
                ui.label(format!("🌙 Hora de dormir: {}", plan.bedtime));
                ui.label(format!("☀ Hora de acordar: {}", plan.wakeup));
                ui.label(format!("⏱ Tempo total de sono: {}", plan.total_sleep));
            });
        }

        section_title(ui, "Dicas");
        ui.label("• Reserve 15 minutos para adormecer");
        ui.label("• Acordar no fim de um ciclo evita a sensação de cansaço");
        ui.label("• Mantenha horários regulares, inclusive nos fins de semana");
    });
}
