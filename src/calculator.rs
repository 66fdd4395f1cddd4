//! Calculadora de ciclos de sueño de 90 minutos.

use chrono::{Duration, NaiveTime, Timelike};

pub const CYCLE_MINUTES: i64 = 90;
pub const PREPARATION_MINUTES: i64 = 15;
pub const CYCLE_OPTIONS: [u32; 3] = [4, 5, 6];
pub const MINUTE_STEP: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculationType {
    /// El usuario da la hora de despertar; se calcula la de dormir.
    #[default]
    WakeUp,
    /// El usuario da la hora de dormir; se calcula la de despertar.
    Bedtime,
}

impl CalculationType {
    pub fn label(self) -> &'static str {
        match self {
            CalculationType::WakeUp => "☀ Quero acordar às",
            CalculationType::Bedtime => "🌙 Vou dormir às",
        }
    }
}

pub fn cycle_label(cycles: u32) -> &'static str {
    match cycles {
        4 => "4 ciclos · 6h · Mínimo recomendado",
        5 => "5 ciclos · 7h30 · Ideal para adultos",
        6 => "6 ciclos · 9h · Sono prolongado",
        _ => "",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SleepPlan {
    pub bedtime: String,
    pub wakeup: String,
    pub preparation_time: String,
    pub total_sleep: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SleepCalculator {
    pub calculation_type: CalculationType,
    pub hour: u32,
    pub minute: u32,
    pub cycles: u32,
}

impl Default for SleepCalculator {
    fn default() -> Self {
        Self {
            calculation_type: CalculationType::WakeUp,
            hour: 7,
            minute: 0,
            cycles: 5,
        }
    }
}

pub fn format_hhmm(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// "7h 30min", o "6h" si no sobran minutos.
pub fn format_total_sleep(minutes: i64) -> String {
    let (h, m) = (minutes / 60, minutes % 60);
    if m > 0 {
        format!("{h}h {m}min")
    } else {
        format!("{h}h")
    }
}

impl SleepCalculator {
    /// `None` si la hora elegida no existe (hora > 23 o minuto > 59).
    pub fn calculate(&self) -> Option<SleepPlan> {
        let input = NaiveTime::from_hms_opt(self.hour, self.minute, 0)?;
        let sleep_minutes = i64::from(self.cycles) * CYCLE_MINUTES;
        let sleep = Duration::minutes(sleep_minutes);
        let preparation = Duration::minutes(PREPARATION_MINUTES);

        // NaiveTime ± Duration da la vuelta al día
        let (bedtime, wakeup) = match self.calculation_type {
            CalculationType::WakeUp => (input - sleep, input),
            CalculationType::Bedtime => (input, input + sleep),
        };

        Some(SleepPlan {
            bedtime: format_hhmm(bedtime),
            wakeup: format_hhmm(wakeup),
            preparation_time: format_hhmm(bedtime - preparation),
            total_sleep: format_total_sleep(sleep_minutes),
        })
    }
}
