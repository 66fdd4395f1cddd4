use super::GameState;

pub const MINUTES_PER_TICK: u32 = 15;

const DAYS_OF_WEEK: [&str; 7] = [
    "Domingo", "Segunda", "Terça", "Quarta", "Quinta", "Sexta", "Sábado",
];

/// Cambio de energía por tick según la franja de la hora resultante.
pub fn energy_delta(hour: u32) -> f32 {
    match hour {
        6..=12 => 0.1,
        13..=18 => -0.05,
        19..=23 => -0.2,
        _ => -0.3,
    }
}

/// Un tick pasivo: avanza el reloj y aplica la energía de la franja.
/// Felicidad y salud solo cambian con acciones.
pub fn advance_tick(state: &mut GameState, minutes: u32) {
    let mut minute = state.minute + minutes;
    let mut hour = state.hour;
    let mut day = state.day;

    if minute >= 60 {
        hour += minute / 60;
        minute %= 60;
    }
    if hour >= 24 {
        day += hour / 24;
        hour %= 24;
    }

    state.day = day;
    state.hour = hour;
    state.minute = minute;
    state.energy += energy_delta(hour);
    state.clamp_stats();
}

/// "07:00 AM", "12:15 PM", "12:00 AM" para medianoche.
pub fn format_game_time(hour: u32, minute: u32) -> String {
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };
    format!("{display_hour:02}:{minute:02} {period}")
}

pub fn day_of_week(day: u32) -> &'static str {
    DAYS_OF_WEEK[(day.saturating_sub(1) % 7) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks(n: u32) -> GameState {
        let mut state = GameState::default();
        for _ in 0..n {
            advance_tick(&mut state, MINUTES_PER_TICK);
        }
        state
    }

    #[test]
    fn test_four_ticks_is_one_hour() {
        let state = ticks(4);
        assert_eq!((state.day, state.hour, state.minute), (1, 8, 0));
    }

    #[test]
    fn test_clock_arithmetic_for_many_tick_counts() {
        for n in 0..500u32 {
            let state = ticks(n);
            let total = 7 * 60 + 15 * n;
            assert_eq!(state.minute, (15 * n) % 60);
            assert_eq!(state.hour, (total / 60) % 24);
            assert_eq!(state.day, 1 + total / (24 * 60));
        }
    }

    #[test]
    fn test_day_rollover_at_midnight() {
        let mut state = GameState {
            hour: 23,
            minute: 45,
            ..GameState::default()
        };
        advance_tick(&mut state, MINUTES_PER_TICK);
        assert_eq!((state.day, state.hour, state.minute), (2, 0, 0));
    }

    #[test]
    fn test_energy_bands_use_resulting_hour() {
        assert_eq!(energy_delta(6), 0.1);
        assert_eq!(energy_delta(12), 0.1);
        assert_eq!(energy_delta(13), -0.05);
        assert_eq!(energy_delta(18), -0.05);
        assert_eq!(energy_delta(19), -0.2);
        assert_eq!(energy_delta(23), -0.2);
        assert_eq!(energy_delta(0), -0.3);
        assert_eq!(energy_delta(5), -0.3);

        // 05:45 -> 06:00 ya cuenta como mañana
        let mut state = GameState {
            hour: 5,
            minute: 45,
            energy: 50.0,
            ..GameState::default()
        };
        advance_tick(&mut state, MINUTES_PER_TICK);
        assert!((state.energy - 50.1).abs() < 1e-4);
    }

    #[test]
    fn test_passive_tick_only_moves_energy() {
        let before = GameState::default();
        let after = ticks(1);
        assert_eq!(after.happiness, before.happiness);
        assert_eq!(after.health, before.health);
        assert!(after.energy > before.energy);
    }

    #[test]
    fn test_energy_never_below_zero() {
        let mut state = GameState {
            hour: 1,
            energy: 0.1,
            ..GameState::default()
        };
        for _ in 0..10 {
            advance_tick(&mut state, MINUTES_PER_TICK);
            assert!(state.energy >= 0.0);
        }
        assert_eq!(state.energy, 0.0);
    }

    #[test]
    fn test_format_game_time() {
        assert_eq!(format_game_time(7, 0), "07:00 AM");
        assert_eq!(format_game_time(0, 15), "12:15 AM");
        assert_eq!(format_game_time(12, 30), "12:30 PM");
        assert_eq!(format_game_time(23, 45), "11:45 PM");
    }

    #[test]
    fn test_day_of_week_cycles() {
        assert_eq!(day_of_week(1), "Domingo");
        assert_eq!(day_of_week(7), "Sábado");
        assert_eq!(day_of_week(8), "Domingo");
    }
}
