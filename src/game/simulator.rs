use super::actions::{self, Action, ActionOutcome};
use super::clock::{self, MINUTES_PER_TICK};
use super::{Activity, GameSpeed, GameState, Room};
use crate::storage::{GameSaveRepo, KeyValueStore, Repository, StorageError};
use crate::timer::PeriodicTask;
use std::time::Duration;

pub const BASE_TICK_INTERVAL: Duration = Duration::from_millis(1000);
pub const ACTIVITY_RESET_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Welcome,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    Start,
    Reset,
}

impl GamePhase {
    pub fn next(self, event: PhaseEvent) -> GamePhase {
        match (self, event) {
            (_, PhaseEvent::Start) => GamePhase::Playing,
            // reiniciar no vuelve a la bienvenida
            (phase, PhaseEvent::Reset) => phase,
        }
    }
}

/// Dueño del estado del juego y de sus temporizadores.
#[derive(Debug, Clone)]
pub struct Simulator {
    state: GameState,
    phase: GamePhase,
    ticker: PeriodicTask,
    base_interval: Duration,
    minutes_per_tick: u32,
    activity_reset_delay: Duration,
    // Una cuenta atrás por acción, como un setTimeout cada una
    pending_resets: Vec<Duration>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new(BASE_TICK_INTERVAL, MINUTES_PER_TICK, ACTIVITY_RESET_DELAY)
    }
}

impl Simulator {
    pub fn new(base_interval: Duration, minutes_per_tick: u32, activity_reset_delay: Duration) -> Self {
        Self {
            state: GameState::default(),
            phase: GamePhase::Welcome,
            ticker: PeriodicTask::new(base_interval),
            base_interval,
            minutes_per_tick,
            activity_reset_delay,
            pending_resets: Vec::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn tick_interval(&self) -> Duration {
        self.ticker.interval()
    }

    /// Tiempo real hasta el próximo evento (tick o vuelta a `idle`).
    pub fn next_wakeup(&self) -> Option<Duration> {
        let reset = self.pending_resets.iter().min().copied();
        match (self.ticker.remaining(), reset) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn start(&mut self) {
        self.phase = self.phase.next(PhaseEvent::Start);
        self.set_playing(true);
        log::info!("Dream Story iniciado");
    }

    fn set_playing(&mut self, playing: bool) {
        self.state.is_playing = playing;
        if playing {
            self.ticker
                .set_interval(self.base_interval / self.state.game_speed.factor());
            self.ticker.start();
        } else {
            self.ticker.stop();
        }
    }

    pub fn toggle_play_pause(&mut self) {
        let playing = !self.state.is_playing;
        self.set_playing(playing);
    }

    /// El reloj sigue avanzando 15 minutos por tick; lo que cambia es la cadencia.
    pub fn change_game_speed(&mut self, speed: GameSpeed) {
        self.state.game_speed = speed;
        self.ticker.set_interval(self.base_interval / speed.factor());
    }

    pub fn change_room(&mut self, room: Room) {
        self.state.current_room = room;
    }

    pub fn perform_action(&mut self, action: Action, object: &str) -> ActionOutcome {
        let outcome = actions::perform(&mut self.state, action, object);
        self.pending_resets.push(self.activity_reset_delay);
        for achievement in &outcome.new_achievements {
            log::info!("Conquista desbloqueada: {achievement}");
        }
        outcome
    }

    pub fn reset_game(&mut self) {
        self.state = GameState::default();
        self.pending_resets.clear();
        self.ticker.stop();
        self.ticker.set_interval(self.base_interval);
        self.phase = self.phase.next(PhaseEvent::Reset);
    }

    pub fn save_game(&self, store: &mut dyn KeyValueStore) -> Result<(), StorageError> {
        GameSaveRepo::save(store, &self.state)?;
        log::info!(
            "Jogo salvo (dia {}, {} pontos)",
            self.state.day,
            self.state.total_score
        );
        Ok(())
    }

    pub fn has_saved_game(store: &dyn KeyValueStore) -> bool {
        GameSaveRepo::load(store).is_some()
    }

    /// Solo por acción explícita del jugador; el juego nunca se restaura solo.
    /// Deja la partida en juego pero en pausa.
    pub fn load_saved_game(&mut self, store: &dyn KeyValueStore) -> bool {
        let Some(mut saved) = GameSaveRepo::load(store) else {
            return false;
        };
        saved.is_playing = false;
        saved.character.activity = Activity::Idle;
        saved.clamp_stats();
        self.state = saved;
        self.phase = self.phase.next(PhaseEvent::Start);
        self.pending_resets.clear();
        self.ticker.stop();
        self.ticker
            .set_interval(self.base_interval / self.state.game_speed.factor());
        true
    }

    /// Un tick manual, sin pasar por el temporizador.
    pub fn advance_one_tick(&mut self) {
        let day_before = self.state.day;
        clock::advance_tick(&mut self.state, self.minutes_per_tick);
        if self.state.day != day_before {
            log::debug!("Dream Story: dia {}", self.state.day);
        }
    }

    /// Avanza tiempo real. Las vueltas a `idle` corren aunque el juego esté en pausa.
    /// Devuelve los ticks disparados.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        let mut expired = 0;
        self.pending_resets.retain_mut(|remaining| {
            if *remaining <= dt {
                expired += 1;
                false
            } else {
                *remaining -= dt;
                true
            }
        });
        if expired > 0 {
            self.state.character.activity = Activity::Idle;
        }

        let fired = self.ticker.advance(dt);
        for _ in 0..fired {
            self.advance_one_tick();
        }
        fired
    }
}
