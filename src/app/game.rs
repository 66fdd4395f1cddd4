use super::*;
use crate::data::GameConfig;
use crate::game::{Action, GameSpeed, Room};

pub(crate) fn new_simulator(config: &GameConfig) -> Simulator {
    Simulator::new(
        Duration::from_millis(config.tick_interval_ms),
        config.minutes_per_tick,
        Duration::from_secs_f64(config.activity_reset_secs),
    )
}

impl SleepApp {
    pub fn start_game(&mut self) {
        self.game.start();
        self.game_message = None;
    }

    /// Salir de la pantalla descarta la partida en memoria; solo queda lo guardado.
    pub fn close_game(&mut self) {
        self.game = new_simulator(&self.config.game);
        self.game_message = None;
    }

    pub fn game_action(&mut self, action: Action, object: &str) {
        let outcome = self.game.perform_action(action, object);
        if !outcome.new_achievements.is_empty() {
            self.game_message = Some(format!(
                "🏆 Nova conquista: {}",
                outcome.new_achievements.join(", ")
            ));
        }
    }

    pub fn change_room(&mut self, room: Room) {
        self.game.change_room(room);
    }

    pub fn change_game_speed(&mut self, speed: GameSpeed) {
        self.game.change_game_speed(speed);
    }

    pub fn toggle_play_pause(&mut self) {
        self.game.toggle_play_pause();
    }

    pub fn reset_game(&mut self) {
        self.game.reset_game();
        self.game_message = None;
    }

    pub fn save_game(&mut self) {
        match self.game.save_game(&mut self.store) {
            Ok(()) => self.game_message = Some("💾 Jogo salvo!".to_string()),
            Err(e) => {
                log::warn!("No se pudo guardar la partida: {e}");
                self.game_message = Some("⚠ Não foi possível salvar o jogo.".to_string());
            }
        }
    }

    pub fn has_saved_game(&self) -> bool {
        Simulator::has_saved_game(&self.store)
    }

    pub fn load_saved_game(&mut self) {
        if self.game.load_saved_game(&self.store) {
            self.game_message = Some("📂 Jogo carregado. Toque em ▶ para continuar.".to_string());
        } else {
            self.game_message = Some("Nenhum jogo salvo encontrado.".to_string());
        }
    }

    pub fn toggle_mute(&mut self) {
        self.audio.is_muted = !self.audio.is_muted;
        let audio = self.audio.clone();
        self.persist::<AudioRepo>(&audio);
    }

    pub(crate) fn advance_game(&mut self, dt: Duration) {
        if self.state == AppState::Game {
            self.game.advance(dt);
        }
    }
}
