//! Dream Story: mini-juego de rutina de sueño.
//!
//! Reloj acelerado + tres estadísticas acotadas a [0, 100] que cambian con
//! la hora del día y con las acciones del jugador.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod actions;
pub mod clock;
pub mod simulator;

pub use actions::{Action, ActionEffect, ActionOutcome};
pub use simulator::{GamePhase, PhaseEvent, Simulator};

pub const STAT_MIN: f32 = 0.0;
pub const STAT_MAX: f32 = 100.0;

pub const ACHIEVEMENT_FIRST_ACTION: &str = "Primeira Ação";
pub const ACHIEVEMENT_ROOKIE_ATHLETE: &str = "Atleta Iniciante";

pub fn clamp_stat(value: f32) -> f32 {
    value.clamp(STAT_MIN, STAT_MAX)
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Room {
    #[default]
    Bedroom,
    Living,
    Kitchen,
    Gym,
    Bathroom,
}

impl Room {
    pub const ALL: [Room; 5] = [
        Room::Bedroom,
        Room::Living,
        Room::Kitchen,
        Room::Gym,
        Room::Bathroom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Room::Bedroom => "🛏 Quarto",
            Room::Living => "🛋 Sala",
            Room::Kitchen => "🍽 Cozinha",
            Room::Gym => "💪 Academia",
            Room::Bathroom => "🚿 Banheiro",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    #[default]
    Happy,
    Tired,
    Energetic,
    Relaxed,
    Stressed,
}

impl Mood {
    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "😊 Feliz",
            Mood::Tired => "😴 Cansado",
            Mood::Energetic => "⚡ Energético",
            Mood::Relaxed => "😌 Relaxado",
            Mood::Stressed => "😰 Estressado",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Activity {
    #[default]
    Idle,
    Sleep,
    Eat,
    Exercise,
    Relax,
    DrinkWater,
    Shower,
}

impl Activity {
    pub fn label(self) -> &'static str {
        match self {
            Activity::Idle => "Parado",
            Activity::Sleep => "Dormindo",
            Activity::Eat => "Comendo",
            Activity::Exercise => "Exercitando",
            Activity::Relax => "Relaxando",
            Activity::DrinkWater => "Bebendo água",
            Activity::Shower => "Tomando banho",
        }
    }
}

/// Velocidad del reloj: 1x, 2x o 4x.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum GameSpeed {
    #[default]
    Normal,
    Double,
    Quadruple,
}

impl GameSpeed {
    pub const ALL: [GameSpeed; 3] = [GameSpeed::Normal, GameSpeed::Double, GameSpeed::Quadruple];

    pub fn label(self) -> String {
        format!("{}x", self.factor())
    }

    pub fn factor(self) -> u32 {
        match self {
            GameSpeed::Normal => 1,
            GameSpeed::Double => 2,
            GameSpeed::Quadruple => 4,
        }
    }
}

impl From<GameSpeed> for u8 {
    fn from(speed: GameSpeed) -> u8 {
        speed.factor() as u8
    }
}

impl TryFrom<u8> for GameSpeed {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(GameSpeed::Normal),
            2 => Ok(GameSpeed::Double),
            4 => Ok(GameSpeed::Quadruple),
            other => Err(format!("velocidad de juego no soportada: {other}")),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Character {
    pub name: String,
    pub mood: Mood,
    pub activity: Activity,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub energy: f32,
    pub happiness: f32,
    pub health: f32,
    pub sleep_quality: f32,
    pub current_room: Room,
    pub is_playing: bool,
    pub game_speed: GameSpeed,
    pub completed_actions: BTreeSet<String>,
    pub character: Character,
    pub achievements: Vec<String>,
    pub total_score: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            day: 1,
            hour: 7,
            minute: 0,
            energy: 80.0,
            happiness: 70.0,
            health: 85.0,
            sleep_quality: 60.0,
            current_room: Room::Bedroom,
            is_playing: false,
            game_speed: GameSpeed::Normal,
            completed_actions: BTreeSet::new(),
            character: Character {
                name: "Alex".to_string(),
                mood: Mood::Happy,
                activity: Activity::Idle,
            },
            achievements: Vec::new(),
            total_score: 0,
        }
    }
}

impl GameState {
    pub fn clamp_stats(&mut self) {
        self.energy = clamp_stat(self.energy);
        self.happiness = clamp_stat(self.happiness);
        self.health = clamp_stat(self.health);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AudioSettings {
    pub is_muted: bool,
    // Solo se persiste; la app no reproduce sonido.
    pub volume: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            is_muted: false,
            volume: 0.7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(GameState::default()).unwrap();
        assert_eq!(json["gameSpeed"], 1);
        assert_eq!(json["currentRoom"], "bedroom");
        assert_eq!(json["character"]["activity"], "idle");
        assert_eq!(json["totalScore"], 0);
    }

    #[test]
    fn test_audio_settings_keep_saved_volume() {
        let audio: AudioSettings =
            serde_json::from_str(r#"{"isMuted":true,"volume":0.3}"#).unwrap();
        assert!(audio.is_muted);
        assert_eq!(audio.volume, 0.3);
        assert_eq!(AudioSettings::default().volume, 0.7);
    }

    #[test]
    fn test_game_speed_rejects_unknown_factor() {
        assert!(serde_json::from_str::<GameSpeed>("4").is_ok());
        assert!(serde_json::from_str::<GameSpeed>("3").is_err());
    }

    #[test]
    fn test_activity_wire_names() {
        assert_eq!(
            serde_json::to_string(&Activity::DrinkWater).unwrap(),
            "\"drinkWater\""
        );
    }
}
