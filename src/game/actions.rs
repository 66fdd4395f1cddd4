use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Sleep,
    Eat,
    Exercise,
    Relax,
    DrinkWater,
    Shower,
}

/// Efecto fijo de una acción, aplicado al instante.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionEffect {
    pub energy: f32,
    pub happiness: f32,
    pub health: f32,
    /// `None` conserva el humor actual.
    pub mood: Option<Mood>,
    pub activity: Activity,
    pub score: u32,
}

impl Action {
    pub fn key_prefix(self) -> &'static str {
        match self {
            Action::Sleep => "sleep",
            Action::Eat => "eat",
            Action::Exercise => "exercise",
            Action::Relax => "relax",
            Action::DrinkWater => "drinkWater",
            Action::Shower => "shower",
        }
    }

    /// Clave "<acción>-<objeto>" usada para los logros.
    pub fn key(self, object: &str) -> String {
        format!("{}-{}", self.key_prefix(), object)
    }

    pub fn effect(self) -> ActionEffect {
        match self {
            Action::Sleep => ActionEffect {
                energy: 30.0,
                happiness: 0.0,
                health: 10.0,
                mood: Some(Mood::Relaxed),
                activity: Activity::Sleep,
                score: 20,
            },
            Action::Eat => ActionEffect {
                energy: 15.0,
                happiness: 10.0,
                health: 0.0,
                mood: Some(Mood::Happy),
                activity: Activity::Eat,
                score: 10,
            },
            Action::Exercise => ActionEffect {
                energy: -10.0,
                happiness: 15.0,
                health: 20.0,
                mood: Some(Mood::Energetic),
                activity: Activity::Exercise,
                score: 25,
            },
            Action::Relax => ActionEffect {
                energy: 0.0,
                happiness: 20.0,
                health: 0.0,
                mood: Some(Mood::Relaxed),
                activity: Activity::Relax,
                score: 10,
            },
            Action::DrinkWater => ActionEffect {
                energy: 5.0,
                happiness: 0.0,
                health: 5.0,
                mood: None,
                activity: Activity::DrinkWater,
                score: 10,
            },
            Action::Shower => ActionEffect {
                energy: 0.0,
                happiness: 10.0,
                health: 5.0,
                mood: Some(Mood::Happy),
                activity: Activity::Shower,
                score: 10,
            },
        }
    }
}

/// Objetos interactivos de cada cómodo: (acción, objeto, etiqueta).
pub fn room_interactions(room: Room) -> &'static [(Action, &'static str, &'static str)] {
    match room {
        Room::Bedroom => &[
            (Action::Sleep, "bed", "🛏 Dormir na cama"),
            (Action::Relax, "computer", "💻 Usar o computador"),
        ],
        Room::Living => &[
            (Action::Relax, "sofa", "🛋 Descansar no sofá"),
            (Action::Relax, "tv", "📺 Assistir TV"),
            (Action::Relax, "videogame", "🎮 Jogar videogame"),
        ],
        Room::Kitchen => &[
            (Action::Eat, "table", "🍽 Fazer uma refeição"),
            (Action::DrinkWater, "water", "💧 Beber água"),
        ],
        Room::Gym => &[
            (Action::Exercise, "weights", "🏋 Levantar pesos"),
            (Action::Exercise, "treadmill", "🏃 Correr na esteira"),
            (Action::Exercise, "yoga", "🧘 Fazer yoga"),
        ],
        Room::Bathroom => &[
            (Action::Shower, "shower", "🚿 Tomar banho"),
            (Action::Relax, "skincare", "🧴 Cuidados com a pele"),
        ],
    }
}

/// Resultado de `perform`, para que la UI pueda avisar de los logros nuevos.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    pub first_time: bool,
    pub new_achievements: Vec<&'static str>,
}

/// Aplica una acción. Los efectos se repiten siempre; la clave se registra
/// una sola vez y los logros solo se evalúan la primera vez.
pub fn perform(state: &mut GameState, action: Action, object: &str) -> ActionOutcome {
    let effect = action.effect();
    let key = action.key(object);
    let mut outcome = ActionOutcome::default();

    if !state.completed_actions.contains(&key) {
        outcome.first_time = true;
        if state.completed_actions.is_empty() {
            outcome.new_achievements.push(ACHIEVEMENT_FIRST_ACTION);
        }
        let exercises_before = state
            .completed_actions
            .iter()
            .filter(|k| k.starts_with(Action::Exercise.key_prefix()))
            .count();
        if action == Action::Exercise && exercises_before == 2 {
            outcome.new_achievements.push(ACHIEVEMENT_ROOKIE_ATHLETE);
        }
        state.completed_actions.insert(key);
    }

    for achievement in &outcome.new_achievements {
        if !state.achievements.iter().any(|a| a == achievement) {
            state.achievements.push((*achievement).to_string());
        }
    }

    state.energy += effect.energy;
    state.happiness += effect.happiness;
    state.health += effect.health;
    state.clamp_stats();

    if let Some(mood) = effect.mood {
        state.character.mood = mood;
    }
    state.character.activity = effect.activity;
    state.total_score += effect.score;

    outcome
}
