use crate::auth::{AuthGate, LoginFlow, LogoutFlow};
use crate::calculator::{SleepCalculator, SleepPlan};
use crate::data::{AppConfig, Catalog, read_faq_embedded, read_modules_embedded, read_tips_embedded};
use crate::game::{AudioSettings, Simulator};
use crate::model::{AppState, FaqEntry, Theme, Tip};
use crate::navigation::ModuleSession;
use crate::notifications::Notifier;
use crate::progress::ProgressTracker;
use crate::storage::{
    ALL_KEYS, AudioRepo, KeyValueStore, LocalStore, ProgressRepo, Repository, ThemeRepo,
};
use chrono::{DateTime, Utc};
use std::time::Duration;

// Submódulos
pub mod game;
pub mod navigation;
pub mod progress;
pub mod session;
pub mod settings;
pub mod view_models;

// Re-export de view models
pub use crate::view_models::{ContinueRow, LessonRow, ModuleCard};

/// Estado del formulario de acceso.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub show_password: bool,
}

pub struct SleepApp {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub faq: Vec<FaqEntry>,
    pub tips: Vec<Tip>,
    pub store: LocalStore,
    pub auth: AuthGate,
    pub login_form: LoginForm,
    pub login_flow: LoginFlow,
    pub logout_flow: LogoutFlow,
    pub state: AppState,
    pub theme: Theme,
    pub tracker: ProgressTracker,
    /// Módulo abierto; `None` fuera de la pantalla de módulo.
    pub session: Option<ModuleSession>,
    /// La UI vuelve arriba del todo en el próximo frame.
    pub scroll_to_top: bool,
    pub confirm_reset: bool,
    /// Pantalla "empezar desde el principio" tras borrar el progreso.
    pub show_start_screen: bool,
    pub notifier: Notifier,
    pub game: Simulator,
    pub audio: AudioSettings,
    pub game_message: Option<String>,
    pub calculator: SleepCalculator,
    pub calculator_result: Option<SleepPlan>,
    pub open_faq: Option<usize>,
    last_frame: Option<f64>,
}

impl SleepApp {
    /// App sobre un almacén ya cargado. El juego nunca se restaura solo.
    pub fn with_store(store: LocalStore) -> Self {
        Self::with_store_at(store, Utc::now())
    }

    pub fn with_store_at(mut store: LocalStore, now: DateTime<Utc>) -> Self {
        let config = AppConfig::embedded();

        let mut auth = AuthGate::new(config.credentials.clone());
        auth.restore(&mut store);

        let mut notifier = Notifier::new(&config.notifications);
        notifier.load(&store);

        let game = game::new_simulator(&config.game);

        let tracker = ProgressTracker::from_records(ProgressRepo::load(&store).unwrap_or_default());
        let theme = ThemeRepo::load(&store).unwrap_or_default();
        let audio = AudioRepo::load(&store).unwrap_or_default();

        let mut app = Self {
            config,
            catalog: read_modules_embedded(),
            faq: read_faq_embedded(),
            tips: read_tips_embedded(),
            store,
            auth,
            login_form: LoginForm::default(),
            login_flow: LoginFlow::default(),
            logout_flow: LogoutFlow::default(),
            state: AppState::Login,
            theme,
            tracker,
            session: None,
            scroll_to_top: false,
            confirm_reset: false,
            show_start_screen: false,
            notifier,
            game,
            audio,
            game_message: None,
            calculator: SleepCalculator::default(),
            calculator_result: None,
            open_faq: None,
            last_frame: None,
        };

        if app.auth.is_authenticated() {
            app.enter_home(now);
        }
        app
    }

    /// Carga las claves conocidas desde el almacenamiento de eframe.
    pub fn from_storage(storage: Option<&dyn eframe::Storage>) -> Self {
        Self::with_store(LocalStore::from_eframe(storage, &ALL_KEYS))
    }

    /// Guarda un valor tipado; un fallo se registra y la app sigue.
    pub(crate) fn persist<R: Repository>(&mut self, value: &R::Value) {
        if let Err(e) = R::save(&mut self.store, value) {
            log::warn!("No se pudo guardar: {e}");
        }
    }

    /// Avance por frame. `now_secs` es el reloj de egui.
    pub fn tick(&mut self, now_secs: f64) {
        let dt = self
            .last_frame
            .map(|last| Duration::from_secs_f64((now_secs - last).max(0.0)))
            .unwrap_or_default();
        self.last_frame = Some(now_secs);

        self.poll_login(now_secs);
        self.poll_logout(now_secs);
        self.advance_game(dt);
        self.advance_reminders(dt, Utc::now());
    }

    /// Cuánto puede esperar el próximo repintado.
    pub fn next_repaint(&self, now_secs: f64) -> Option<Duration> {
        let flows = [self.login_flow.deadline(), self.logout_flow.deadline()]
            .into_iter()
            .flatten()
            .map(|until| Duration::from_secs_f64((until - now_secs).max(0.0)));
        flows
            .chain(self.game.next_wakeup())
            .chain(self.notifier.next_poll())
            .min()
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        &self.store
    }
}
