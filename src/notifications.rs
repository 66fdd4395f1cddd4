//! Recordatorios dentro de la app: progreso a medias primero, inactividad después.

use crate::data::{Catalog, NotificationConfig};
use crate::progress::ProgressTracker;
use crate::storage::{KeyValueStore, NotificationRepo, Repository};
use crate::timer::PeriodicTask;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

const PROGRESS_MESSAGES: [&str; 8] = [
    "⚡ Está quase lá! Complete a próxima aula para otimizar seu sono! 💡",
    "⏰ Você está a um passo de melhorar seu sono! Volte para a aula e continue sua jornada! 💤",
    "🛏 Não deixe o sono esperar! A aula que falta está esperando por você! 😴",
    "🚀 A próxima aula está te chamando! Dê um passo para o sono perfeito agora mesmo! 🌙",
    "🕒 O sono reparador está mais perto! Continue assistindo para concluir o módulo e dormir melhor! 🌙",
    "💫 Sua jornada para o sono perfeito continua! Complete a próxima aula agora! ✨",
    "🌟 O descanso que você merece está a uma aula de distância! Continue! 💤",
    "⭐ Não pare agora! Sua rotina de sono saudável depende da próxima aula! 🛌",
];

const INACTIVITY_MESSAGES: [&str; 8] = [
    "⏰ O tempo está correndo! Volte agora e continue melhorando o seu sono! 💤",
    "😴 24 horas sem sonhar? Volte ao aplicativo e retome sua jornada de sono saudável! 🌙",
    "💡 Sua jornada de sono está esperando por você! Não deixe o descanso de lado por mais tempo!",
    "🔔 Está na hora de voltar! Uma boa noite de sono te espera. Acesse o aplicativo agora!",
    "🌙 Sentimos sua falta! Volte e continue construindo sua rotina de sono perfeita! ⭐",
    "💤 24 horas é muito tempo longe do seu sono ideal! Retome sua jornada agora! 🚀",
    "🛌 O Sleep Protocol está te esperando! Volte e durma melhor hoje mesmo! 💫",
    "⚡ Não deixe sua evolução parar! Volte ao app e continue melhorando seu sono! 🌟",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub enabled: bool,
    pub last_login_time: Option<DateTime<Utc>>,
    pub last_notification_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderKind {
    IncompleteProgress { module_id: String },
    Inactivity,
    Enabled,
    Test,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub kind: ReminderKind,
    pub title: &'static str,
    pub message: &'static str,
}

impl Reminder {
    fn enabled() -> Self {
        Self {
            kind: ReminderKind::Enabled,
            title: "🔔 Sleep Protocol - Notificações Ativadas!",
            message: "Agora você receberá lembretes personalizados para continuar sua jornada de sono saudável! 🌙",
        }
    }

    fn test() -> Self {
        Self {
            kind: ReminderKind::Test,
            title: "🧪 Sleep Protocol - Teste de Notificação",
            message: "Suas notificações estão funcionando perfeitamente! 🎉",
        }
    }
}

fn pick(messages: &'static [&'static str], rng: &mut impl Rng) -> &'static str {
    messages.choose(rng).copied().unwrap_or_default()
}

#[derive(Debug, Clone, Copy)]
pub struct ReminderPolicy {
    pub inactivity: Duration,
    pub cooldown: Duration,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            inactivity: Duration::hours(24),
            cooldown: Duration::hours(6),
        }
    }
}

impl From<&NotificationConfig> for ReminderPolicy {
    fn from(config: &NotificationConfig) -> Self {
        Self {
            inactivity: Duration::hours(config.inactivity_hours),
            cooldown: Duration::hours(config.cooldown_hours),
        }
    }
}

impl ReminderPolicy {
    /// Decide el recordatorio de esta comprobación. Si hay uno, sella
    /// `last_notification_time` en `settings`.
    pub fn check(
        &self,
        now: DateTime<Utc>,
        settings: &mut NotificationSettings,
        tracker: &ProgressTracker,
        catalog: &Catalog,
        rng: &mut impl Rng,
    ) -> Option<Reminder> {
        if !settings.enabled {
            return None;
        }
        let reminder = self
            .incomplete_progress(tracker, catalog, rng)
            .or_else(|| self.inactivity(now, settings, rng))?;
        settings.last_notification_time = Some(now);
        Some(reminder)
    }

    fn incomplete_progress(
        &self,
        tracker: &ProgressTracker,
        catalog: &Catalog,
        rng: &mut impl Rng,
    ) -> Option<Reminder> {
        let progress = tracker.recently_watched().into_iter().find(|p| {
            catalog
                .module(&p.module_id)
                .is_some_and(|m| p.completed_lessons < m.lessons.len())
        })?;
        Some(Reminder {
            kind: ReminderKind::IncompleteProgress {
                module_id: progress.module_id.clone(),
            },
            title: "🎯 Sleep Protocol - Continue sua jornada!",
            message: pick(&PROGRESS_MESSAGES, rng),
        })
    }

    fn inactivity(
        &self,
        now: DateTime<Utc>,
        settings: &NotificationSettings,
        rng: &mut impl Rng,
    ) -> Option<Reminder> {
        let last_login = settings.last_login_time?;
        if now - last_login < self.inactivity {
            return None;
        }
        // sin aviso previo cuenta como elegible
        let cooled_down = settings
            .last_notification_time
            .is_none_or(|last| now - last >= self.cooldown);
        if !cooled_down {
            return None;
        }
        Some(Reminder {
            kind: ReminderKind::Inactivity,
            title: "🌙 Sleep Protocol - Sentimos sua falta!",
            message: pick(&INACTIVITY_MESSAGES, rng),
        })
    }
}

/// Ajustes persistidos + sondeo periódico + el aviso visible.
#[derive(Debug, Clone)]
pub struct Notifier {
    settings: NotificationSettings,
    policy: ReminderPolicy,
    poller: PeriodicTask,
    banner: Option<Reminder>,
}

impl Notifier {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            settings: NotificationSettings::default(),
            policy: ReminderPolicy::from(config),
            poller: PeriodicTask::new(std::time::Duration::from_secs(config.poll_interval_secs)),
            banner: None,
        }
    }

    pub fn load(&mut self, store: &dyn KeyValueStore) {
        self.settings = NotificationRepo::load(store).unwrap_or_default();
    }

    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }

    pub fn banner(&self) -> Option<&Reminder> {
        self.banner.as_ref()
    }

    pub fn dismiss(&mut self) {
        self.banner = None;
    }

    fn persist(&self, store: &mut dyn KeyValueStore) {
        if let Err(e) = NotificationRepo::save(store, &self.settings) {
            log::warn!("{e}");
        }
    }

    /// Cada inicio autenticado cuenta como acceso.
    pub fn stamp_login(&mut self, store: &mut dyn KeyValueStore, now: DateTime<Utc>) {
        self.settings.last_login_time = Some(now);
        self.persist(store);
    }

    pub fn toggle(&mut self, store: &mut dyn KeyValueStore, now: DateTime<Utc>) {
        if self.settings.enabled {
            self.settings.enabled = false;
            self.banner = None;
            self.poller.stop();
        } else {
            self.settings.enabled = true;
            self.settings.last_login_time = Some(now);
            self.settings.last_notification_time = Some(now);
            self.banner = Some(Reminder::enabled());
        }
        log::info!("Recordatorios {}", if self.settings.enabled { "activados" } else { "desactivados" });
        self.persist(store);
    }

    pub fn send_test(&mut self, store: &mut dyn KeyValueStore, now: DateTime<Utc>) {
        if self.settings.enabled {
            self.settings.last_notification_time = Some(now);
            self.banner = Some(Reminder::test());
            self.persist(store);
        }
    }

    /// Avanza el sondeo. Solo corre con recordatorios activos y sesión abierta.
    pub fn advance(
        &mut self,
        dt: std::time::Duration,
        now: DateTime<Utc>,
        authenticated: bool,
        tracker: &ProgressTracker,
        catalog: &Catalog,
        store: &mut dyn KeyValueStore,
    ) -> Option<&Reminder> {
        let active = self.settings.enabled && authenticated;
        if active != self.poller.is_running() {
            if active {
                self.poller.start();
            } else {
                self.poller.stop();
            }
        }
        if self.poller.advance(dt) == 0 {
            return None;
        }

        let reminder = self.policy.check(
            now,
            &mut self.settings,
            tracker,
            catalog,
            &mut rand::thread_rng(),
        )?;
        log::debug!("Recordatorio: {}", reminder.title);
        self.persist(store);
        self.banner = Some(reminder);
        self.banner.as_ref()
    }

    pub fn next_poll(&self) -> Option<std::time::Duration> {
        self.poller.remaining()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{AppConfig, read_modules_embedded};
    use crate::storage::LocalStore;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap()
    }

    fn enabled(last_login: Option<DateTime<Utc>>) -> NotificationSettings {
        NotificationSettings {
            enabled: true,
            last_login_time: last_login,
            last_notification_time: None,
        }
    }

    #[test]
    fn test_disabled_never_reminds() {
        let catalog = read_modules_embedded();
        let mut tracker = ProgressTracker::default();
        tracker.update_progress_at(&catalog.modules[0].id, 0, 1, now());
        let mut settings = NotificationSettings::default();
        let mut rng = StdRng::seed_from_u64(7);
        let policy = ReminderPolicy::default();
        assert!(policy.check(now(), &mut settings, &tracker, &catalog, &mut rng).is_none());
        assert!(settings.last_notification_time.is_none());
    }

    #[test]
    fn test_incomplete_progress_comes_first() {
        let catalog = read_modules_embedded();
        let mut tracker = ProgressTracker::default();
        let finished = &catalog.modules[0];
        let halfway = &catalog.modules[1];
        tracker.update_progress_at(
            &finished.id,
            finished.last_lesson_index(),
            finished.lessons.len(),
            now() - Duration::hours(1),
        );
        tracker.update_progress_at(&halfway.id, 1, 2, now() - Duration::hours(2));
        let mut settings = enabled(Some(now() - Duration::days(3)));
        let mut rng = StdRng::seed_from_u64(7);

        let reminder = ReminderPolicy::default()
            .check(now(), &mut settings, &tracker, &catalog, &mut rng)
            .unwrap();
        assert_eq!(
            reminder.kind,
            ReminderKind::IncompleteProgress {
                module_id: halfway.id.clone()
            }
        );
        assert!(PROGRESS_MESSAGES.contains(&reminder.message));
        assert_eq!(settings.last_notification_time, Some(now()));
    }

    #[test]
    fn test_inactivity_after_a_day_with_cooldown() {
        let catalog = read_modules_embedded();
        let tracker = ProgressTracker::default();
        let policy = ReminderPolicy::default();
        let mut rng = StdRng::seed_from_u64(1);

        let mut recent = enabled(Some(now() - Duration::hours(23)));
        assert!(policy.check(now(), &mut recent, &tracker, &catalog, &mut rng).is_none());

        let mut settings = enabled(Some(now() - Duration::hours(24)));
        let first = policy
            .check(now(), &mut settings, &tracker, &catalog, &mut rng)
            .unwrap();
        assert_eq!(first.kind, ReminderKind::Inactivity);
        assert!(INACTIVITY_MESSAGES.contains(&first.message));

        let soon = now() + Duration::hours(5);
        assert!(policy.check(soon, &mut settings, &tracker, &catalog, &mut rng).is_none());
        let later = now() + Duration::hours(6);
        assert!(policy.check(later, &mut settings, &tracker, &catalog, &mut rng).is_some());
    }

    #[test]
    fn test_no_login_time_means_no_inactivity_reminder() {
        let catalog = read_modules_embedded();
        let mut settings = enabled(None);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(
            ReminderPolicy::default()
                .check(now(), &mut settings, &ProgressTracker::default(), &catalog, &mut rng)
                .is_none()
        );
    }

    #[test]
    fn test_notifier_polls_only_when_enabled_and_authenticated() {
        let config = AppConfig::embedded();
        let catalog = read_modules_embedded();
        let mut tracker = ProgressTracker::default();
        tracker.update_progress_at(&catalog.modules[0].id, 0, 1, now());
        let mut store = LocalStore::new();
        let mut notifier = Notifier::new(&config.notifications);
        let minute = std::time::Duration::from_secs(60);

        assert!(notifier.advance(minute, now(), true, &tracker, &catalog, &mut store).is_none());

        notifier.toggle(&mut store, now());
        assert_eq!(notifier.banner().map(|r| &r.kind), Some(&ReminderKind::Enabled));
        notifier.dismiss();

        assert!(notifier.advance(minute, now(), false, &tracker, &catalog, &mut store).is_none());
        let almost = std::time::Duration::from_secs(59);
        let second = std::time::Duration::from_secs(1);
        assert!(notifier.advance(almost, now(), true, &tracker, &catalog, &mut store).is_none());
        let reminder = notifier
            .advance(second, now(), true, &tracker, &catalog, &mut store)
            .cloned();
        assert_eq!(
            reminder.map(|r| r.kind),
            Some(ReminderKind::IncompleteProgress {
                module_id: catalog.modules[0].id.clone()
            })
        );

        let saved = NotificationRepo::load(&store).unwrap();
        assert!(saved.enabled);
        assert_eq!(saved.last_notification_time, Some(now()));
    }

    #[test]
    fn test_toggle_off_and_reload() {
        let config = AppConfig::embedded();
        let mut store = LocalStore::new();
        let mut notifier = Notifier::new(&config.notifications);
        notifier.toggle(&mut store, now());
        notifier.toggle(&mut store, now());
        assert!(notifier.banner().is_none());

        let mut reloaded = Notifier::new(&config.notifications);
        reloaded.load(&store);
        assert!(!reloaded.settings().enabled);
        assert_eq!(reloaded.settings().last_login_time, Some(now()));
    }

    #[test]
    fn test_settings_wire_names() {
        let json = serde_json::to_value(enabled(None)).unwrap();
        assert_eq!(json["enabled"], true);
        assert!(json["lastLoginTime"].is_null());
        assert!(json.get("lastNotificationTime").is_some());
    }
}
