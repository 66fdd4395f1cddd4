use super::*;
use crate::progress::local_date_label;
use crate::storage::FirstAccessRepo;

impl SleepApp {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        let theme = self.theme;
        self.persist::<ThemeRepo>(&theme);
    }

    pub fn toggle_notifications(&mut self) {
        self.notifier.toggle(&mut self.store, Utc::now());
    }

    pub fn send_test_notification(&mut self) {
        self.notifier.send_test(&mut self.store, Utc::now());
    }

    pub(crate) fn advance_reminders(&mut self, dt: Duration, now: DateTime<Utc>) {
        let authenticated = self.auth.is_authenticated();
        self.notifier.advance(
            dt,
            now,
            authenticated,
            &self.tracker,
            &self.catalog,
            &mut self.store,
        );
    }

    pub fn calculate_sleep(&mut self) {
        self.calculator_result = self.calculator.calculate();
    }

    /// Correo de la sesión para el perfil.
    pub fn user_email(&self) -> Option<&str> {
        self.auth.session().map(|s| s.email.as_str())
    }

    /// "Membro desde": fecha del primer acceso en el calendario local.
    pub fn member_since(&self) -> Option<String> {
        FirstAccessRepo::load(&self.store).map(local_date_label)
    }
}
