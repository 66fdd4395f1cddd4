use super::*;
use crate::auth::LogoutStep;

impl SleepApp {
    pub(crate) fn enter_home(&mut self, now: DateTime<Utc>) {
        self.state = AppState::Home;
        self.notifier.stamp_login(&mut self.store, now);
    }

    pub fn submit_login(&mut self, now_secs: f64) {
        let delay = self.config.login_delay_ms as f64 / 1000.0;
        self.login_flow.submit(now_secs, delay);
    }

    /// Comprueba las credenciales cuando termina la pausa del formulario.
    pub fn poll_login(&mut self, now_secs: f64) {
        if !self.login_flow.poll(now_secs) {
            return;
        }
        let email = self.login_form.email.trim().to_string();
        let accepted = self
            .auth
            .login(&mut self.store, &email, &self.login_form.password);
        self.login_flow.finish(accepted);
        if accepted {
            self.login_form = LoginForm::default();
            self.enter_home(Utc::now());
        }
    }

    pub fn request_logout(&mut self) {
        self.logout_flow.request();
    }

    pub fn cancel_logout(&mut self) {
        self.logout_flow.cancel();
    }

    pub fn confirm_logout(&mut self, now_secs: f64) {
        let saving = self.config.logout_saving_ms as f64 / 1000.0;
        self.logout_flow.confirm(now_secs, saving);
    }

    pub fn poll_logout(&mut self, now_secs: f64) {
        let success = self.config.logout_success_ms as f64 / 1000.0;
        if self.logout_flow.advance(now_secs, success) == LogoutStep::Logout {
            self.logout();
        }
    }

    /// Cierra la sesión al momento. Progreso, tema y ajustes se conservan.
    pub fn logout(&mut self) {
        self.auth.logout(&mut self.store);
        self.logout_flow = LogoutFlow::Idle;
        self.session = None;
        self.confirm_reset = false;
        self.show_start_screen = false;
        self.notifier.dismiss();
        self.state = AppState::Login;
    }
}
