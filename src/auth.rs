//! Acceso con una única credencial fija y los flujos temporizados de entrada y salida.

use crate::data::Credentials;
use crate::storage::{AuthRepo, FirstAccessRepo, KeyValueStore, LoginCountRepo, Repository};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthSession {
    pub email: String,
    pub is_authenticated: bool,
}

#[derive(Debug, Clone)]
pub struct AuthGate {
    credentials: Credentials,
    session: Option<AuthSession>,
}

impl AuthGate {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            session: None,
        }
    }

    /// Recupera la sesión guardada. Una sesión ilegible se borra; una ajena se ignora.
    pub fn restore(&mut self, store: &mut dyn KeyValueStore) {
        if store.get(AuthRepo::KEY).is_none() {
            return;
        }
        match AuthRepo::load(store) {
            Some(session)
                if session.is_authenticated && session.email == self.credentials.email =>
            {
                log::info!("Sesión restaurada para {}", session.email);
                self.session = Some(session);
            }
            Some(_) => {}
            None => AuthRepo::clear(store),
        }
    }

    pub fn login(&mut self, store: &mut dyn KeyValueStore, email: &str, password: &str) -> bool {
        self.login_at(store, email, password, Utc::now())
    }

    pub fn login_at(
        &mut self,
        store: &mut dyn KeyValueStore,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> bool {
        if email != self.credentials.email || password != self.credentials.password {
            log::info!("Intento de acceso rechazado");
            return false;
        }

        if FirstAccessRepo::load(store).is_none() {
            if let Err(e) = FirstAccessRepo::save(store, &now) {
                log::warn!("{e}");
            }
        }
        let count = LoginCountRepo::load(store).unwrap_or(0) + 1;
        if let Err(e) = LoginCountRepo::save(store, &count) {
            log::warn!("{e}");
        }

        let session = AuthSession {
            email: self.credentials.email.clone(),
            is_authenticated: true,
        };
        if let Err(e) = AuthRepo::save(store, &session) {
            log::warn!("{e}");
        }
        self.session = Some(session);
        log::info!("Acceso concedido (acceso número {count})");
        true
    }

    /// Solo borra la sesión; progreso y ajustes se quedan.
    pub fn logout(&mut self, store: &mut dyn KeyValueStore) {
        self.session = None;
        AuthRepo::clear(store);
        log::info!("Sesión cerrada");
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_authenticated)
    }

    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    pub fn is_first_login(store: &dyn KeyValueStore) -> bool {
        matches!(LoginCountRepo::load(store), None | Some(1))
    }

    pub fn is_returning_user(store: &dyn KeyValueStore) -> bool {
        LoginCountRepo::load(store).is_some_and(|count| count >= 2)
    }
}

/// Estado del formulario de acceso. `now` es el reloj de egui en segundos.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoginFlow {
    #[default]
    Idle,
    Verifying {
        until: f64,
    },
    Failed,
}

impl LoginFlow {
    pub fn submit(&mut self, now: f64, delay_secs: f64) {
        if !self.is_busy() {
            *self = LoginFlow::Verifying {
                until: now + delay_secs,
            };
        }
    }

    /// true cuando termina la pausa y hay que comprobar las credenciales.
    pub fn poll(&self, now: f64) -> bool {
        matches!(self, LoginFlow::Verifying { until } if now >= *until)
    }

    pub fn finish(&mut self, accepted: bool) {
        *self = if accepted {
            LoginFlow::Idle
        } else {
            LoginFlow::Failed
        };
    }

    /// Escribir en el formulario borra el error.
    pub fn edit(&mut self) {
        if *self == LoginFlow::Failed {
            *self = LoginFlow::Idle;
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, LoginFlow::Verifying { .. })
    }

    pub fn deadline(&self) -> Option<f64> {
        match self {
            LoginFlow::Verifying { until } => Some(*until),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LogoutFlow {
    #[default]
    Idle,
    Confirm,
    Saving {
        until: f64,
    },
    Success {
        until: f64,
    },
}

/// Qué debe hacer la app tras avanzar el flujo de salida.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutStep {
    Wait,
    Logout,
}

impl LogoutFlow {
    pub fn request(&mut self) {
        if *self == LogoutFlow::Idle {
            *self = LogoutFlow::Confirm;
        }
    }

    pub fn cancel(&mut self) {
        if *self == LogoutFlow::Confirm {
            *self = LogoutFlow::Idle;
        }
    }

    pub fn confirm(&mut self, now: f64, saving_secs: f64) {
        if *self == LogoutFlow::Confirm {
            *self = LogoutFlow::Saving {
                until: now + saving_secs,
            };
        }
    }

    pub fn advance(&mut self, now: f64, success_secs: f64) -> LogoutStep {
        match *self {
            LogoutFlow::Saving { until } if now >= until => {
                *self = LogoutFlow::Success {
                    until: now + success_secs,
                };
                LogoutStep::Wait
            }
            LogoutFlow::Success { until } if now >= until => {
                *self = LogoutFlow::Idle;
                LogoutStep::Logout
            }
            _ => LogoutStep::Wait,
        }
    }

    pub fn is_open(&self) -> bool {
        *self != LogoutFlow::Idle
    }

    pub fn deadline(&self) -> Option<f64> {
        match self {
            LogoutFlow::Saving { until } | LogoutFlow::Success { until } => Some(*until),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{AUTH_KEY, LocalStore};

    fn gate() -> AuthGate {
        AuthGate::new(Credentials {
            email: "cliente713@sonomilitar.com".to_string(),
            password: "c713".to_string(),
        })
    }

    #[test]
    fn test_login_rejects_wrong_password() {
        let mut store = LocalStore::new();
        let mut auth = gate();
        assert!(!auth.login(&mut store, "cliente713@sonomilitar.com", "nope"));
        assert!(!auth.is_authenticated());
        assert!(store.get(AUTH_KEY).is_none());
        assert!(LoginCountRepo::load(&store).is_none());
    }

    #[test]
    fn test_login_counts_and_stamps_first_access_once() {
        let mut store = LocalStore::new();
        let mut auth = gate();
        let first = Utc::now();
        assert!(AuthGate::is_first_login(&store));
        assert!(auth.login_at(&mut store, "cliente713@sonomilitar.com", "c713", first));
        assert!(auth.is_authenticated());
        assert!(AuthGate::is_first_login(&store));
        assert!(!AuthGate::is_returning_user(&store));

        auth.logout(&mut store);
        let later = first + chrono::Duration::days(2);
        assert!(auth.login_at(&mut store, "cliente713@sonomilitar.com", "c713", later));
        assert_eq!(LoginCountRepo::load(&store), Some(2));
        assert_eq!(FirstAccessRepo::load(&store), Some(first));
        assert!(AuthGate::is_returning_user(&store));
    }

    #[test]
    fn test_restore_and_logout() {
        let mut store = LocalStore::new();
        gate().login(&mut store, "cliente713@sonomilitar.com", "c713");

        let mut auth = gate();
        auth.restore(&mut store);
        assert!(auth.is_authenticated());

        auth.logout(&mut store);
        assert!(!auth.is_authenticated());
        let mut again = gate();
        again.restore(&mut store);
        assert!(!again.is_authenticated());
        // el contador sobrevive al logout
        assert_eq!(LoginCountRepo::load(&store), Some(1));
    }

    #[test]
    fn test_restore_ignores_foreign_session_and_clears_garbage() {
        let mut store = LocalStore::new();
        store.set(AUTH_KEY, r#"{"email":"x@y.z","isAuthenticated":true}"#.into());
        let mut auth = gate();
        auth.restore(&mut store);
        assert!(!auth.is_authenticated());
        assert!(store.get(AUTH_KEY).is_some());

        store.set(AUTH_KEY, "{roto".into());
        auth.restore(&mut store);
        assert!(!auth.is_authenticated());
        assert!(store.get(AUTH_KEY).is_none());
    }

    #[test]
    fn test_login_flow_waits_then_fails() {
        let mut flow = LoginFlow::default();
        flow.submit(10.0, 0.8);
        assert!(flow.is_busy());
        assert!(!flow.poll(10.5));
        assert!(flow.poll(11.0));
        flow.finish(false);
        assert_eq!(flow, LoginFlow::Failed);
        flow.edit();
        assert_eq!(flow, LoginFlow::Idle);
    }

    #[test]
    fn test_logout_flow_sequence() {
        let mut flow = LogoutFlow::default();
        flow.confirm(0.0, 1.0);
        assert_eq!(flow, LogoutFlow::Idle);

        flow.request();
        assert_eq!(flow, LogoutFlow::Confirm);
        flow.confirm(5.0, 1.0);
        assert_eq!(flow.advance(5.5, 0.8), LogoutStep::Wait);
        assert_eq!(flow.advance(6.0, 0.8), LogoutStep::Wait);
        assert!(matches!(flow, LogoutFlow::Success { .. }));
        assert_eq!(flow.advance(6.5, 0.8), LogoutStep::Wait);
        assert_eq!(flow.advance(7.0, 0.8), LogoutStep::Logout);
        assert!(!flow.is_open());
    }

    #[test]
    fn test_logout_cancel() {
        let mut flow = LogoutFlow::default();
        flow.request();
        flow.cancel();
        assert!(!flow.is_open());
    }
}
