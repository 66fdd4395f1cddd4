use sleep_protocol::SleepApp;
use sleep_protocol::auth::{LoginFlow, LogoutFlow};
use sleep_protocol::game::{AudioSettings, GamePhase};
use sleep_protocol::model::{AppState, Tab, Theme};
use sleep_protocol::navigation::NavEvent;
use sleep_protocol::progress::local_date_label;
use sleep_protocol::storage::{
    AUTH_KEY, AudioRepo, FirstAccessRepo, LocalStore, ProgressRepo, Repository, ThemeRepo,
};

fn logged_in_app() -> SleepApp {
    let mut app = SleepApp::with_store(LocalStore::new());
    app.tick(0.0);
    app.login_form.email = "cliente713@sonomilitar.com".to_string();
    app.login_form.password = "c713".to_string();
    app.submit_login(1.0);
    app.tick(2.0);
    assert_eq!(app.state, AppState::Home);
    app
}

#[test]
fn login_waits_for_the_delay_before_entering() {
    let mut app = SleepApp::with_store(LocalStore::new());
    assert_eq!(app.state, AppState::Login);

    app.login_form.email = "cliente713@sonomilitar.com".to_string();
    app.login_form.password = "c713".to_string();
    app.submit_login(1.0);
    app.tick(1.5);
    assert!(app.login_flow.is_busy());
    assert_eq!(app.state, AppState::Login);

    app.tick(2.0);
    assert_eq!(app.state, AppState::Home);
    assert!(app.auth.is_authenticated());
    assert!(app.store().get(AUTH_KEY).is_some());
}

#[test]
fn wrong_password_shows_error_and_stays_on_login() {
    let mut app = SleepApp::with_store(LocalStore::new());
    app.login_form.email = "cliente713@sonomilitar.com".to_string();
    app.login_form.password = "errada".to_string();
    app.submit_login(0.0);
    app.tick(1.0);

    assert_eq!(app.login_flow, LoginFlow::Failed);
    assert_eq!(app.state, AppState::Login);
    assert!(!app.auth.is_authenticated());
}

#[test]
fn session_survives_restart() {
    let app = logged_in_app();
    let restarted = SleepApp::with_store(app.store.clone());
    assert_eq!(restarted.state, AppState::Home);
}

#[test]
fn member_since_shows_the_first_access_date() {
    let fresh = SleepApp::with_store(LocalStore::new());
    assert_eq!(fresh.member_since(), None);

    let app = logged_in_app();
    let first = FirstAccessRepo::load(app.store()).expect("first access stamped on login");
    assert_eq!(app.member_since(), Some(local_date_label(first)));

    // un segundo login no mueve la fecha
    let mut again = SleepApp::with_store(app.store.clone());
    again.logout();
    again.login_form.email = "cliente713@sonomilitar.com".to_string();
    again.login_form.password = "c713".to_string();
    again.submit_login(100.0);
    again.tick(101.0);
    assert_eq!(again.state, AppState::Home);
    assert_eq!(FirstAccessRepo::load(again.store()), Some(first));
    assert_eq!(again.member_since(), Some(local_date_label(first)));
}

#[test]
fn watching_lessons_persists_progress() {
    let mut app = logged_in_app();
    app.open_module(0, 0);
    assert_eq!(app.state, AppState::Module);
    assert!(ProgressRepo::load(app.store()).is_none());

    app.navigate(NavEvent::SelectLesson(2));
    app.navigate(NavEvent::NextLesson);

    let records = ProgressRepo::load(app.store()).unwrap_or_default();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].current_lesson, 3);
    assert_eq!(records[0].completed_lessons, 4);

    let rows = app.continue_rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].current_lesson, 3);
}

#[test]
fn switching_tabs_leaves_the_module() {
    let mut app = logged_in_app();
    app.open_module(1, 0);
    app.go_tab(Tab::Continue);
    assert_eq!(app.state, AppState::Continue);
    assert!(app.session.is_none());
}

#[test]
fn reset_clears_progress_and_shows_start_screen() {
    let mut app = logged_in_app();
    app.open_module(0, 0);
    app.navigate(NavEvent::SelectLesson(1));
    app.go_tab(Tab::Continue);

    app.confirm_reset = true;
    app.reset_all_progress();
    assert!(app.show_start_screen);
    assert!(!app.confirm_reset);
    assert!(ProgressRepo::load(app.store()).is_none());
    assert!(app.continue_rows().is_empty());

    app.start_from_beginning();
    assert_eq!(app.state, AppState::Module);
    assert!(!app.show_start_screen);
    assert!(ProgressRepo::load(app.store()).is_none());
}

#[test]
fn logout_keeps_progress_and_theme() {
    let mut app = logged_in_app();
    app.toggle_theme();
    app.open_module(0, 0);
    app.navigate(NavEvent::SelectLesson(0));

    app.request_logout();
    assert_eq!(app.logout_flow, LogoutFlow::Confirm);
    app.confirm_logout(10.0);
    app.tick(11.0);
    assert!(matches!(app.logout_flow, LogoutFlow::Success { .. }));
    app.tick(12.0);

    assert_eq!(app.state, AppState::Login);
    assert!(!app.auth.is_authenticated());
    assert!(app.store().get(AUTH_KEY).is_none());
    assert_eq!(ThemeRepo::load(app.store()), Some(Theme::Light));
    assert!(ProgressRepo::load(app.store()).is_some());
}

#[test]
fn cancelled_logout_stays_signed_in() {
    let mut app = logged_in_app();
    app.request_logout();
    app.cancel_logout();
    app.tick(20.0);
    assert_eq!(app.state, AppState::Home);
    assert!(!app.logout_flow.is_open());
}

#[test]
fn saved_game_is_only_restored_on_request() {
    let mut app = logged_in_app();
    app.open_screen(AppState::Game);
    assert_eq!(app.game.phase(), GamePhase::Welcome);

    app.start_game();
    for t in 3..8 {
        app.tick(t as f64);
    }
    let played = app.game.state().clone();
    assert_ne!((played.hour, played.minute), (7, 0));
    app.save_game();

    app.go_tab(Tab::More);
    app.open_screen(AppState::Game);
    assert_eq!(app.game.phase(), GamePhase::Welcome);
    assert!(app.has_saved_game());

    app.load_saved_game();
    assert_eq!(app.game.phase(), GamePhase::Playing);
    assert!(!app.game.state().is_playing);
    assert_eq!(app.game.state().hour, played.hour);
    assert_eq!(app.game.state().minute, played.minute);
}

#[test]
fn mute_toggle_keeps_saved_volume() {
    let mut store = LocalStore::new();
    let saved = AudioSettings {
        is_muted: false,
        volume: 0.3,
    };
    AudioRepo::save(&mut store, &saved).expect("audio settings saved");

    let mut app = SleepApp::with_store(store);
    app.toggle_mute();

    let audio = AudioRepo::load(app.store()).expect("audio settings persisted");
    assert!(audio.is_muted);
    assert_eq!(audio.volume, 0.3);
}
