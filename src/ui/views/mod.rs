pub mod calculator;
pub mod continue_watching;
pub mod game;
pub mod home;
pub mod info;
pub mod login;
pub mod module;
pub mod more;
pub mod settings;
