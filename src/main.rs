#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use sleep_protocol::SleepApp;
    use sleep_protocol::data::AppConfig;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::embedded();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(&config.window_title),
        ..Default::default()
    };
    log::info!("Iniciando {}", config.window_title);

    eframe::run_native(
        &config.window_title,
        options,
        Box::new(|cc| Ok(Box::new(SleepApp::from_storage(cc.storage)))),
    )
}

// En web el arranque vive en `sleep_protocol::start`.
#[cfg(target_arch = "wasm32")]
fn main() {}
