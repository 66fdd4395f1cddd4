pub mod app;
pub mod auth;
pub mod calculator;
pub mod data;
pub mod game;
pub mod model;
pub mod navigation;
pub mod notifications;
pub mod progress;
pub mod storage;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::SleepApp;

/// Arranque en navegador: monta la app en el canvas `the_canvas_id`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No hay documento donde montar la app");
            return;
        };
        let canvas = match document
            .get_element_by_id("the_canvas_id")
            .map(|el| el.dyn_into::<web_sys::HtmlCanvasElement>())
        {
            Some(Ok(canvas)) => canvas,
            _ => {
                log::error!("No se encontró el canvas the_canvas_id");
                return;
            }
        };

        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(SleepApp::from_storage(cc.storage)))),
            )
            .await;
        if let Err(e) = result {
            log::error!("No se pudo iniciar la app: {e:?}");
        }
    });
}
