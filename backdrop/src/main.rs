use backdrop::app::BackdropApp;
use backdrop::ui::backdrop::Backdrop;
use backdrop::core::Result;
use backdrop::debug;
use lib_core::{core_config, init_config};

const APP_NAME: &str = "Floating Backdrop";
const APP_WIDTH: f32 = 1200.0;
const APP_HEIGHT: f32 = 800.0;

fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let debug_config = debug::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting {}", APP_NAME);

    if let Err(e) = init_config() {
        tracing::warn!(error = %e, "Invalid backdrop configuration, using defaults");
    }
    let config = core_config().clone();
    let show_debug_ui = debug_config.show_debug_ui;
    let backdrop = Backdrop::new(&config, shared::default_catalog())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([APP_WIDTH, APP_HEIGHT])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(BackdropApp::new(cc, &config, backdrop, show_debug_ui)))),
    )?;

    tracing::info!("Backdrop closed");
    Ok(())
}
