//! WordGloss desktop library entry point.
//!
//! Exposes a `run` helper so the binary can launch the UI without
//! duplicating initialization logic.

mod app;
/// Backend worker + protocol types used by the UI and headless tests.
pub mod backend;

use app::GlossApp;
use eframe::egui;
use tracing_subscriber::EnvFilter;
use wordgloss_core::Config;

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("wordgloss_core=warn,wordgloss_gui=info"))
        .unwrap();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

/// Start the WordGloss UI with tracing enabled.
///
/// # Returns
/// The result of `eframe::run_native`.
///
/// # Errors
/// Propagates any `eframe` initialization or runtime error.
pub fn run() -> eframe::Result<()> {
    init_tracing();

    let config = Config::from_env();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(app::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(app::MIN_WINDOW_SIZE)
            .with_title("WordGloss"),
        ..Default::default()
    };

    eframe::run_native(
        "WordGloss",
        options,
        Box::new(|_cc| Ok(Box::new(GlossApp::new(config)))),
    )
}
