//! HueFlow - color ramp editor for map layers

mod app;
mod logging_setup;

use anyhow::Result;
use hueflow_ui::UserConfig;

fn main() -> Result<()> {
    let config = UserConfig::load();
    let _log_guard = logging_setup::init(&config.log)?;

    tracing::info!("Starting HueFlow {}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("HueFlow")
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "HueFlow",
        options,
        Box::new(|cc| Ok(Box::new(app::HueFlowApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Window error: {e}"))?;

    tracing::info!("HueFlow exited");
    Ok(())
}
