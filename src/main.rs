use eframe::egui;
use launch_dash::app::LaunchDashApp;
use launch_dash::config::DashConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashConfig::from_args(std::env::args_os().skip(1));
    log::debug!("Starting with {config:?}");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(config)))),
    )
}
