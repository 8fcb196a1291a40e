use anyhow::Result;

use noticeboard::config::AppConfig;
use noticeboard::gui;

fn main() -> Result<()> {
    let config = AppConfig::load();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.ui.log_level.as_str()),
    )
    .init();
    log_panics::init();

    log::info!("Starting {} {}", noticeboard::APP_NAME, noticeboard::VERSION);
    gui::run_gui(&config)
}
