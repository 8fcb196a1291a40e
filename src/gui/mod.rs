//! GUI for the notice board using Slint
//!
//! One main window with the notice input, the colored notice list, and the
//! three command buttons, plus the message/confirmation dialogs.

pub mod dialogs;
pub mod main_window;

use anyhow::Result;

use crate::config::AppConfig;

// Include the generated Slint code
slint::include_modules!();

/// Run the application in GUI mode
pub fn run_gui(config: &AppConfig) -> Result<()> {
    main_window::run_main_window(config)
}
