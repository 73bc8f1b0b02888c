mod app;
mod commands;
mod config;
mod square_renderer;

use anyhow::Result;

use quadpick_engine::logging::init_logging;
use quadpick_engine::window::Runtime;

use crate::app::SquareApp;
use crate::config::StudioConfig;

fn main() -> Result<()> {
    let config = StudioConfig::default();
    init_logging(config.logging.clone());
    let config = config.sanitized();

    println!();
    println!("  quadpick");
    println!("  click          hit-test the square");
    println!("  1 / 2          screen-space / NDC-space test");
    println!("  Esc / Enter    open / close the menu (Q quits from the menu)");
    println!();

    Runtime::run(
        config.runtime.clone(),
        config.gpu.clone(),
        SquareApp::new(config),
    )
}
