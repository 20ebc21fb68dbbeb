//! Gomoku GUI
//!
//! A graphical interface for playing Gomoku against another player or an agent.

use std::error::Error;

use gomoku::config::load_settings;
use gomoku::game::GameController;
use gomoku::ui::GomokuApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gomoku=info")))
        .init();

    let settings = load_settings()?;
    let agent = gomoku::agent::from_settings(&settings)?;
    let controller = GameController::new(agent).with_agent_delay(settings.agent_delay());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, controller)))),
    )?;
    Ok(())
}
