mod app;
mod color;
mod renderer;
mod shared;
mod ui;
mod utils;

use anyhow::Result;
use clap::Parser;

use crate::app::App;

/// HSV color wheel for truecolor terminals.
///
/// Ctrl+R toggles between the value gradient and the saturation gradient,
/// Ctrl+C quits.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {}

fn main() -> Result<()> {
    utils::logger::init();

    let _cli = Cli::parse();

    // Advertise truecolor before the screen comes up so the terminal does
    // not down-sample the palette.
    std::env::set_var("COLORTERM", "truecolor");

    // Reset terminal state a previous crash may have left behind.
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen
    );

    let mut app = App::new()?;
    let result = app.run();
    if let Err(e) = &result {
        utils::logger::error(&format!("event loop failed: {}", e));
    }
    result.map_err(Into::into)
}
