mod cli;
mod config;
mod error;
mod grid;
mod render;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use clipboard::{Clipboard, Platform};
use config::Settings;
use error::Result;
use std::process;

fn show_clipboard(platform: &Platform, clipboard: &dyn Clipboard) {
    println!("backend: {}", clipboard.name());
    println!("available: {}", clipboard.is_available());
    println!("os: {:?}", platform.os);
    println!("wsl: {}", platform.wsl);
    println!("display: {}", platform.display);
    println!("dev clipboard: {}", platform.dev_clipboard);
    println!("tools: {}", platform.executables.join(", "));
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(&cli.shared)?;

    let platform = Platform::current();
    let clipboard = settings.backend.open(&platform, settings.selection);
    if settings.verbose {
        ui::info_message(&format!("Clipboard backend: {}", clipboard.name()));
    }

    match cli.command.unwrap_or(Commands::Render { input: None }) {
        Commands::Render { input } => render::execute(input.as_deref(), &settings, &*clipboard),
        Commands::Grid { columns, rows } => grid::execute(columns, rows, &settings, &*clipboard),
        Commands::Clipboard => {
            show_clipboard(&platform, &*clipboard);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        ui::error_message(&err.user_message());
        process::exit(1);
    }
}
