//! Wedding announcement TUI
//!
//! A terminal user interface announcing a single wedding event: a live
//! countdown, a photo gallery, the menus, the itinerary, and directions.
//! Run with: wedtui [-t|--target <RFC3339>]

mod app;
mod constants;
mod content;
mod countdown;
mod event;
mod ui;

use std::env;

use anyhow::{Context, Result};

use crate::app::App;
use crate::event::EventHandler;

/// Parses command line arguments.
///
/// Supports:
/// - `-t <RFC3339>` or `--target <RFC3339>` to override the countdown target
/// - `-h` or `--help` to show usage
///
/// Returns Some(target) if an override was specified, None otherwise.
fn parse_args() -> Option<String> {
    let args: Vec<String> = env::args().collect();

    // Simple argument parsing using iterator
    let mut args_iter = args.iter().skip(1); // Skip program name

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-t" | "--target" => {
                // Get the next argument as the target instant
                if let Some(target) = args_iter.next() {
                    return Some(target.clone());
                } else {
                    eprintln!("Error: --target requires an RFC 3339 instant argument");
                    std::process::exit(1);
                }
            }
            "-h" | "--help" => {
                println!("wedtui - Wedding announcement TUI");
                println!();
                println!("Usage: wedtui [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -t, --target <RFC3339>  Count down to this instant instead of the wedding");
                println!("  -h, --help              Show this help message");
                println!();
                println!("The target must carry an explicit UTC offset, e.g.");
                println!("  wedtui --target 2026-02-10T23:00:00+05:30");
                std::process::exit(0);
            }
            other => {
                eprintln!("Error: Unknown argument '{}'", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    None
}

/// Entry point for the application.
///
/// The countdown target is parsed before the terminal is initialized so
/// a bad target fails fast with a readable error instead of garbling
/// the screen.
fn main() -> Result<()> {
    // Parse command line arguments
    let target = parse_args();

    // Create the application (parses the countdown target)
    let app = App::new(target)?;

    // Initialize the terminal
    let terminal = ratatui::init();

    // Run the application
    let result = run_app(terminal, app);

    // Restore the terminal to its original state
    ratatui::restore();

    // Return the result
    result
}

/// Main application loop.
///
/// This function runs the TUI event loop:
/// 1. Draw the current UI state
/// 2. Handle user input events and the once-per-second tick
/// 3. Update application state
/// 4. Repeat until the user quits
fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    // Create the event handler (owns the tick cadence; both die with
    // this loop, so no timer outlives the display it updates)
    let mut event_handler = EventHandler::new();

    // Main loop
    loop {
        // Draw the UI
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw UI")?;

        // Poll for a key event or a countdown tick
        let event = event_handler.next()?;

        // Handle events (keyboard input, ticks)
        if let Some(action) = event {
            // Process the event and check if we should quit
            if app.handle_event(action)? {
                break;
            }
        }
    }

    Ok(())
}
