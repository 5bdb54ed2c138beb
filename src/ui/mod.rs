//! UI rendering module.
//!
//! This module handles all the terminal UI rendering using Ratatui.
//! Each view is rendered by a separate submodule for clarity.

mod colors;
mod dialogs;
mod directions;
mod empty;
mod gallery;
mod header;
mod help;
mod home;
mod itinerary;
mod menu;
mod status;
mod utils;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::{App, View};
use crate::constants::layout;

// Re-export submodule draw functions for internal use
use dialogs::{draw_drawer, draw_lightbox};
use directions::draw_directions;
use gallery::draw_gallery;
use header::draw_header;
use help::draw_help_overlay;
use home::draw_home;
use itinerary::draw_itinerary;
use menu::draw_menu;
use status::{draw_commands_bar, draw_status_bar};

/// Main draw function - dispatches to specific view renderers.
pub fn draw(frame: &mut Frame, app: &App) {
    // Create the main layout: header, content, commands bar, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(layout::HEADER_HEIGHT),
            Constraint::Min(0), // Main content
            Constraint::Length(layout::COMMANDS_BAR_HEIGHT),
            Constraint::Length(layout::STATUS_BAR_HEIGHT),
        ])
        .split(frame.area());

    // Draw the header
    draw_header(frame, chunks[0], app);

    // Draw the main content based on current view
    match app.current_view {
        View::Home => draw_home(frame, chunks[1], app),
        View::Gallery => draw_gallery(frame, chunks[1], app),
        View::Menu => draw_menu(frame, chunks[1], app),
        View::Itinerary => draw_itinerary(frame, chunks[1], app),
        View::Directions => draw_directions(frame, chunks[1]),
        View::Drawer => {
            // Draw the underlying view first
            draw_underlying_view(frame, chunks[1], app);
            // Then draw the drawer on top
            draw_drawer(frame, app);
        }
        View::Lightbox => {
            // Draw the gallery in the background
            draw_gallery(frame, chunks[1], app);
            // Then draw the lightbox on top
            draw_lightbox(frame, app);
        }
    }

    // Draw the commands bar (shows available actions)
    draw_commands_bar(frame, chunks[2], app);

    // Draw the status bar (shows messages)
    draw_status_bar(frame, chunks[3], app);

    // Draw help overlay if enabled
    if app.show_help {
        draw_help_overlay(frame);
    }
}

/// Draws the view an overlay was opened over.
fn draw_underlying_view(frame: &mut Frame, area: Rect, app: &App) {
    match app.previous_view {
        Some(View::Gallery) => draw_gallery(frame, area, app),
        Some(View::Menu) => draw_menu(frame, area, app),
        Some(View::Itinerary) => draw_itinerary(frame, area, app),
        Some(View::Directions) => draw_directions(frame, area),
        _ => draw_home(frame, area, app),
    }
}
