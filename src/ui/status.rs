//! Status bar and commands bar rendering.

use ratatui::{
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, View};

use super::colors;

/// Draws the commands bar showing available actions for current view.
pub fn draw_commands_bar(frame: &mut Frame, area: Rect, app: &App) {
    let commands = get_commands_for_view(&app.current_view);

    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default())];

    for (i, (key, desc)) in commands.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(colors::BORDER)));
        }
        spans.push(Span::styled(*key, Style::default().fg(colors::KEY).bold()));
        spans.push(Span::styled(" ", Style::default()));
        spans.push(Span::styled(*desc, Style::default().fg(colors::MUTED)));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(colors::BORDER));

    let commands_widget = Paragraph::new(Line::from(spans)).block(block);

    frame.render_widget(commands_widget, area);
}

/// Returns the list of commands available for a given view.
fn get_commands_for_view(view: &View) -> Vec<(&'static str, &'static str)> {
    match view {
        View::Home => vec![
            ("m", "navigation"),
            ("1-5", "pages"),
            ("Enter", "gallery"),
            ("?", "help"),
            ("q", "quit"),
        ],
        View::Gallery => vec![
            ("j/k", "navigate"),
            ("Enter", "lightbox"),
            ("m", "navigation"),
            ("Esc", "back"),
            ("?", "help"),
            ("q", "quit"),
        ],
        View::Menu => vec![
            ("Tab", "function"),
            ("f", "filter"),
            ("j/k", "navigate"),
            ("m", "navigation"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
        View::Itinerary => vec![
            ("j/k", "navigate"),
            ("m", "navigation"),
            ("Esc", "back"),
            ("?", "help"),
            ("q", "quit"),
        ],
        View::Directions => vec![
            ("c", "copy link"),
            ("m", "navigation"),
            ("Esc", "back"),
            ("?", "help"),
            ("q", "quit"),
        ],
        View::Drawer => vec![("j/k", "navigate"), ("Enter", "go"), ("Esc", "close")],
        View::Lightbox => vec![("j/k", "next/prev"), ("Esc", "close"), ("q", "quit")],
    }
}

/// Draws the status bar at the bottom (for messages).
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = if let Some(status) = &app.status {
        let style = if status.is_error {
            Style::default().fg(colors::ERROR)
        } else {
            Style::default().fg(colors::SUCCESS)
        };
        (format!(" {} ", status.text), style)
    } else {
        (
            format!(" {}", crate::content::TAGLINE),
            Style::default().fg(colors::MUTED),
        )
    };

    let status = Paragraph::new(text).style(style);
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_advertises_a_way_out() {
        for view in [
            View::Home,
            View::Gallery,
            View::Menu,
            View::Itinerary,
            View::Directions,
            View::Drawer,
            View::Lightbox,
        ] {
            let commands = get_commands_for_view(&view);
            assert!(
                commands.iter().any(|(key, _)| *key == "q" || *key == "Esc"),
                "{view:?} offers neither quit nor close"
            );
        }
    }
}
