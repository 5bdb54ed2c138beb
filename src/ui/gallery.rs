//! Gallery view rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::content;

use super::colors;

/// Draws the photo list.
pub fn draw_gallery(frame: &mut Frame, area: Rect, app: &App) {
    // Split into header hint and list
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Section hint
            Constraint::Min(0),    // List
        ])
        .split(area);

    // Draw section hint
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("✦", Style::default().fg(colors::WARNING)),
        Span::styled(" ", Style::default()),
        Span::styled("Gallery", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            " - Because beautiful moments pass & imagery lasts",
            Style::default().fg(colors::MUTED),
        ),
    ]));
    frame.render_widget(hint, chunks[0]);

    // Create list items from photos
    let items: Vec<ListItem> = content::PHOTOS
        .iter()
        .enumerate()
        .map(|(idx, photo)| {
            let is_selected = app.gallery_state.selected() == Some(idx);

            let number = format!("{:>3}", idx + 1);

            let style = if is_selected {
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
            } else {
                Style::default()
            };

            let content = Line::from(vec![
                Span::styled(number, Style::default().fg(colors::ACCENT)),
                Span::styled("  ", style),
                Span::styled(
                    "❧",
                    if is_selected {
                        Style::default().fg(colors::WARNING)
                    } else {
                        Style::default().fg(colors::PRIMARY)
                    },
                ),
                Span::styled(" ", style),
                Span::styled(photo.caption, style.add_modifier(Modifier::BOLD)),
                Span::styled("  ", style),
                Span::styled(
                    photo.credit,
                    style.fg(if is_selected {
                        colors::SELECTION_TEXT
                    } else {
                        colors::MUTED
                    }),
                ),
            ]);

            ListItem::new(content).style(style)
        })
        .collect();

    // Create the list widget
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .border_set(symbols::border::ROUNDED)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(
                        format!("{}", content::PHOTOS.len()),
                        Style::default().fg(colors::SECONDARY).bold(),
                    ),
                    Span::styled(" photos ", Style::default().fg(Color::White)),
                ]))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default()) // We handle highlighting in items
        .highlight_symbol("");

    frame.render_stateful_widget(list, chunks[1], &mut app.gallery_state.clone());
}
