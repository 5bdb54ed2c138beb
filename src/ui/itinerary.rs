//! Itinerary view rendering: the two-day timeline.

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

/// Draws the event timeline.
pub fn draw_itinerary(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Section hint
            Constraint::Min(0),    // Timeline
        ])
        .split(area);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("✦", Style::default().fg(colors::WARNING)),
        Span::styled(" ", Style::default()),
        Span::styled("Itinerary", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            " - Two days of ceremonies, music and feasts",
            Style::default().fg(colors::MUTED),
        ),
    ]));
    frame.render_widget(hint, chunks[0]);

    let items: Vec<ListItem> = content::ITINERARY
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_selected = app.itinerary_state.selected() == Some(idx);

            // Mark the first entry of each day
            let day_changed = idx == 0 || content::ITINERARY[idx - 1].day != entry.day;

            let style = if is_selected {
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
            } else {
                Style::default()
            };

            let day_span = if day_changed {
                Span::styled(
                    format!(" {:<7}", entry.day),
                    Style::default().fg(colors::WARNING).bold(),
                )
            } else {
                Span::styled("        ", style)
            };

            let content = Line::from(vec![
                day_span,
                Span::styled(
                    if is_selected { "●" } else { "○" },
                    Style::default().fg(if is_selected {
                        colors::WARNING
                    } else {
                        colors::BORDER
                    }),
                ),
                Span::styled(" ", style),
                Span::styled(
                    format!("{:>8}", entry.time),
                    style.fg(if is_selected {
                        colors::SELECTION_TEXT
                    } else {
                        colors::MUTED
                    }),
                ),
                Span::styled("  ", style),
                Span::styled(entry.title, style.add_modifier(Modifier::BOLD)),
            ]);

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .border_set(symbols::border::ROUNDED)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(
                        format!("{}", content::ITINERARY.len()),
                        Style::default().fg(colors::SECONDARY).bold(),
                    ),
                    Span::styled(" events ", Style::default().fg(Color::White)),
                ]))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default())
        .highlight_symbol("");

    frame.render_stateful_widget(list, chunks[1], &mut app.itinerary_state.clone());
}
