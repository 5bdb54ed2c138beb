//! Directions view rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

use crate::content;

use super::colors;

/// Draws the venue info card and maps link.
pub fn draw_directions(frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Back hint
            Constraint::Length(8), // Venue info card
            Constraint::Min(0),    // Filler
        ])
        .split(area);

    let back_hint = Paragraph::new(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("✦", Style::default().fg(colors::PRIMARY)),
        Span::styled(" ", Style::default()),
        Span::styled("Esc", Style::default().fg(colors::KEY).bold()),
        Span::styled(" to go back", Style::default().fg(colors::MUTED)),
    ]));
    frame.render_widget(back_hint, chunks[0]);

    let info_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::PRIMARY))
        .border_set(symbols::border::ROUNDED)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("⬢", Style::default().fg(colors::PRIMARY)),
            Span::styled(" Directions ", Style::default().fg(Color::White).bold()),
        ]))
        .padding(Padding::horizontal(1));

    let info_content = vec![
        Line::from(vec![
            Span::styled("  Venue     ", Style::default().fg(colors::MUTED)),
            Span::styled(content::VENUE, Style::default().fg(Color::White).bold()),
        ]),
        Line::from(vec![
            Span::styled("  Dates     ", Style::default().fg(colors::MUTED)),
            Span::styled(content::DATES, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Note      ", Style::default().fg(colors::MUTED)),
            Span::styled(content::VENUE_NOTE, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Maps      ", Style::default().fg(colors::MUTED)),
            Span::styled(
                content::MAPS_LINK,
                Style::default().fg(colors::SECONDARY),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled("c", Style::default().fg(colors::KEY).bold()),
            Span::styled(
                " copy the maps link to your clipboard",
                Style::default().fg(colors::MUTED),
            ),
        ]),
    ];

    let info = Paragraph::new(info_content).block(info_block);
    frame.render_widget(info, chunks[1]);
}
