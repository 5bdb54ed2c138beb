//! Overlay rendering (navigation drawer, lightbox).

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, DRAWER_ROUTES};
use crate::constants::dialog;
use crate::content;

use super::colors;
use super::utils::centered_rect;

/// Draws the navigation drawer.
pub fn draw_drawer(frame: &mut Frame, app: &App) {
    let area = centered_rect(dialog::DRAWER_WIDTH, dialog::DRAWER_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    // Split area into title bar, list, and footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title hint
            Constraint::Min(0),    // Route list
            Constraint::Length(2), // Footer with commands
        ])
        .margin(1)
        .split(area);

    // Outer block
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::PRIMARY))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("☰", Style::default().fg(colors::ACCENT)),
            Span::styled(" Navigation ", Style::default().fg(Color::White).bold()),
        ]));

    frame.render_widget(block, area);

    // Title/hint
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Where to? ", Style::default().fg(colors::MUTED)),
        Span::styled(
            content::COUPLE,
            Style::default().fg(colors::SECONDARY).bold(),
        ),
    ]));
    frame.render_widget(hint, chunks[0]);

    // Build the route list
    let items: Vec<ListItem> = DRAWER_ROUTES
        .iter()
        .enumerate()
        .map(|(idx, (view, label))| {
            let is_selected = app.drawer_state.selected() == Some(idx);
            let is_current = app.previous_view == Some(*view);

            let style = if is_selected {
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
            } else {
                Style::default()
            };

            let current_marker = if is_current {
                Span::styled(" (current)", Style::default().fg(colors::SUCCESS))
            } else {
                Span::raw("")
            };

            let content = Line::from(vec![
                Span::styled(format!("{:>3}", idx + 1), Style::default().fg(colors::ACCENT)),
                Span::styled("  ", style),
                Span::styled(
                    if is_selected { "▸" } else { " " },
                    Style::default().fg(if is_current {
                        colors::SUCCESS
                    } else {
                        colors::PRIMARY
                    }),
                ),
                Span::styled(" ", style),
                Span::styled(*label, style.add_modifier(Modifier::BOLD)),
                current_marker,
            ]);

            ListItem::new(content).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default())
        .highlight_symbol("");

    frame.render_stateful_widget(list, chunks[1], &mut app.drawer_state.clone());

    // Footer with commands
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("j/k", Style::default().fg(colors::KEY).bold()),
        Span::styled(" navigate  ", Style::default().fg(colors::MUTED)),
        Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
        Span::styled(" go  ", Style::default().fg(colors::MUTED)),
        Span::styled("Esc", Style::default().fg(colors::KEY).bold()),
        Span::styled(" close", Style::default().fg(colors::MUTED)),
    ]));
    frame.render_widget(footer, chunks[2]);
}

/// Draws the full-screen photo lightbox.
pub fn draw_lightbox(frame: &mut Frame, app: &App) {
    let Some(photo) = app.selected_photo() else {
        return;
    };

    let area = centered_rect(dialog::LIGHTBOX_WIDTH, dialog::LIGHTBOX_HEIGHT, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let index = app.gallery_state.selected().unwrap_or(0);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::SECONDARY))
        .border_set(symbols::border::DOUBLE)
        .title(Line::from(vec![
            Span::styled(" ", Style::default()),
            Span::styled("❧", Style::default().fg(colors::SECONDARY)),
            Span::styled(" ", Style::default()),
            Span::styled(photo.caption, Style::default().fg(Color::White).bold()),
            Span::styled(
                format!(" ({}/{}) ", index + 1, content::PHOTOS.len()),
                Style::default().fg(colors::MUTED),
            ),
        ]))
        .padding(Padding::uniform(1));

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "╭──────────────────────────────╮",
            Style::default().fg(colors::BORDER),
        )),
        Line::from(Span::styled(
            "│          ❦  ❧  ❦             │",
            Style::default().fg(colors::SECONDARY),
        )),
        Line::from(Span::styled(
            "╰──────────────────────────────╯",
            Style::default().fg(colors::BORDER),
        )),
        Line::from(""),
        Line::from(Span::styled(
            photo.blurb,
            Style::default().fg(Color::White).italic(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            photo.credit,
            Style::default().fg(colors::MUTED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("j/k", Style::default().fg(colors::KEY).bold()),
            Span::styled(" next/previous  ", Style::default().fg(colors::MUTED)),
            Span::styled("Esc", Style::default().fg(colors::KEY).bold()),
            Span::styled(" close", Style::default().fg(colors::MUTED)),
        ]),
    ];

    let lightbox = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);

    frame.render_widget(lightbox, area);
}
