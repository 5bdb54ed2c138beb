//! Menu view rendering: function tabs, course filter, and item list.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

use crate::app::App;
use crate::content::{Course, Function};

use super::colors;
use super::empty::draw_empty_state;

/// Draws the menu browser.
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Section hint
            Constraint::Length(1), // Function tabs
            Constraint::Length(1), // Course filter
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Item list
        ])
        .split(area);

    let hint = Paragraph::new(Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled("✦", Style::default().fg(colors::WARNING)),
        Span::styled(" ", Style::default()),
        Span::styled("Menu", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            " - Select a function to view its curated menu",
            Style::default().fg(colors::MUTED),
        ),
    ]));
    frame.render_widget(hint, chunks[0]);

    draw_function_tabs(frame, chunks[1], app);
    draw_course_filter(frame, chunks[2], app);

    let items = app.visible_menu_items();

    // Handle empty state
    if items.is_empty() {
        draw_empty_state(
            frame,
            chunks[4],
            "Nothing on this menu",
            "Press 'f' to change the course filter",
            "Not every function serves every course",
        );
        return;
    }

    let list_items: Vec<ListItem> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let is_selected = app.menu_state.selected() == Some(idx);

            let style = if is_selected {
                Style::default()
                    .bg(colors::SELECTION)
                    .fg(colors::SELECTION_TEXT)
            } else {
                Style::default()
            };

            let content = Line::from(vec![
                Span::styled(format!("{:>3}", idx + 1), Style::default().fg(colors::ACCENT)),
                Span::styled("  ", style),
                Span::styled(
                    "◆",
                    if is_selected {
                        Style::default().fg(colors::WARNING)
                    } else {
                        Style::default().fg(colors::PRIMARY)
                    },
                ),
                Span::styled(" ", style),
                Span::styled(item.name, style.add_modifier(Modifier::BOLD)),
                Span::styled("  ", style),
                Span::styled(
                    format!("{} • {}", item.function.label(), item.course.label()),
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

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .border_set(symbols::border::ROUNDED)
                .title(Line::from(vec![
                    Span::styled(" ", Style::default()),
                    Span::styled(
                        format!("{}", items.len()),
                        Style::default().fg(colors::SECONDARY).bold(),
                    ),
                    Span::styled(" dishes ", Style::default().fg(Color::White)),
                ]))
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default())
        .highlight_symbol("");

    frame.render_stateful_widget(list, chunks[4], &mut app.menu_state.clone());
}

/// Draws the wedding-function tab pills.
fn draw_function_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![Span::styled("   ", Style::default())];

    for (i, function) in Function::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        let active = *function == app.function();
        let style = if active {
            Style::default()
                .bg(colors::SELECTION)
                .fg(colors::SELECTION_TEXT)
                .bold()
        } else {
            Style::default().fg(colors::MUTED)
        };
        spans.push(Span::styled(format!(" {} ", function.label()), style));
    }

    spans.push(Span::styled("   ", Style::default()));
    spans.push(Span::styled("Tab", Style::default().fg(colors::KEY).bold()));
    spans.push(Span::styled(
        " switch function",
        Style::default().fg(colors::MUTED),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draws the course filter pills.
fn draw_course_filter(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![Span::styled("   ", Style::default())];

    let all_style = if app.menu_course.is_none() {
        Style::default().fg(colors::SECONDARY).bold()
    } else {
        Style::default().fg(colors::MUTED)
    };
    spans.push(Span::styled(" all ", all_style));

    for course in Course::ALL {
        spans.push(Span::styled("  ", Style::default()));
        let active = app.menu_course == Some(course);
        let style = if active {
            Style::default().fg(colors::SECONDARY).bold()
        } else {
            Style::default().fg(colors::MUTED)
        };
        spans.push(Span::styled(format!(" {} ", course.label()), style));
    }

    spans.push(Span::styled("   ", Style::default()));
    spans.push(Span::styled("f", Style::default().fg(colors::KEY).bold()));
    spans.push(Span::styled(
        " cycle filter",
        Style::default().fg(colors::MUTED),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
