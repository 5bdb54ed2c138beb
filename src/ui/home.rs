//! Home view rendering: the countdown hero.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::content;
use crate::countdown::CountdownState;

use super::colors;

const TILE_LABELS: [&str; 4] = ["Days", "Hours", "Minutes", "Seconds"];

/// Formats the four countdown tiles for a given state.
///
/// `Pending` renders placeholders so the display never flashes an
/// "already happened" zero before the first tick; `Elapsed` renders
/// true zeros. Days widen past two digits as needed.
fn tile_values(state: CountdownState) -> [String; 4] {
    match state {
        CountdownState::Pending => ["--", "--", "--", "--"].map(String::from),
        CountdownState::Counting(r) => [
            format!("{:02}", r.days),
            format!("{:02}", r.hours),
            format!("{:02}", r.minutes),
            format!("{:02}", r.seconds),
        ],
        CountdownState::Elapsed => ["00", "00", "00", "00"].map(String::from),
    }
}

/// Draws the home view: names, dates, countdown tiles, and hints.
pub fn draw_home(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Couple names
            Constraint::Length(1), // Dates
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Countdown tiles
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Tagline / elapsed banner
            Constraint::Min(0),    // Hints
        ])
        .split(area);

    let names = Paragraph::new(Line::from(vec![
        Span::styled("❦  ", Style::default().fg(colors::ACCENT)),
        Span::styled(
            content::COUPLE,
            Style::default().fg(colors::PRIMARY).bold(),
        ),
        Span::styled("  ❦", Style::default().fg(colors::ACCENT)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(names, chunks[1]);

    let dates = Paragraph::new(Span::styled(
        content::DATES,
        Style::default().fg(colors::MUTED).italic(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(dates, chunks[2]);

    draw_countdown_tiles(frame, chunks[4], app);

    let banner = match app.countdown.state() {
        CountdownState::Elapsed => Span::styled(
            "The celebrations have begun!",
            Style::default().fg(colors::SUCCESS).bold(),
        ),
        _ => Span::styled(content::TAGLINE, Style::default().fg(colors::MUTED)),
    };
    frame.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        chunks[6],
    );

    let target_line = format!(
        "Counting down to {}",
        app.countdown.target().format("%B %-d, %Y · %-I:%M %p (UTC%:z)")
    );
    let hints = Paragraph::new(vec![
        Line::from(Span::styled(
            target_line,
            Style::default().fg(colors::MUTED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("m", Style::default().fg(colors::KEY).bold()),
            Span::styled(" navigation  ", Style::default().fg(colors::MUTED)),
            Span::styled("1-5", Style::default().fg(colors::KEY).bold()),
            Span::styled(" jump to a page  ", Style::default().fg(colors::MUTED)),
            Span::styled("Enter", Style::default().fg(colors::KEY).bold()),
            Span::styled(" gallery  ", Style::default().fg(colors::MUTED)),
            Span::styled("?", Style::default().fg(colors::KEY).bold()),
            Span::styled(" help", Style::default().fg(colors::MUTED)),
        ]),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hints, chunks[7]);
}

/// Draws the four Days/Hours/Minutes/Seconds tiles, centered.
fn draw_countdown_tiles(frame: &mut Frame, area: Rect, app: &App) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(13),
            Constraint::Length(2),
            Constraint::Length(13),
            Constraint::Length(2),
            Constraint::Length(13),
            Constraint::Length(2),
            Constraint::Length(13),
            Constraint::Min(0),
        ])
        .split(area);

    let values = tile_values(app.countdown.state());
    let tile_areas = [row[1], row[3], row[5], row[7]];

    for ((value, label), tile_area) in values.iter().zip(TILE_LABELS).zip(tile_areas) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER))
            .border_set(symbols::border::ROUNDED)
            .title(Line::from(vec![
                Span::styled(" ", Style::default()),
                Span::styled(label, Style::default().fg(colors::MUTED)),
                Span::styled(" ", Style::default()),
            ]));

        let tile = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                value.clone(),
                Style::default().fg(colors::SECONDARY).bold(),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block);

        frame.render_widget(tile, tile_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::countdown::RemainingTime;

    #[test]
    fn pending_renders_placeholders() {
        assert_eq!(
            tile_values(CountdownState::Pending),
            ["--", "--", "--", "--"].map(String::from)
        );
    }

    #[test]
    fn counting_zero_pads_to_two_digits() {
        let state = CountdownState::Counting(RemainingTime {
            days: 5,
            hours: 7,
            minutes: 30,
            seconds: 9,
        });
        assert_eq!(
            tile_values(state),
            ["05", "07", "30", "09"].map(String::from)
        );
    }

    #[test]
    fn day_field_widens_past_two_digits() {
        let state = CountdownState::Counting(RemainingTime {
            days: 123,
            hours: 0,
            minutes: 0,
            seconds: 0,
        });
        assert_eq!(tile_values(state)[0], "123");
    }

    #[test]
    fn elapsed_renders_zeros_not_placeholders() {
        assert_eq!(
            tile_values(CountdownState::Elapsed),
            ["00", "00", "00", "00"].map(String::from)
        );
    }
}
