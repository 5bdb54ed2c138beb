//! Header rendering with ASCII art monogram.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::countdown::CountdownState;

use super::colors;

/// Draws the header with the couple's monogram and event info panel.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let border_style = Style::default().fg(colors::BORDER);
    let dim_style = Style::default().fg(Color::Rgb(107, 84, 58));
    let muted_style = Style::default().fg(colors::MUTED);
    let logo_style = Style::default().fg(colors::SECONDARY).bold();

    // Countdown state indicator
    let status = match app.countdown.state() {
        CountdownState::Pending => vec![
            Span::styled("┃", border_style),
            Span::styled(
                " ◈ ",
                Style::default()
                    .fg(colors::WARNING)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
            Span::styled("WAITING", Style::default().fg(colors::WARNING).bold()),
            Span::styled(" ┃", border_style),
        ],
        CountdownState::Counting(_) => vec![
            Span::styled("┃", border_style),
            Span::styled(" ◈ ", Style::default().fg(colors::SUCCESS)),
            Span::styled("COUNTING", Style::default().fg(colors::SUCCESS).bold()),
            Span::styled(" ┃", border_style),
        ],
        CountdownState::Elapsed => vec![
            Span::styled("┃", border_style),
            Span::styled(" ◈ ", Style::default().fg(colors::PRIMARY)),
            Span::styled("TODAY", Style::default().fg(colors::PRIMARY).bold()),
            Span::styled(" ┃", border_style),
        ],
    };

    // Top border with the countdown indicator
    let line0 = Line::from(vec![
        Span::styled("┏", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┓", Style::default().fg(colors::PRIMARY)),
        Span::styled("░▒▓", dim_style),
        status[0].clone(),
        status[1].clone(),
        status[2].clone(),
        status[3].clone(),
        Span::styled("▓▒░", dim_style),
        Span::styled("╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍╍", dim_style),
    ]);

    // Monogram line 1 + info panel top
    let line1 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(" ██▀▀█▄ ▄█▄█▄ ██▀▀█▄  ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╭───────────────────────────────╮", border_style),
    ]);

    // Monogram line 2 + WEDDING::ANNOUNCEMENT title
    let line2 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(" ██▄▄█▀ ▀███▀ ██  ██  ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │ ", border_style),
        Span::styled("◆", Style::default().fg(colors::ACCENT)),
        Span::styled(" PIYUSH", Style::default().fg(colors::PRIMARY).bold()),
        Span::styled("::", muted_style),
        Span::styled("DHAWAL", Style::default().fg(colors::KEY).bold()),
        Span::styled(" ▸▸ ", muted_style),
        Span::styled("WEDTUI", Style::default().fg(colors::ACCENT).bold()),
        Span::styled(" ◆  │", border_style),
    ]);

    // Monogram line 3 + info tags
    let line3 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled(" ██      ▀█▀  ██▄▄█▀  ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  │ ", border_style),
        Span::styled("▪", Style::default().fg(colors::SECONDARY)),
        Span::styled(" PUSHKAR ", Style::default().fg(colors::MUTED)),
        Span::styled("│", dim_style),
        Span::styled(" ▪", Style::default().fg(colors::SUCCESS)),
        Span::styled(" FEB 9–10 ", Style::default().fg(colors::MUTED)),
        Span::styled("│", dim_style),
        Span::styled(" ▪", Style::default().fg(colors::WARNING)),
        Span::styled(format!(" v{} │", env!("CARGO_PKG_VERSION")), border_style),
    ]);

    // Monogram tail + info panel bottom
    let line4 = Line::from(vec![
        Span::styled("┃", Style::default().fg(colors::ACCENT)),
        Span::styled("              ▀▀▀▀    ", logo_style),
        Span::styled("┃", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╰───────────────────────────────╯", border_style),
    ]);

    // Bottom border + date badge
    let line5 = Line::from(vec![
        Span::styled("┗", Style::default().fg(colors::ACCENT)),
        Span::styled("━━━━━━━━━━━━━━━━━━━━━━━", border_style),
        Span::styled("┛", Style::default().fg(colors::PRIMARY)),
        Span::styled("  ╾╢", border_style),
        Span::styled(" ⬢  ", Style::default().fg(colors::SECONDARY)),
        Span::styled(
            crate::content::DATES,
            Style::default().fg(colors::SECONDARY).bold(),
        ),
        Span::styled(" ╟╼", border_style),
    ]);

    let header = Paragraph::new(vec![line0, line1, line2, line3, line4, line5]);
    frame.render_widget(header, area);
}
