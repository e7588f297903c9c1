use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, CurrentScreen};
use crate::interfaces::tui::constants::colors;

/// Draw the navigation bar: screen title plus the shuffle button
///
/// Records the button area in `app.layout` for mouse hit testing.
pub fn draw_navigation_bar(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::PRIMARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let button_text = format!("[ {} ]", app.shuffle_label);
    let button_width = u16::try_from(button_text.chars().count()).unwrap_or(u16::MAX);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(button_width)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(app.title.as_str(), Style::default().fg(colors::PRIMARY).bold()),
        Span::styled(
            format!("  {}/{} selected", app.list.selected().len(), app.row_count()),
            Style::default().fg(colors::MUTED),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let button = Paragraph::new(Span::styled(
        button_text,
        Style::default().fg(Color::Yellow).bold(),
    ));
    frame.render_widget(button, chunks[1]);

    app.layout.shuffle_button = chunks[1];
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, status_style) = if !app.status_message.is_empty() {
        (
            app.status_message.clone(),
            Style::default().fg(Color::Black).bg(Color::Green).bold(),
        )
    } else {
        ("Ready".to_string(), Style::default().fg(colors::PRIMARY))
    };

    let status = Paragraph::new(status_text)
        .style(status_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let shortcuts = match app.current_screen {
        CurrentScreen::Main => vec![
            ("Up/Down", "Navigate", Color::Cyan),
            ("Enter", "Toggle", Color::Green),
            ("s", app.shuffle_label.as_str(), Color::Yellow),
            ("?", "Help", Color::Blue),
            ("q", "Quit", Color::Magenta),
        ],
        CurrentScreen::Help => vec![("Esc", "Close", Color::Red)],
        CurrentScreen::Exiting => vec![("y", "Yes", Color::Green), ("n", "No", Color::Red)],
    };

    let mut spans = Vec::new();
    for (i, (key, desc, color)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(colors::MUTED)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(*color).bold(),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
