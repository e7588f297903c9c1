use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::{CHECKMARK, popup};

fn section(title: &str) -> Line<'_> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn shortcut<'a>(keys: &'a str, description: &'a str, color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:<17}", keys), Style::default().fg(color)),
        Span::styled(description, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect, shuffle_label: &str) {
    let inner_area = Popup::new("Help - Keyboard & Mouse", popup::HELP).render(frame, area);

    let shuffle_description = format!("{} the list", shuffle_label);
    let help_text = vec![
        section("NAVIGATION"),
        shortcut("Up/Down, k/j", "Move cursor", Color::Cyan),
        shortcut("Home, g", "Jump to top", Color::Cyan),
        shortcut("End, G", "Jump to bottom", Color::Cyan),
        shortcut("PageUp/PageDown", "Scroll 10 rows", Color::Cyan),
        shortcut("Mouse wheel", "Scroll", Color::Cyan),
        Line::from(""),
        section("ACTIONS"),
        shortcut("Enter, Space", "Toggle checkmark on cursor row", Color::Green),
        shortcut("Click row", "Toggle checkmark on that row", Color::Green),
        shortcut("s, click button", &shuffle_description, Color::Yellow),
        shortcut("c", "Clear status and highlights", Color::Cyan),
        Line::from(""),
        section("SYSTEM"),
        shortcut("?, h", "Show this help", Color::Cyan),
        shortcut("q, Esc", "Quit application", Color::Magenta),
        Line::from(""),
        section("INDICATORS"),
        shortcut(CHECKMARK, "Selected (moved to top when selected)", Color::Green),
        shortcut("yellow row", "Touched by the last change", Color::Yellow),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press Esc to close",
            Style::default().fg(Color::DarkGray),
        )]),
    ];

    let help_para = Paragraph::new(help_text).alignment(Alignment::Left);
    frame.render_widget(help_para, inner_area);
}
