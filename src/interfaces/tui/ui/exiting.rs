use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{colors, popup};

/// Exit confirmation
///
/// Nothing is persisted: the selection and the current order are lost on quit.
pub fn draw_exiting_screen(frame: &mut Frame, app: &App, area: Rect) {
    let inner_area = Popup::new("Exit Confirmation", popup::EXITING)
        .theme_color(Color::Magenta)
        .render(frame, area);

    let selected = app.list.selected().len();
    let noun = if selected == 1 { "item" } else { "items" };

    let text = vec![
        Line::from(Span::styled(
            format!("Leave {}?", app.title),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{} selected {} will be cleared", selected, noun),
            Style::default().fg(colors::CHANGED),
        )),
        Line::from(Span::styled(
            "and the current order is not kept.",
            Style::default().fg(colors::CHANGED),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(Color::Red).bold()),
            Span::raw(" quit   "),
            Span::styled("[n]", Style::default().fg(colors::CHECKMARK).bold()),
            Span::raw(" stay"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, inner_area);
}
