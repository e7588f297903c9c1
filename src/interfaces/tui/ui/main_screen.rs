use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Cell, Row, Table, TableState},
};

use crate::interfaces::tui::app::App;
use crate::interfaces::tui::constants::{CHECKMARK, colors};

pub fn draw_main_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!("Items ({})", app.row_count()))
        .title_style(
            Style::default()
                .fg(colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        );
    let rows_area = block.inner(area);
    app.layout.list_rows = rows_area;

    // 计算可见窗口（border 2行开销）
    let visible_height = usize::from(rows_area.height);
    app.last_visible_height = visible_height.max(1);

    let total = app.row_count();
    let offset = app.scroll_offset.min(total.saturating_sub(1));
    app.scroll_offset = offset;
    let end = (offset + visible_height).min(total);

    // 虚拟渲染：只构建可见行的 Row
    let snapshot = app.list.snapshot();
    let mut rows = Vec::with_capacity(end.saturating_sub(offset));
    for item in &snapshot.items()[offset..end] {
        let accessory = if app.list.is_selected(item) {
            Span::styled(
                CHECKMARK,
                Style::default()
                    .fg(colors::CHECKMARK)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::raw(" ")
        };

        let style = if app.is_recently_changed(item) {
            Style::default().fg(colors::CHANGED)
        } else {
            Style::default()
        };

        rows.push(Row::new(vec![Cell::from(item.as_str()), Cell::from(accessory)]).style(style));
    }

    let table = Table::new(rows, [Constraint::Min(1), Constraint::Length(2)])
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(colors::HIGHLIGHT_BG)
                .fg(colors::HIGHLIGHT_FG),
        )
        .highlight_symbol("▶ ")
        .column_spacing(1);

    // 虚拟 TableState：selected 调整为相对于可见窗口的偏移
    let mut virtual_state = TableState::default();
    if app.cursor >= offset && app.cursor < end {
        virtual_state.select(Some(app.cursor - offset));
    }

    frame.render_stateful_widget(table, area, &mut virtual_state);
}
