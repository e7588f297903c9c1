//! TUI 常量定义
//!
//! 集中管理所有 UI 相关的常量，避免魔法数字分散在代码各处

/// 翻页滚动步长
pub const PAGE_SCROLL_STEP: usize = 10;

/// 鼠标滚轮每格滚动行数
pub const WHEEL_SCROLL_STEP: isize = 3;

/// 选中行末尾的勾选标记
pub const CHECKMARK: &str = "✓";

/// 弹窗尺寸配置
#[derive(Debug, Clone, Copy)]
pub struct PopupSize {
    /// 宽度百分比 (0-100)
    pub width: u16,
    /// 高度百分比 (0-100)
    pub height: u16,
}

impl PopupSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// 各弹窗的尺寸配置
pub mod popup {
    use super::PopupSize;

    /// 帮助弹窗
    pub const HELP: PopupSize = PopupSize::new(70, 80);
    /// 退出确认
    pub const EXITING: PopupSize = PopupSize::new(60, 50);
}

/// 颜色主题
pub mod colors {
    use ratatui::style::Color;

    /// 主色调
    pub const PRIMARY: Color = Color::Cyan;
    /// 勾选标记颜色
    pub const CHECKMARK: Color = Color::Green;
    /// 上次变更涉及的行
    pub const CHANGED: Color = Color::Yellow;
    /// 次要文本色
    pub const MUTED: Color = Color::DarkGray;
    /// 高亮背景色
    pub const HIGHLIGHT_BG: Color = Color::DarkGray;
    /// 高亮前景色
    pub const HIGHLIGHT_FG: Color = Color::White;
}
