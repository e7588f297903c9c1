//! Action 系统
//!
//! 事件处理器把输入转换为 Action，`App::update` 执行后可返回后续 Action（动作链）

/// TUI 动作枚举
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Action {
    // ========== 导航 ==========
    /// 向上移动光标
    MoveUp,
    /// 向下移动光标
    MoveDown,
    /// 向上翻页
    PageUp,
    /// 向下翻页
    PageDown,
    /// 跳转到顶部
    JumpTop,
    /// 跳转到底部
    JumpBottom,
    /// 按行滚动视口（鼠标滚轮）
    Scroll(isize),

    // ========== 列表操作 ==========
    /// 点击光标所在行
    TapCursor,
    /// 点击指定行（鼠标点击）
    TapRow(usize),
    /// 随机打乱整个列表
    Shuffle,

    // ========== 通知消息 ==========
    /// 显示状态消息
    ShowStatus(String),
    /// 清除所有消息
    ClearMessages,

    // ========== 系统 ==========
    /// 显示帮助
    ShowHelp,
    /// 返回主屏幕
    GoBack,
    /// 请求退出
    RequestExit,
    /// 确认退出
    ConfirmExit,
    /// 退出程序
    Quit,
    /// 无操作
    #[default]
    Noop,
}

impl Action {
    /// 判断是否是无操作
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::Noop)
    }

    /// 判断是否应该导致程序退出
    pub fn should_quit(&self) -> bool {
        matches!(self, Action::Quit)
    }
}
