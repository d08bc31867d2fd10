//! 卡片列表消息类型

/// 卡片列表相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMessage {
    /// 选中上一周
    SelectPrevious,

    /// 选中下一周
    SelectNext,

    /// 选中指定周（鼠标点击）
    Select(u32),

    /// 列表向上滚动一张卡片
    ScrollUp,

    /// 列表向下滚动一张卡片
    ScrollDown,
}
