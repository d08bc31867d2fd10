//! 内容查看器消息类型

/// 内容查看器相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentMessage {
    /// 向上滚动一行
    ScrollUp,

    /// 向下滚动一行
    ScrollDown,

    /// 向上翻页
    PageUp,

    /// 向下翻页
    PageDown,

    /// 回到顶部
    Top,

    /// 跳到底部
    Bottom,

    /// 下载当前周的原始文件
    Download,
}
