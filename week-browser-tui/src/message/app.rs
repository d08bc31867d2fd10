//! 应用主消息枚举

use super::{ContentMessage, ModalMessage, NavigationMessage};
use crate::backend::BackendEvent;

/// 应用主消息
#[derive(Debug)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 约 100ms 无输入时的时钟节拍
    Tick,

    /// 终端尺寸（每帧渲染前发送）
    Frame { width: u16, height: u16 },

    /// 推进一个启动阶段
    Startup,

    /// 卡片列表相关消息
    Navigation(NavigationMessage),

    /// 内容查看器相关消息
    Content(ContentMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 后台任务完成
    Backend(BackendEvent),

    /// 显示帮助
    ShowHelp,

    /// 切换主题
    ToggleTheme,

    /// 切换语言
    ToggleLanguage,

    /// 清除状态消息
    ClearStatus,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
