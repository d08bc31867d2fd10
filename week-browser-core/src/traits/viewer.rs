//! 内容查看器抽象 Trait

use crate::layout::LoadRequest;

/// 加载请求令牌，每次加载单调递增
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadToken(pub u64);

/// 查看器加载结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 加载完成
    ///
    /// `accessible` 为 `false` 表示内容已显示但无法访问其文档结构，
    /// 此时跳过入场效果，不视为错误。
    Loaded { accessible: bool },
    /// 加载失败
    Failed(String),
}

/// 查看器完成通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerEvent {
    pub token: LoadToken,
    pub outcome: LoadOutcome,
}

/// 内容查看器 Trait
///
/// 平台实现:
/// - TUI: `FileViewer`（tokio 读取本地 HTML 文件）
/// - 测试: `RecordingViewer`
///
/// `navigate` 必须立即返回，完成结果稍后以 [`ViewerEvent`] 的形式送回。
pub trait Viewer {
    /// 显示面是否可用
    fn is_attached(&self) -> bool;

    /// 开始加载内容
    ///
    /// # Arguments
    /// * `request` - 本次加载请求
    /// * `token` - 完成通知必须携带的令牌
    fn navigate(&mut self, request: &LoadRequest, token: LoadToken);
}
