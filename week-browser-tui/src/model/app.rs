//! 应用主状态结构

use ratatui::layout::Rect;
use week_browser_core::Browser;

use super::{CardListState, ModalState, ViewerPanel};
use crate::backend::{DownloadService, FileViewer};

/// 状态消息显示的节拍数
pub const STATUS_TICKS: u16 = 50;

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 浏览会话（卡片、加载器、可见性）
    pub browser: Browser<FileViewer>,

    /// 卡片列表滚动状态
    pub card_list: CardListState,

    /// 内容查看器状态
    pub viewer: ViewerPanel,

    /// 弹窗状态
    pub modal: ModalState,

    /// 状态栏消息
    pub status_message: Option<String>,
    /// 状态消息剩余节拍，归零时自动清除
    pub status_ticks: u16,

    /// 下载服务
    pub downloads: DownloadService,

    /// 最近一帧的终端区域
    pub screen: Rect,
}

impl App {
    /// 创建新的应用实例
    pub fn new(browser: Browser<FileViewer>, downloads: DownloadService) -> Self {
        Self {
            should_quit: false,
            browser,
            card_list: CardListState::new(),
            viewer: ViewerPanel::new(),
            modal: ModalState::new(),
            status_message: None,
            status_ticks: 0,
            downloads,
            screen: Rect::default(),
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_ticks = 0;
    }
}
