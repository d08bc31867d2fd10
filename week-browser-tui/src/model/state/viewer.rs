//! 内容查看器状态

use crate::model::domain::Document;

/// 入场效果持续的节拍数（约 100ms 一拍）
pub const ENTRANCE_TICKS: u8 = 4;

/// 内容查看器状态
#[derive(Debug, Default)]
pub struct ViewerPanel {
    /// 当前显示的文档，加载失败或尚未加载时为 `None`
    pub document: Option<Document>,
    /// 首行偏移
    pub scroll: usize,
    /// 可视行数（由布局计算）
    pub page_height: usize,
    /// 正文区域列数，决定折行（由布局计算）
    pub page_width: usize,
    /// 内容入场效果剩余节拍
    pub entrance_ticks: u8,
    /// 已播放过入场效果的下载控件代数
    pub download_generation: u64,
    /// 下载控件入场效果剩余节拍
    pub download_ticks: u8,
}

impl ViewerPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换文档并回到顶部
    pub fn show(&mut self, document: Option<Document>, entrance: bool) {
        self.document = document;
        self.scroll = 0;
        self.entrance_ticks = if entrance { ENTRANCE_TICKS } else { 0 };
    }

    /// 下载控件重新出现时播放入场效果
    pub fn observe_download(&mut self, generation: u64) {
        if generation != self.download_generation {
            self.download_generation = generation;
            self.download_ticks = ENTRANCE_TICKS;
        }
    }

    /// 推进一拍
    pub fn tick(&mut self) {
        self.entrance_ticks = self.entrance_ticks.saturating_sub(1);
        self.download_ticks = self.download_ticks.saturating_sub(1);
    }

    pub fn is_entering(&self) -> bool {
        self.entrance_ticks > 0
    }

    pub fn scroll_by(&mut self, delta: isize) {
        self.scroll = self.scroll.saturating_add_signed(delta).min(self.max_scroll());
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll = self.max_scroll();
    }

    /// 一页的滚动距离
    pub fn page(&self) -> isize {
        isize::try_from(self.page_height.saturating_sub(1).max(1)).unwrap_or(1)
    }

    fn max_scroll(&self) -> usize {
        let lines = self
            .document
            .as_ref()
            .map_or(0, |doc| doc.line_count(self.page_width));
        lines.saturating_sub(self.page_height)
    }
}
