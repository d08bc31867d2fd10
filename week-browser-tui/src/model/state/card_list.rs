//! 卡片列表滚动状态

/// 卡片列表滚动状态
///
/// `offset` 与 `capacity` 都以卡片为单位。
#[derive(Debug, Default)]
pub struct CardListState {
    /// 第一张可见卡片的位置
    pub offset: usize,
    /// 列表区域能完整容纳的卡片数（由布局计算）
    pub capacity: usize,
}

impl CardListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 向上滚动一张卡片
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// 向下滚动一张卡片
    pub fn scroll_down(&mut self, total: usize) {
        if self.offset < self.max_offset(total) {
            self.offset += 1;
        }
    }

    /// 调整偏移，使指定位置的卡片完整可见
    pub fn reveal(&mut self, position: usize, total: usize) {
        let capacity = self.capacity.max(1);
        if position < self.offset {
            self.offset = position;
        } else if position >= self.offset + capacity {
            self.offset = position + 1 - capacity;
        }
        self.offset = self.offset.min(self.max_offset(total));
    }

    /// 区域尺寸变化后更新容量并修正偏移
    pub fn resize(&mut self, capacity: usize, total: usize) {
        self.capacity = capacity;
        self.offset = self.offset.min(self.max_offset(total));
    }

    fn max_offset(&self, total: usize) -> usize {
        total.saturating_sub(self.capacity.max(1))
    }
}
