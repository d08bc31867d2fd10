//! 卡片列表控制器
//!
//! 每个目录项对应一张卡片，同一时刻至多一张处于激活状态。
//! 激活状态只能通过 [`CardList::select`] 修改。

use crate::error::BrowserError;

/// 单张卡片的状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardState {
    pub index: u32,
    pub is_active: bool,
}

/// 选择结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// 激活卡片发生变化（触发一次选择事件）
    Changed { previous: Option<u32>, current: u32 },
    /// 目标已是激活卡片，仅重新确认激活标记
    Unchanged(u32),
    /// 目标无效，状态未变
    Rejected(BrowserError),
}

impl SelectOutcome {
    /// 是否需要触发内容加载
    pub fn changed_to(&self) -> Option<u32> {
        match self {
            Self::Changed { current, .. } => Some(*current),
            _ => None,
        }
    }
}

/// 卡片列表
#[derive(Debug, Default)]
pub struct CardList {
    cards: Vec<CardState>,
    active: Option<u32>,
}

impl CardList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 按升序创建卡片
    ///
    /// 重复调用不会产生重复卡片。返回本次新建的卡片序号，
    /// 已初始化时返回空列表。
    pub fn initialize(&mut self, indices: impl IntoIterator<Item = u32>) -> Vec<u32> {
        if self.is_initialized() {
            log::debug!("Card list already initialized with {} cards", self.cards.len());
            return Vec::new();
        }

        let mut indices: Vec<u32> = indices.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();

        self.cards = indices
            .iter()
            .map(|&index| CardState {
                index,
                is_active: false,
            })
            .collect();

        log::info!("Created {} week cards", self.cards.len());
        indices
    }

    /// 激活指定卡片
    pub fn select(&mut self, index: u32) -> SelectOutcome {
        if self.cards.is_empty() {
            let err = BrowserError::NoCards;
            err.report();
            return SelectOutcome::Rejected(err);
        }

        if !self.cards.iter().any(|c| c.index == index) {
            let err = BrowserError::UnknownItem(index);
            err.report();
            return SelectOutcome::Rejected(err);
        }

        let previous = self.active;
        for card in &mut self.cards {
            card.is_active = card.index == index;
        }
        self.active = Some(index);

        if previous == Some(index) {
            SelectOutcome::Unchanged(index)
        } else {
            log::debug!("Active week changed: {previous:?} -> {index}");
            SelectOutcome::Changed {
                previous,
                current: index,
            }
        }
    }

    /// 当前激活的卡片序号
    pub fn active(&self) -> Option<u32> {
        self.active
    }

    pub fn cards(&self) -> &[CardState] {
        &self.cards
    }

    pub fn is_initialized(&self) -> bool {
        !self.cards.is_empty()
    }

    /// 卡片在列表中的位置
    pub fn position(&self, index: u32) -> Option<usize> {
        self.cards.iter().position(|c| c.index == index)
    }

    /// 指定位置上的卡片序号
    pub fn index_at(&self, position: usize) -> Option<u32> {
        self.cards.get(position).map(|c| c.index)
    }
}
