//! 浏览会话
//!
//! 持有卡片列表、内容加载器和可见性通知器，负责把选择路由到加载。
//!
//! 启动分两阶段，按顺序推进：
//! 1. [`Browser::build_cards`]：创建卡片并登记可见性观察
//! 2. [`Browser::auto_select`]：默认选中第一周并加载
//!
//! 前端可以在两个阶段之间先渲染一帧，以获得分步出现的效果。

use crate::cards::{CardList, CardState, SelectOutcome};
use crate::error::BrowserResult;
use crate::layout::ResourceLayout;
use crate::loader::{Completion, ContentLoader, DownloadControl, ViewerStatus};
use crate::navigator::{self, Direction};
use crate::registry;
use crate::traits::{LoadToken, Viewer, ViewerEvent};
use crate::visibility::VisibilityNotifier;

/// 启动阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartupPhase {
    #[default]
    Pending,
    CardsBuilt,
    Ready,
}

/// 一次选择引发的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub outcome: SelectOutcome,
    /// 激活项变化时发起的加载
    pub load: Option<BrowserResult<LoadToken>>,
}

/// 浏览会话
pub struct Browser<V> {
    cards: CardList,
    loader: ContentLoader<V>,
    visibility: VisibilityNotifier,
    phase: StartupPhase,
}

impl<V: Viewer> Browser<V> {
    pub fn new(viewer: V, layout: ResourceLayout, visibility: VisibilityNotifier) -> Self {
        Self {
            cards: CardList::new(),
            loader: ContentLoader::new(viewer, layout),
            visibility,
            phase: StartupPhase::Pending,
        }
    }

    /// 第一阶段：创建卡片
    pub fn build_cards(&mut self) -> bool {
        if self.phase != StartupPhase::Pending {
            log::debug!("build_cards skipped in phase {:?}", self.phase);
            return false;
        }

        for index in self.cards.initialize(registry::indices()) {
            self.visibility.observe(index);
        }
        self.phase = StartupPhase::CardsBuilt;
        true
    }

    /// 第二阶段：默认选中第一周
    pub fn auto_select(&mut self) -> Option<Selection> {
        if self.phase != StartupPhase::CardsBuilt {
            log::debug!("auto_select skipped in phase {:?}", self.phase);
            return None;
        }

        self.phase = StartupPhase::Ready;
        let first = self.cards.index_at(0)?;
        Some(self.select(first))
    }

    /// 按顺序执行全部启动阶段
    pub fn start(&mut self) -> Option<Selection> {
        self.build_cards();
        self.auto_select()
    }

    /// 选中指定周，激活项变化时加载内容
    pub fn select(&mut self, index: u32) -> Selection {
        let outcome = self.cards.select(index);
        let load = outcome.changed_to().map(|current| self.loader.load(current));
        Selection { outcome, load }
    }

    /// 键盘导航
    ///
    /// 没有激活项或已在边界时返回 `None`。
    pub fn navigate(&mut self, direction: Direction) -> Option<Selection> {
        let next = navigator::target(self.cards.active(), direction)?;
        Some(self.select(next))
    }

    /// 处理查看器完成通知
    pub fn on_viewer_event(&mut self, event: ViewerEvent) -> Completion {
        self.loader.complete(event)
    }

    /// 报告当前可见的卡片，返回新标记的卡片
    pub fn report_visibility(&mut self, visible: &[u32]) -> Vec<u32> {
        self.visibility.report_visible(visible)
    }

    /// 按相交比例报告卡片，返回新标记的卡片
    pub fn report_ratios(&mut self, ratios: &[(u32, f32)]) -> Vec<u32> {
        ratios
            .iter()
            .filter(|&&(index, ratio)| self.visibility.report(index, ratio))
            .map(|&(index, _)| index)
            .collect()
    }

    pub fn phase(&self) -> StartupPhase {
        self.phase
    }

    pub fn active(&self) -> Option<u32> {
        self.cards.active()
    }

    pub fn cards(&self) -> &[CardState] {
        self.cards.cards()
    }

    pub fn card_list(&self) -> &CardList {
        &self.cards
    }

    pub fn loader(&self) -> &ContentLoader<V> {
        &self.loader
    }

    pub fn loader_mut(&mut self) -> &mut ContentLoader<V> {
        &mut self.loader
    }

    pub fn visibility(&self) -> &VisibilityNotifier {
        &self.visibility
    }

    pub fn status(&self) -> ViewerStatus {
        self.loader.status()
    }

    pub fn download(&self) -> &DownloadControl {
        self.loader.download()
    }
}
