//! 可见性通知
//!
//! 按周序号跟踪卡片在视口中的可见性。卡片从不可见变为可见时，
//! 标记其需要播放入场效果。标记一旦设置不会清除。
//! 与选择状态完全无关。

use std::collections::BTreeMap;

/// 默认相交阈值
pub const DEFAULT_THRESHOLD: f32 = 0.1;

#[derive(Debug, Clone, Copy, Default)]
struct Observed {
    visible: bool,
    flagged: bool,
}

/// 可见性通知器
#[derive(Debug)]
pub struct VisibilityNotifier {
    threshold: f32,
    observed: BTreeMap<u32, Observed>,
}

impl Default for VisibilityNotifier {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl VisibilityNotifier {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            observed: BTreeMap::new(),
        }
    }

    /// 开始观察一张卡片，重复观察无效果
    pub fn observe(&mut self, index: u32) {
        self.observed.entry(index).or_default();
    }

    pub fn is_observed(&self, index: u32) -> bool {
        self.observed.contains_key(&index)
    }

    /// 报告一张卡片的相交比例
    ///
    /// 返回 `true` 表示本次报告使该卡片首次被标记。
    /// 未观察的卡片忽略。
    pub fn report(&mut self, index: u32, ratio: f32) -> bool {
        let Some(state) = self.observed.get_mut(&index) else {
            return false;
        };

        let visible = ratio >= self.threshold && ratio > 0.0;
        let entered = visible && !state.visible;
        state.visible = visible;

        if entered && !state.flagged {
            state.flagged = true;
            log::trace!("Week card {index} entered viewport");
            return true;
        }
        false
    }

    /// 报告当前可见的卡片集合，其他已观察卡片视为不可见
    ///
    /// 返回本次新标记的卡片序号（升序）。
    pub fn report_visible(&mut self, visible: &[u32]) -> Vec<u32> {
        let indices: Vec<u32> = self.observed.keys().copied().collect();
        indices
            .into_iter()
            .filter(|&index| {
                let ratio = if visible.contains(&index) { 1.0 } else { 0.0 };
                self.report(index, ratio)
            })
            .collect()
    }

    pub fn is_flagged(&self, index: u32) -> bool {
        self.observed.get(&index).is_some_and(|s| s.flagged)
    }

    pub fn is_visible(&self, index: u32) -> bool {
        self.observed.get(&index).is_some_and(|s| s.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unobserved_reports_are_ignored() {
        let mut n = VisibilityNotifier::default();
        assert!(!n.report(3, 1.0));
        assert!(!n.is_flagged(3));
    }

    #[test]
    fn entering_viewport_flags_once() {
        let mut n = VisibilityNotifier::default();
        n.observe(1);
        assert!(n.report(1, 0.5));
        assert!(n.is_flagged(1));
        assert!(!n.report(1, 0.6));

        // 离开后再次进入也不会重复标记
        assert!(!n.report(1, 0.0));
        assert!(!n.is_visible(1));
        assert!(!n.report(1, 1.0));
        assert!(n.is_flagged(1));
    }

    #[test]
    fn below_threshold_is_not_visible() {
        let mut n = VisibilityNotifier::new(0.1);
        n.observe(2);
        assert!(!n.report(2, 0.05));
        assert!(!n.is_flagged(2));
        assert!(n.report(2, 0.1));
    }

    #[test]
    fn lazy_attach_after_reports() {
        let mut n = VisibilityNotifier::default();
        assert!(n.report_visible(&[1, 2]).is_empty());
        n.observe(1);
        n.observe(2);
        n.observe(2);
        assert_eq!(n.report_visible(&[1, 2]), vec![1, 2]);
    }

    #[test]
    fn report_visible_marks_others_hidden() {
        let mut n = VisibilityNotifier::default();
        for i in 1..=4 {
            n.observe(i);
        }
        assert_eq!(n.report_visible(&[1, 2]), vec![1, 2]);
        assert_eq!(n.report_visible(&[2, 3]), vec![3]);
        assert!(!n.is_visible(1));
        assert!(n.is_flagged(1));
        assert!(!n.is_flagged(4));
    }
}
