//! 键盘导航
//!
//! 方向输入映射为"选择相邻项"，结果限制在 [1, 12] 内。

use crate::registry::{FIRST_INDEX, LAST_INDEX};

/// 导航方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// 上 / 左
    Previous,
    /// 下 / 右
    Next,
}

/// 计算导航目标
///
/// 没有激活项，或已处于边界时返回 `None`（不触发选择）。
#[must_use]
pub fn target(current: Option<u32>, direction: Direction) -> Option<u32> {
    let current = current?;
    let next = match direction {
        Direction::Previous => current.saturating_sub(1),
        Direction::Next => current.saturating_add(1),
    }
    .clamp(FIRST_INDEX, LAST_INDEX);

    (next != current).then_some(next)
}
