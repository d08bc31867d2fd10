//! 周目录注册表
//!
//! 周序号（1..=12）到原始 DOCX 文件名的静态映射。
//! 文件名区分大小写，第 6 周的文件名是小写 `java`，保持原样。

/// 周数量
pub const ITEM_COUNT: u32 = 12;

/// 第一周的序号
pub const FIRST_INDEX: u32 = 1;

/// 最后一周的序号
pub const LAST_INDEX: u32 = ITEM_COUNT;

const FILE_NAMES: [&str; ITEM_COUNT as usize] = [
    "Java-week-1.docx",
    "Java-week-2.docx",
    "Java-week-3.docx",
    "Java-week-4.docx",
    "Java-week-5.docx",
    "java-week-6.docx",
    "Java-week-7.docx",
    "Java-week-8.docx",
    "Java-week-9.docx",
    "Java-week-10.docx",
    "Java-week-11.docx",
    "Java-week-12.docx",
];

/// 目录项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// 周序号，唯一标识
    pub index: u32,
    /// 原始文件名
    pub file_name: &'static str,
}

/// 查询指定周的原始文件名
///
/// 超出 [1, 12] 时返回 `None`，调用方应视为"无可下载文件"。
#[must_use]
pub fn lookup(index: u32) -> Option<&'static str> {
    let slot = index.checked_sub(FIRST_INDEX)?;
    FILE_NAMES.get(usize::try_from(slot).ok()?).copied()
}

/// 是否是已注册的周序号
#[must_use]
pub fn contains(index: u32) -> bool {
    (FIRST_INDEX..=LAST_INDEX).contains(&index)
}

/// 按升序列出所有目录项
pub fn items() -> impl Iterator<Item = Item> {
    (FIRST_INDEX..=LAST_INDEX).zip(FILE_NAMES).map(|(index, file_name)| Item { index, file_name })
}

/// 按升序列出所有周序号
pub fn indices() -> impl Iterator<Item = u32> {
    FIRST_INDEX..=LAST_INDEX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_week_has_a_file() {
        for i in FIRST_INDEX..=LAST_INDEX {
            let name = lookup(i);
            assert!(name.is_some_and(|n| !n.is_empty()), "week {i} has no file");
        }
    }

    #[test]
    fn out_of_range_is_not_found() {
        assert_eq!(lookup(0), None);
        assert_eq!(lookup(13), None);
        assert_eq!(lookup(u32::MAX), None);
    }

    #[test]
    fn week_six_keeps_its_lowercase_name() {
        assert_eq!(lookup(6), Some("java-week-6.docx"));
        assert_eq!(lookup(1), Some("Java-week-1.docx"));
        assert_eq!(lookup(12), Some("Java-week-12.docx"));
    }

    #[test]
    fn items_are_ascending_and_complete() {
        let all: Vec<Item> = items().collect();
        assert_eq!(all.len(), ITEM_COUNT as usize);
        assert!(all.windows(2).all(|w| w[0].index + 1 == w[1].index));
        assert_eq!(all[5].file_name, "java-week-6.docx");
    }

    #[test]
    fn contains_matches_lookup() {
        for i in 0..20 {
            assert_eq!(contains(i), lookup(i).is_some());
        }
    }
}
