//! 已加载文档模型

use std::borrow::Cow;

use textwrap::{Options as WrapOptions, WrapAlgorithm};
use unicode_width::UnicodeWidthChar;

/// 列表项与表格单元格的前缀宽度（`"  • "`、`"  │ "`）
pub const INDENT: usize = 4;

/// 文本块类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// 标题（1..=6）
    Heading(u8),
    Paragraph,
    ListItem,
    Preformatted,
    TableCell,
}

/// 文本块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

/// 按显示宽度折行后的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// 块之间的空行
    Blank,
    Text {
        kind: BlockKind,
        text: String,
        /// 是否为块的第一行（列表符号只画在第一行）
        first: bool,
    },
}

/// 从 HTML 提取出的可显示文档
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// `<title>` 内容
    pub title: Option<String>,
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// 按 `width` 列折行，块之间空一行
    ///
    /// 预格式化文本保留原有换行与缩进，超宽的行按字符截断到下一行；
    /// 其他文本按单词折行。
    pub fn rows(&self, width: usize) -> Vec<Row> {
        let width = width.max(1);
        let mut rows = Vec::new();
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                rows.push(Row::Blank);
            }
            let mut pieces: Vec<String> = match block.kind {
                BlockKind::Preformatted => block
                    .text
                    .replace('\t', "    ")
                    .lines()
                    .flat_map(|line| hard_wrap(line, width))
                    .collect(),
                BlockKind::ListItem | BlockKind::TableCell => {
                    word_wrap(&block.text, width.saturating_sub(INDENT).max(1))
                }
                BlockKind::Heading(_) | BlockKind::Paragraph => word_wrap(&block.text, width),
            };
            if pieces.is_empty() {
                pieces.push(String::new());
            }
            rows.extend(pieces.into_iter().enumerate().map(|(n, text)| Row::Text {
                kind: block.kind,
                text,
                first: n == 0,
            }));
        }
        rows
    }

    /// 按 `width` 列折行后的总行数
    pub fn line_count(&self, width: usize) -> usize {
        self.rows(width).len()
    }

    /// 以纯文本形式构造（内容无法解析时使用）
    pub fn plain(text: &str) -> Self {
        Self {
            title: None,
            blocks: text
                .lines()
                .map(|line| Block {
                    kind: BlockKind::Preformatted,
                    text: line.to_string(),
                })
                .collect(),
        }
    }
}

/// 按单词折行，单个超宽单词按字符拆开
fn word_wrap(text: &str, width: usize) -> Vec<String> {
    let options = WrapOptions::new(width)
        .break_words(true)
        .wrap_algorithm(WrapAlgorithm::FirstFit);
    textwrap::wrap(text, options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

/// 按字符折行，保留空白
fn hard_wrap(line: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut used = 0;
    for ch in line.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used > 0 && used + ch_width > width {
            rows.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += ch_width;
    }
    rows.push(current);
    rows
}
