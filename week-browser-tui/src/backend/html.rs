//! HTML 文本提取
//!
//! 把预渲染的 HTML 转为按块组织的纯文本。
//! 只取块级元素，嵌套在其他已选元素中的元素跳过，避免重复文本。

use scraper::{ElementRef, Html, Selector};

use crate::model::domain::{Block, BlockKind, Document};

const BLOCK_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, li, pre, td, th";

/// 解析结果
#[derive(Debug)]
pub struct Rendered {
    pub document: Document,
    /// 内容能否按 UTF-8 解码
    pub accessible: bool,
}

/// 解析文件内容
pub fn render(bytes: &[u8]) -> Rendered {
    match std::str::from_utf8(bytes) {
        Ok(html) => {
            let document = extract(html);
            Rendered {
                accessible: true,
                document,
            }
        }
        // 无法解码时按原样显示，跳过入场效果
        Err(_) => Rendered {
            document: Document::plain(&String::from_utf8_lossy(bytes)),
            accessible: false,
        },
    }
}

/// 从 HTML 字符串提取文档
pub fn extract(html: &str) -> Document {
    let page = Html::parse_document(html);

    let title = Selector::parse("title").ok().and_then(|selector| {
        page.select(&selector)
            .next()
            .map(|el| normalize(&el.text().collect::<String>()))
            .filter(|t| !t.is_empty())
    });

    let Ok(selector) = Selector::parse(BLOCK_SELECTOR) else {
        return Document {
            title,
            blocks: Vec::new(),
        };
    };

    let mut blocks: Vec<Block> = page
        .select(&selector)
        .filter(|el| !has_block_ancestor(el))
        .filter_map(|el| {
            let kind = kind_of(el.value().name())?;
            let raw: String = el.text().collect();
            let text = if kind == BlockKind::Preformatted {
                raw.trim_end().to_string()
            } else {
                normalize(&raw)
            };
            (!text.is_empty()).then_some(Block { kind, text })
        })
        .collect();

    // 没有块级元素时退回到 body 全文
    if blocks.is_empty() {
        if let Ok(body) = Selector::parse("body") {
            if let Some(el) = page.select(&body).next() {
                let text = normalize(&el.text().collect::<String>());
                if !text.is_empty() {
                    blocks.push(Block {
                        kind: BlockKind::Paragraph,
                        text,
                    });
                }
            }
        }
    }

    Document { title, blocks }
}

fn kind_of(tag: &str) -> Option<BlockKind> {
    let kind = match tag {
        "h1" => BlockKind::Heading(1),
        "h2" => BlockKind::Heading(2),
        "h3" => BlockKind::Heading(3),
        "h4" => BlockKind::Heading(4),
        "h5" => BlockKind::Heading(5),
        "h6" => BlockKind::Heading(6),
        "p" => BlockKind::Paragraph,
        "li" => BlockKind::ListItem,
        "pre" => BlockKind::Preformatted,
        "td" | "th" => BlockKind::TableCell,
        _ => return None,
    };
    Some(kind)
}

fn has_block_ancestor(el: &ElementRef<'_>) -> bool {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| kind_of(ancestor.value().name()).is_some())
}

/// 合并连续空白
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
