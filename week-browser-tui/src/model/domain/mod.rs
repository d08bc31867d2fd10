//! 领域模型
//!
//! 定义 TUI 中使用的数据结构

mod document;

pub use document::{Block, BlockKind, Document, Row, INDENT};
