//! 平台抽象 Trait
//!
//! 由前端实现，核心层只通过 Trait 驱动显示面。

mod viewer;

pub use viewer::{LoadOutcome, LoadToken, Viewer, ViewerEvent};
