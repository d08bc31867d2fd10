//! 界面状态模块
//!
//! 定义卡片列表、内容查看器和弹窗的界面状态。
//! 选中项、加载状态等业务状态由 `week_browser_core::Browser` 持有。

mod card_list;
mod modal;
mod viewer;

pub use card_list::CardListState;
pub use modal::{Modal, ModalState};
pub use viewer::{ViewerPanel, ENTRANCE_TICKS};
