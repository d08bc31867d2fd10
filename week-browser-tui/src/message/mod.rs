//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁。
//! 用户输入、后台任务完成和时钟节拍都被翻译成 Message，
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod content;        // 内容查看器子消息
//!         mod modal;          // 弹窗子消息
//!         mod navigation;     // 卡片列表子消息
//!
//!
//!     消息来源：
//!         - event/handler.rs    键盘与鼠标
//!         - app.rs              启动阶段推进、后台事件、Tick、终端尺寸
//!

mod app;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
