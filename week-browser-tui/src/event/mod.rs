//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘/鼠标等输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 src/app.rs 调用，最长等待 timeout
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)        键盘事件
//!                 - Ctrl+C 无论何时都退出
//!                 - 帮助弹窗打开时，只接受 Esc / ? / q 关闭弹窗
//!                 - ↑ ← k h 上一周，↓ → j l 下一周
//!                 - PgUp / PgDn / Home / End 滚动查看器，d 下载
//!                 - t 切换主题，L 切换语言，? 帮助，q 退出
//!             Event::Mouse(MouseEvent)    鼠标事件
//!                 - 左键点击卡片：选中该周
//!                 - 滚轮：滚动指针下方的面板
//!             Event::Resize(..)           忽略，下一帧重新计算布局
//!
//!     鼠标命中测试使用 view/layout.rs 中的区域计算，
//!     与渲染使用同一组区域。
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
