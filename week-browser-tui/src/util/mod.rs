//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//!     - terminal.rs   终端的初始化和恢复（原始模式、备用屏幕、鼠标捕获）
//!     - logging.rs    文件日志（终端被占用，日志不能写到 stdout）
//!
//!
//!     使用方式：
//!         在 src/main.rs 中，有：
//!
//!             init_logging(&log_path)?;
//!             let mut terminal = init_terminal()?;
//!             let result = app::run(&mut terminal, &mut app, &mut events);
//!             restore_terminal(&mut terminal)?;
//!
//!         关键：restore_terminal 在 app::run 之后立即执行，即使 run 返回错误，
//!               也会先恢复终端，再返回错误结果。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
