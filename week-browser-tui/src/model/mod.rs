//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!
//!         pub mod domain;     // 领域模型（已加载的文档）
//!         pub mod state;      // 界面状态（卡片列表、查看器、弹窗）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                  // 退出标志
//!             pub browser: Browser<FileViewer>,       // 浏览会话（来自 week-browser-core）
//!             pub card_list: CardListState,           // 卡片列表滚动
//!             pub viewer: ViewerPanel,                // 查看器文档、滚动、入场效果
//!             pub modal: ModalState,                  // 弹窗
//!             pub status_message: Option<String>,     // 状态栏消息
//!             pub downloads: DownloadService,         // 下载服务
//!             pub screen: Rect,                       // 最近一帧的终端区域
//!         }
//!
//!     使用：
//!         - 在 main.rs 中创建：let mut app = model::App::new(browser, downloads);
//!         - 在 update/mod.rs 中修改
//!         - 在 view/mod.rs 中读取：pub fn render(app: &App, ...)
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、业务状态与界面状态的分工
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Browser 持有：
//!         - 卡片列表与唯一的激活卡片
//!         - 查看器忙碌/就绪状态、标题序号、下载链接
//!         - 卡片可见性标记
//!
//!     界面状态只持有与终端显示相关的数据：
//!         - 列表滚动偏移与容量
//!         - 查看器中的文档、滚动位置、入场效果剩余节拍
//!
//!     数据流：
//!         用户按 ↓
//!             ↓
//!         event/handler.rs 返回 Navigation(SelectNext)
//!             ↓
//!         update/navigation.rs 调用 app.browser.navigate(Direction::Next)
//!             ↓
//!         FileViewer 在后台读取文件，完成后经通道送回 BackendEvent
//!             ↓
//!         update/mod.rs 调用 app.browser.on_viewer_event(..)，更新 app.viewer
//!

mod app;

pub mod domain;
pub mod state;

pub use app::App;
pub use state::{CardListState, Modal, ModalState, ViewerPanel};
