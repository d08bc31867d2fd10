//!
//! app.rs
//! 应用主循环
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     update(Frame { width, height })                 // 同步终端尺寸与布局
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!
//!     if 启动未完成 {                                   // 每渲染一帧推进一个启动阶段
//!         update(Startup)                             // 卡片先出现，下一帧再选中第一周
//!     }
//!
//!     while let Ok(e) = events.try_recv() {           // 取出所有已完成的后台任务
//!         update(Backend(e))
//!     }
//!
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 100ms
//!         update(handle_event(event, &app))
//!     } else {
//!         update(Tick)                                // 无输入时推进入场效果与状态消息
//!     }
//! }

use std::time::Duration;

use anyhow::Result;
use crossterm::event::Event;
use tokio::sync::mpsc::UnboundedReceiver;
use week_browser_core::StartupPhase;

use crate::backend::BackendEvent;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    events: &mut UnboundedReceiver<BackendEvent>,
) -> Result<()> {
    loop {
        // 1. 同步尺寸并渲染 UI
        let size = terminal.size()?;
        update::update(
            app,
            AppMessage::Frame {
                width: size.width,
                height: size.height,
            },
        );
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 启动阶段与后台事件
        settle(app, events);

        // 4. 轮询输入（100ms 超时）
        let input = event::poll_event(Duration::from_millis(100))?;
        handle_input(app, input);
    }

    Ok(())
}

/// 渲染之后推进状态：启动未完成时前进一个阶段，然后取出已完成的后台任务
fn settle(app: &mut App, events: &mut UnboundedReceiver<BackendEvent>) {
    if app.browser.phase() != StartupPhase::Ready {
        update::update(app, AppMessage::Startup);
    }
    while let Ok(backend_event) = events.try_recv() {
        update::update(app, AppMessage::Backend(backend_event));
    }
}

/// 处理一次轮询结果，无输入时推进一拍
fn handle_input(app: &mut App, input: Option<Event>) {
    let msg = match input {
        Some(event) => event::handle_event(event, app),
        None => AppMessage::Tick,
    };
    update::update(app, msg);
}
