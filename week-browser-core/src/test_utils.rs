//! 测试辅助模块
//!
//! 提供记录所有加载请求的 mock 查看器，以及按线程收集日志的 logger。

use std::cell::RefCell;
use std::sync::Once;

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::layout::LoadRequest;
use crate::traits::{LoadToken, Viewer};

// ===== RecordingViewer =====

pub struct RecordingViewer {
    attached: bool,
    requests: Vec<(LoadRequest, LoadToken)>,
}

impl RecordingViewer {
    pub fn new() -> Self {
        Self {
            attached: true,
            requests: Vec::new(),
        }
    }

    /// 模拟显示面缺失
    pub fn detach(&mut self) {
        self.attached = false;
    }

    pub fn requests(&self) -> &[(LoadRequest, LoadToken)] {
        &self.requests
    }

    pub fn last_path(&self) -> Option<&str> {
        self.requests.last().map(|(r, _)| r.content_path.as_str())
    }

    pub fn last_token(&self) -> Option<LoadToken> {
        self.requests.last().map(|(_, t)| *t)
    }
}

impl Viewer for RecordingViewer {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn navigate(&mut self, request: &LoadRequest, token: LoadToken) {
        self.requests.push((request.clone(), token));
    }
}

// ===== 日志收集 =====

thread_local! {
    static CAPTURED: RefCell<Option<Vec<(Level, String)>>> = const { RefCell::new(None) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        CAPTURED.with(|captured| {
            if let Some(records) = captured.borrow_mut().as_mut() {
                records.push((record.level(), record.args().to_string()));
            }
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// 运行 `f` 并返回其间当前线程输出的日志
///
/// 每个测试运行在自己的线程上，并行测试之间互不干扰。
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, Logs) {
    INSTALL.call_once(|| {
        if log::set_logger(&LOGGER).is_ok() {
            log::set_max_level(LevelFilter::Trace);
        }
    });
    CAPTURED.with(|captured| *captured.borrow_mut() = Some(Vec::new()));
    let result = f();
    let records = CAPTURED
        .with(|captured| captured.borrow_mut().take())
        .unwrap_or_default();
    (result, Logs(records))
}

/// 收集到的日志
#[derive(Debug)]
pub struct Logs(Vec<(Level, String)>);

impl Logs {
    /// 是否有指定级别且包含 `text` 的记录
    pub fn contains(&self, level: Level, text: &str) -> bool {
        self.0
            .iter()
            .any(|(lvl, message)| *lvl == level && message.contains(text))
    }

    /// 指定级别的记录数
    pub fn count(&self, level: Level) -> usize {
        self.0.iter().filter(|(lvl, _)| *lvl == level).count()
    }
}
