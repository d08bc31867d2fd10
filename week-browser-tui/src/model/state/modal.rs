//! 弹窗状态

/// 弹窗类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Help,
}

/// 当前打开的弹窗，同一时间最多一个
#[derive(Debug, Default)]
pub struct ModalState(Option<Modal>);

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_help(&mut self) {
        self.0 = Some(Modal::Help);
    }

    pub fn close(&mut self) {
        self.0 = None;
    }

    pub fn active(&self) -> Option<Modal> {
        self.0
    }

    pub fn is_open(&self) -> bool {
        self.0.is_some()
    }
}
