//! UI 组件

pub mod cards;
pub mod modal;
pub mod statusbar;
pub mod viewer;
