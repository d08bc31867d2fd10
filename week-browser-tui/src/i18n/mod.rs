//! 界面文案
//!
//! 每种语言一份 [`Translations`] 常量，当前语言保存在原子变量中，
//! 渲染时通过 [`t`] 取用。语言由配置文件的 `language` 字段初始化，运行时按 `L` 切换。

use std::sync::atomic::{AtomicU8, Ordering};

mod en_us;
pub mod keys;
mod zh_cn;

pub use keys::*;

/// 界面语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Language {
    #[default]
    EnUs = 0,
    ZhCn = 1,
}

impl Language {
    /// 配置文件中使用的语言代码
    pub fn code(self) -> &'static str {
        match self {
            Language::EnUs => "en-US",
            Language::ZhCn => "zh-CN",
        }
    }

    /// 解析语言代码，也接受不带地区的简写
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en-US" | "en" => Some(Language::EnUs),
            "zh-CN" | "zh" => Some(Language::ZhCn),
            _ => None,
        }
    }

    /// 切换到另一种语言
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::EnUs => Language::ZhCn,
            Language::ZhCn => Language::EnUs,
        }
    }

    /// 该语言的文案
    pub fn translations(self) -> &'static Translations {
        match self {
            Language::EnUs => &en_us::TRANSLATIONS,
            Language::ZhCn => &zh_cn::TRANSLATIONS,
        }
    }
}

static CURRENT_LANGUAGE: AtomicU8 = AtomicU8::new(Language::EnUs as u8);

/// 当前语言的文案
pub fn t() -> &'static Translations {
    current_language().translations()
}

pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang as u8, Ordering::Relaxed);
}

pub fn current_language() -> Language {
    if CURRENT_LANGUAGE.load(Ordering::Relaxed) == Language::ZhCn as u8 {
        Language::ZhCn
    } else {
        Language::EnUs
    }
}
