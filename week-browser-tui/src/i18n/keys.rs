//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `help.*`**：目前只有帮助弹窗
//! 3. **跨组件复用归 `common.*`**：多处使用的通用词汇
//! 4. **键盘提示归 `hints.*`**：状态栏上的操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本（跨多处复用）
    pub common: CommonTexts,
    /// 左侧卡片列表
    pub cards: CardTexts,
    /// 右侧内容查看器
    pub viewer: ViewerTexts,
    /// 状态栏文本
    pub status_bar: StatusBarTexts,
    /// 键盘提示
    pub hints: HintTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub loading: &'static str,
    pub close: &'static str,
}

// ============================================================================
// 卡片列表
// ============================================================================

pub struct CardTexts {
    pub panel_title: &'static str,
    /// 卡片文本 = prefix + 序号 + suffix
    pub week_prefix: &'static str,
    pub week_suffix: &'static str,
}

impl CardTexts {
    /// 卡片上显示的周名称
    pub fn week_label(&self, index: u32) -> String {
        format!("{}{index}{}", self.week_prefix, self.week_suffix)
    }
}

// ============================================================================
// 内容查看器
// ============================================================================

pub struct ViewerTexts {
    /// 标题 = prefix + 序号 + suffix
    pub title_prefix: &'static str,
    pub title_suffix: &'static str,
    pub placeholder: &'static str,
    pub empty_document: &'static str,
    pub download_label: &'static str,
}

impl ViewerTexts {
    /// 查看器标题
    pub fn title(&self, index: u32) -> String {
        format!("{}{index}{}", self.title_prefix, self.title_suffix)
    }
}

// ============================================================================
// 状态栏
// ============================================================================

pub struct StatusBarTexts {
    pub saved_to: &'static str,
    pub download_failed: &'static str,
    pub downloading: &'static str,
}

// ============================================================================
// 键盘提示
// ============================================================================

pub struct HintTexts {
    pub select: &'static str,
    pub scroll: &'static str,
    pub download: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

// ============================================================================
// 帮助弹窗
// ============================================================================

pub struct HelpTexts {
    pub title: &'static str,
    pub section_weeks: &'static str,
    pub section_content: &'static str,
    pub section_other: &'static str,
    pub previous_week: &'static str,
    pub next_week: &'static str,
    pub click_card: &'static str,
    pub scroll_line: &'static str,
    pub scroll_page: &'static str,
    pub scroll_ends: &'static str,
    pub download: &'static str,
    pub toggle_theme: &'static str,
    pub toggle_language: &'static str,
    pub quit: &'static str,
}
