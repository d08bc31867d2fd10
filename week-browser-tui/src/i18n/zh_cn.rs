//! 简体中文翻译 (zh-CN)

use super::keys::{
    CardTexts, CommonTexts, HelpTexts, HintTexts, StatusBarTexts, Translations, ViewerTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "周课程浏览器",
        loading: "加载中...",
        close: "关闭",
    },

    cards: CardTexts {
        panel_title: "课程周",
        week_prefix: "第 ",
        week_suffix: " 周",
    },

    viewer: ViewerTexts {
        title_prefix: "第 ",
        title_suffix: " 周内容",
        placeholder: "选择一周以查看内容",
        empty_document: "该文档没有文本内容",
        download_label: "下载原始文件",
    },

    status_bar: StatusBarTexts {
        saved_to: "已保存到",
        download_failed: "下载失败",
        downloading: "正在下载",
    },

    hints: HintTexts {
        select: "选择",
        scroll: "滚动",
        download: "下载",
        help: "帮助",
        quit: "退出",
    },

    help: HelpTexts {
        title: "帮助",
        section_weeks: "课程周",
        section_content: "内容",
        section_other: "其他",
        previous_week: "上一周",
        next_week: "下一周",
        click_card: "打开该周",
        scroll_line: "滚动",
        scroll_page: "翻页",
        scroll_ends: "顶部 / 底部",
        download: "下载原始文件",
        toggle_theme: "切换主题",
        toggle_language: "切换语言",
        quit: "退出",
    },
};
