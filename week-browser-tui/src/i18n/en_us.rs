//! 英文翻译 (en-US)

use super::keys::{
    CardTexts, CommonTexts, HelpTexts, HintTexts, StatusBarTexts, Translations, ViewerTexts,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Week Browser",
        loading: "Loading...",
        close: "Close",
    },

    cards: CardTexts {
        panel_title: "Weeks",
        week_prefix: "Week ",
        week_suffix: "",
    },

    viewer: ViewerTexts {
        title_prefix: "Week ",
        title_suffix: " Content",
        placeholder: "Select a week to view its content",
        empty_document: "This document has no text content",
        download_label: "Download original",
    },

    status_bar: StatusBarTexts {
        saved_to: "Saved to",
        download_failed: "Download failed",
        downloading: "Downloading",
    },

    hints: HintTexts {
        select: "Select",
        scroll: "Scroll",
        download: "Download",
        help: "Help",
        quit: "Quit",
    },

    help: HelpTexts {
        title: "Help",
        section_weeks: "Weeks",
        section_content: "Content",
        section_other: "Other",
        previous_week: "Previous week",
        next_week: "Next week",
        click_card: "Open week",
        scroll_line: "Scroll",
        scroll_page: "Scroll page",
        scroll_ends: "Top / bottom",
        download: "Download original",
        toggle_theme: "Toggle theme",
        toggle_language: "Toggle language",
        quit: "Quit",
    },
};
