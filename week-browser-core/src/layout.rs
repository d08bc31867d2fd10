//! 资源布局
//!
//! 内容文件位于 `<content_root>/<content_stem><index>.html`，
//! 原始文件位于 `<download_root>/<file_name>`。

use serde::{Deserialize, Serialize};

use crate::registry;

fn default_content_root() -> String {
    "converted".to_string()
}

fn default_content_stem() -> String {
    "week".to_string()
}

fn default_download_root() -> String {
    "docs".to_string()
}

/// 资源布局配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceLayout {
    /// 预渲染 HTML 的目录
    #[serde(default = "default_content_root")]
    pub content_root: String,

    /// HTML 文件名前缀
    #[serde(default = "default_content_stem")]
    pub content_stem: String,

    /// 原始文件目录
    #[serde(default = "default_download_root")]
    pub download_root: String,
}

impl Default for ResourceLayout {
    fn default() -> Self {
        Self {
            content_root: default_content_root(),
            content_stem: default_content_stem(),
            download_root: default_download_root(),
        }
    }
}

impl ResourceLayout {
    /// 内容资源路径
    #[must_use]
    pub fn content_path(&self, index: u32) -> String {
        format!("{}/{}{index}.html", trim_root(&self.content_root), self.content_stem)
    }

    /// 原始文件路径，注册表无映射时返回 `None`
    #[must_use]
    pub fn download_path(&self, index: u32) -> Option<String> {
        registry::lookup(index).map(|name| format!("{}/{name}", trim_root(&self.download_root)))
    }

    /// 生成一次加载请求
    #[must_use]
    pub fn request(&self, index: u32) -> LoadRequest {
        LoadRequest {
            index,
            content_path: self.content_path(index),
            download_path: self.download_path(index),
        }
    }
}

fn trim_root(root: &str) -> &str {
    root.trim_end_matches('/')
}

/// 加载请求（每次加载时重新计算）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub index: u32,
    pub content_path: String,
    pub download_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_paths_match_site_layout() {
        let layout = ResourceLayout::default();
        assert_eq!(layout.content_path(1), "converted/week1.html");
        assert_eq!(layout.download_path(1).as_deref(), Some("docs/Java-week-1.docx"));
        assert_eq!(layout.download_path(6).as_deref(), Some("docs/java-week-6.docx"));
    }

    #[test]
    fn unmapped_index_has_no_download() {
        let request = ResourceLayout::default().request(13);
        assert_eq!(request.content_path, "converted/week13.html");
        assert_eq!(request.download_path, None);
    }

    #[test]
    fn trailing_slash_in_root_is_ignored() {
        let layout = ResourceLayout {
            content_root: "site/html/".to_string(),
            content_stem: "item".to_string(),
            download_root: "files/".to_string(),
        };
        assert_eq!(layout.content_path(4), "site/html/item4.html");
        assert_eq!(layout.download_path(4).as_deref(), Some("files/Java-week-4.docx"));
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let layout: ResourceLayout =
            serde_json::from_str(r#"{ "contentRoot": "out" }"#).unwrap_or_default();
        assert_eq!(layout.content_root, "out");
        assert_eq!(layout.content_stem, "week");
        assert_eq!(layout.download_root, "docs");
    }
}
