// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 字段提取辅助函数
//!
//! 文本规范化、选择器编译以及链接解析。

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::warn;
use url::Url;

pub use crate::utils::text::{char_len, truncate_chars};

/// 标题最大长度（字符）
pub const TITLE_MAX_CHARS: usize = 100;
/// 地点最大长度（字符）
pub const LOCATION_MAX_CHARS: usize = 100;
/// 摘要最大长度（字符）
pub const SUMMARY_MAX_CHARS: usize = 300;

static JOB_PATH_TOKEN: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"(?i)(job|career|position)").ok());

/// 编译一组静态选择器，无法解析的模式会被记录并跳过
pub fn compile_selectors(patterns: &[&'static str]) -> Vec<(&'static str, Selector)> {
    patterns
        .iter()
        .filter_map(|pattern| match Selector::parse(pattern) {
            Ok(selector) => Some((*pattern, selector)),
            Err(e) => {
                warn!("Skipping invalid selector {}: {:?}", pattern, e);
                None
            }
        })
        .collect()
}

/// 编译单个静态选择器
pub fn compile_selector(pattern: &'static str) -> Option<Selector> {
    compile_selectors(&[pattern])
        .into_iter()
        .next()
        .map(|(_, selector)| selector)
}

/// 元素的可见文本，连续空白折叠为单个空格
pub fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// 链接地址中是否包含 job / career / position 之类的路径片段
pub fn has_job_path_token(href: &str) -> bool {
    match JOB_PATH_TOKEN.as_ref() {
        Some(re) => re.is_match(href),
        None => {
            let lower = href.to_lowercase();
            ["job", "career", "position"]
                .iter()
                .any(|token| lower.contains(token))
        }
    }
}

/// 将 href 解析为绝对地址
///
/// 片段、`mailto:` 和 `javascript:` 链接返回 `None`；无法解析基准地址时原样返回 href。
pub fn resolve_href(base: Option<&Url>, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("javascript:")
        || href.starts_with("tel:")
    {
        return None;
    }

    match base {
        Some(base) => base
            .join(href)
            .ok()
            .filter(|url| url.scheme() == "http" || url.scheme() == "https")
            .map(|url| url.to_string()),
        None => Some(href.to_string()),
    }
}
