// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::domain::extraction::cascade::{ExtractionStrategy, SourcePage};
use crate::domain::extraction::fields::{
    char_len, compile_selector, compile_selectors, element_text, resolve_href, truncate_chars,
    LOCATION_MAX_CHARS, SUMMARY_MAX_CHARS, TITLE_MAX_CHARS,
};
use crate::domain::models::job_listing::{JobCandidate, ListingKind, LOCATION_NOT_SPECIFIED};

/// 每页最多处理的匹配元素数
pub const MAX_SELECTOR_CANDIDATES: usize = 20;
/// 候选元素原始文本的最小长度（含）
pub const MIN_RAW_TEXT_CHARS: usize = 10;
/// 候选元素原始文本的最大长度（不含）
pub const MAX_RAW_TEXT_CHARS: usize = 200;
/// 标题必须长于该长度
pub const MIN_TITLE_CHARS: usize = 3;

/// 按优先级排列的职位容器选择器，第一个有匹配的模式生效
pub const JOB_CONTAINER_PATTERNS: &[&str] = &[
    "a[href*='job']",
    "a[href*='career']",
    "a[href*='position']",
    "[class*='job']",
    "[id*='job']",
    "[class*='position']",
    "[class*='opening']",
    "article",
    "[class*='listing']",
    "[class*='posting']",
    "[class*='vacancy']",
    "li[class*='item']",
];

static CONTAINER_SELECTORS: Lazy<Vec<(&'static str, Selector)>> =
    Lazy::new(|| compile_selectors(JOB_CONTAINER_PATTERNS));

static TITLE_SELECTOR: Lazy<Option<Selector>> = Lazy::new(|| {
    compile_selector("h1, h2, h3, h4, h5, h6, [class*='title'], [class*='Title'], [id*='title']")
});

static LOCATION_SELECTOR: Lazy<Option<Selector>> = Lazy::new(|| {
    compile_selector(
        "[class*='location'], [class*='Location'], [class*='city'], [id*='location'], [id*='city']",
    )
});

static SUMMARY_SELECTOR: Lazy<Option<Selector>> = Lazy::new(|| {
    compile_selector(
        "[class*='description'], [class*='summary'], [id*='description'], [id*='summary']",
    )
});

static PARAGRAPH_SELECTOR: Lazy<Option<Selector>> = Lazy::new(|| compile_selector("p"));

static LINK_SELECTOR: Lazy<Option<Selector>> = Lazy::new(|| compile_selector("a[href]"));

/// 选择器级联策略
///
/// 依次尝试 [`JOB_CONTAINER_PATTERNS`]，使用第一个至少匹配一个元素的模式，
/// 之后的模式不再尝试。
#[derive(Debug, Default)]
pub struct SelectorCascadeStrategy;

impl SelectorCascadeStrategy {
    /// 返回第一个有匹配的模式及其匹配的元素
    fn first_matching<'a>(document: &'a Html) -> Option<(&'static str, Vec<ElementRef<'a>>)> {
        CONTAINER_SELECTORS.iter().find_map(|(pattern, selector)| {
            let matched: Vec<ElementRef<'a>> = document
                .select(selector)
                .take(MAX_SELECTOR_CANDIDATES)
                .collect();
            if matched.is_empty() {
                None
            } else {
                Some((*pattern, matched))
            }
        })
    }
}

impl ExtractionStrategy for SelectorCascadeStrategy {
    fn name(&self) -> &'static str {
        "selector_cascade"
    }

    fn extract(&self, document: &Html, source: &SourcePage) -> Vec<JobCandidate> {
        let Some((pattern, elements)) = Self::first_matching(document) else {
            debug!("No container pattern matched");
            return Vec::new();
        };

        let candidates: Vec<JobCandidate> = elements
            .iter()
            .filter_map(|element| candidate_from_element(element, source))
            .collect();

        debug!(
            pattern = pattern,
            matched = elements.len(),
            kept = candidates.len(),
            "Selector cascade finished"
        );
        candidates
    }
}

fn first_text(element: &ElementRef<'_>, selector: &Option<Selector>) -> Option<String> {
    let selector = selector.as_ref()?;
    element
        .select(selector)
        .map(|nested| element_text(&nested))
        .find(|text| !text.is_empty())
}

fn element_link(element: &ElementRef<'_>, source: &SourcePage) -> Option<String> {
    if element.value().name() == "a" {
        if let Some(url) = element
            .value()
            .attr("href")
            .and_then(|href| resolve_href(source.base(), href))
        {
            return Some(url);
        }
    }

    let selector = LINK_SELECTOR.as_ref()?;
    element
        .select(selector)
        .filter_map(|link| link.value().attr("href"))
        .find_map(|href| resolve_href(source.base(), href))
}

/// 从单个匹配元素构造候选职位
///
/// 文本长度不在 `[10, 200)` 内或标题不超过 3 个字符时返回 `None`。
pub fn candidate_from_element(
    element: &ElementRef<'_>,
    source: &SourcePage,
) -> Option<JobCandidate> {
    let raw_text = element_text(element);
    let raw_len = char_len(&raw_text);
    if !(MIN_RAW_TEXT_CHARS..MAX_RAW_TEXT_CHARS).contains(&raw_len) {
        return None;
    }

    let title = first_text(element, &TITLE_SELECTOR)
        .map(|title| truncate_chars(&title, TITLE_MAX_CHARS))
        .unwrap_or_else(|| truncate_chars(&raw_text, TITLE_MAX_CHARS));
    if char_len(&title) <= MIN_TITLE_CHARS {
        return None;
    }

    let location = first_text(element, &LOCATION_SELECTOR)
        .map(|location| truncate_chars(&location, LOCATION_MAX_CHARS))
        .unwrap_or_else(|| LOCATION_NOT_SPECIFIED.to_string());

    let summary = first_text(element, &SUMMARY_SELECTOR)
        .or_else(|| first_text(element, &PARAGRAPH_SELECTOR))
        .unwrap_or_else(|| raw_text.clone());

    let url = element_link(element, source).unwrap_or_else(|| source.url().to_string());

    Some(JobCandidate {
        title,
        location,
        summary: truncate_chars(&summary, SUMMARY_MAX_CHARS),
        url,
        kind: ListingKind::Posting,
    })
}
