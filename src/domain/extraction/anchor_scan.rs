// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::debug;

use crate::domain::extraction::cascade::{ExtractionStrategy, SourcePage};
use crate::domain::extraction::fields::{
    char_len, compile_selector, element_text, has_job_path_token, resolve_href, truncate_chars,
    SUMMARY_MAX_CHARS, TITLE_MAX_CHARS,
};
use crate::domain::models::job_listing::{JobCandidate, ListingKind, LOCATION_NOT_SPECIFIED};

/// 链接扫描最多保留的职位数
pub const MAX_ANCHOR_CANDIDATES: usize = 15;
/// 链接文本的最小长度（含）
pub const MIN_LINK_TEXT_CHARS: usize = 10;
/// 链接文本的最大长度（不含）
pub const MAX_LINK_TEXT_CHARS: usize = 100;

static ANCHOR_SELECTOR: Lazy<Option<Selector>> = Lazy::new(|| compile_selector("a[href]"));

/// 链接扫描策略
///
/// 扫描页面上的全部链接，保留文本长度合适且地址带有职位路径片段的链接。
#[derive(Debug, Default)]
pub struct AnchorScanStrategy;

impl ExtractionStrategy for AnchorScanStrategy {
    fn name(&self) -> &'static str {
        "anchor_scan"
    }

    fn extract(&self, document: &Html, source: &SourcePage) -> Vec<JobCandidate> {
        let Some(selector) = ANCHOR_SELECTOR.as_ref() else {
            return Vec::new();
        };

        let candidates: Vec<JobCandidate> = document
            .select(selector)
            .filter_map(|anchor| {
                let href = anchor.value().attr("href")?;
                if !has_job_path_token(href) {
                    return None;
                }

                let text = element_text(&anchor);
                if !(MIN_LINK_TEXT_CHARS..MAX_LINK_TEXT_CHARS).contains(&char_len(&text)) {
                    return None;
                }

                let url = resolve_href(source.base(), href)
                    .unwrap_or_else(|| source.url().to_string());

                Some(JobCandidate {
                    title: truncate_chars(&text, TITLE_MAX_CHARS),
                    location: LOCATION_NOT_SPECIFIED.to_string(),
                    summary: truncate_chars(&text, SUMMARY_MAX_CHARS),
                    url,
                    kind: ListingKind::Posting,
                })
            })
            .take(MAX_ANCHOR_CANDIDATES)
            .collect();

        debug!(kept = candidates.len(), "Anchor scan finished");
        candidates
    }
}
