// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::models::tracked_site::TrackedSite;

/// 位置字段的缺省值
pub const LOCATION_NOT_SPECIFIED: &str = "Not specified";

/// 职位记录类型
///
/// 占位记录与真实职位同样会被持久化和导出，
/// 通过该字段加以区分。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    /// 从页面中提取到的真实职位
    #[default]
    Posting,
    /// 页面中没有找到任何候选职位，需要人工检查
    ExtractionExhausted,
    /// 渲染或提取过程出错
    ScrapingError,
}

impl ListingKind {
    pub fn is_placeholder(&self) -> bool {
        !matches!(self, ListingKind::Posting)
    }
}

/// 提取引擎产出的候选职位
///
/// 只包含页面上能获得的字段，尚未关联站点。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCandidate {
    pub title: String,
    pub location: String,
    pub summary: String,
    pub url: String,
    #[serde(default)]
    pub kind: ListingKind,
}

impl JobCandidate {
    /// 自动提取未找到任何职位时的占位记录
    pub fn exhausted(source_url: &str) -> Self {
        Self {
            title: "Unable to extract jobs automatically".to_string(),
            location: LOCATION_NOT_SPECIFIED.to_string(),
            summary: "No job listings could be identified on this page. Manual review needed."
                .to_string(),
            url: source_url.to_string(),
            kind: ListingKind::ExtractionExhausted,
        }
    }

    /// 渲染或提取失败时的占位记录
    pub fn scraping_error(source_url: &str, message: &str) -> Self {
        Self {
            title: "Scraping error".to_string(),
            location: LOCATION_NOT_SPECIFIED.to_string(),
            summary: format!("Error: {}", message),
            url: source_url.to_string(),
            kind: ListingKind::ScrapingError,
        }
    }

    /// 为候选职位打上所属站点与提取时间
    pub fn into_listing(self, site: &TrackedSite, fetched_at: DateTime<Utc>) -> JobListing {
        JobListing {
            title: self.title,
            location: self.location,
            summary: self.summary,
            url: self.url,
            site_id: site.id,
            company_name: site.company_name.clone(),
            fetched_at,
            kind: self.kind,
        }
    }
}

/// 职位记录实体
///
/// 每次刷新都会整体替换某个站点下的全部职位记录，
/// `company_name` 是提取时站点名称的冗余副本。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    /// 职位标题
    pub title: String,
    /// 工作地点
    pub location: String,
    /// 职位摘要
    pub summary: String,
    /// 职位链接，找不到时回退为来源页面地址
    pub url: String,
    /// 所属站点ID
    pub site_id: Uuid,
    /// 提取时的公司名称
    pub company_name: String,
    /// 产生该记录的提取时间
    pub fetched_at: DateTime<Utc>,
    /// 记录类型
    #[serde(default)]
    pub kind: ListingKind,
}
