// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use futures::FutureExt;
use serde::Serialize;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::domain::models::job_listing::JobListing;
use crate::domain::models::tracked_site::TrackedSite;
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::services::extraction_service::ExtractionService;
use crate::domain::services::report_service::ReportService;
use crate::utils::errors::{panic_message, RefreshError};

/// 单个站点刷新的结果摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshSummary {
    pub site_id: Uuid,
    pub company_name: String,
    pub job_count: usize,
    /// 结果中占位记录的数量
    pub placeholder_count: usize,
    pub refreshed_at: DateTime<Utc>,
}

/// 批量刷新中单个站点的结果条目
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshOutcome {
    pub site_id: Uuid,
    pub company_name: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RefreshOutcome {
    fn succeeded(summary: &RefreshSummary) -> Self {
        Self {
            site_id: summary.site_id,
            company_name: summary.company_name.clone(),
            success: true,
            job_count: Some(summary.job_count),
            error: None,
        }
    }

    fn failed(site: &TrackedSite, error: String) -> Self {
        Self {
            site_id: site.id,
            company_name: site.company_name.clone(),
            success: false,
            job_count: None,
            error: Some(error),
        }
    }
}

/// 刷新编排服务
///
/// 对站点执行 提取 → 打标 → 替换职位 → 更新站点元数据 → 生成报表。
/// 提取从不失败，因此这里只有站点查找和持久化错误会返回给调用方。
pub struct RefreshService<S: SiteRepository, J: JobRepository> {
    sites: Arc<S>,
    jobs: Arc<J>,
    extraction: Arc<ExtractionService>,
    reports: Arc<ReportService<J>>,
}

impl<S: SiteRepository, J: JobRepository> RefreshService<S, J> {
    pub fn new(
        sites: Arc<S>,
        jobs: Arc<J>,
        extraction: Arc<ExtractionService>,
        reports: Arc<ReportService<J>>,
    ) -> Self {
        Self {
            sites,
            jobs,
            extraction,
            reports,
        }
    }

    /// 刷新单个站点并重新生成报表
    #[instrument(skip(self))]
    pub async fn refresh_site(&self, site_id: Uuid) -> Result<RefreshSummary, RefreshError> {
        let site = self
            .sites
            .get(site_id)
            .await?
            .ok_or(RefreshError::SiteNotFound(site_id))?;

        let summary = match self.refresh_tracked(site).await {
            Ok(summary) => summary,
            Err(e) => {
                metrics::counter!("careerwatch_refresh_total", "outcome" => "failed").increment(1);
                return Err(e);
            }
        };
        metrics::counter!("careerwatch_refresh_total", "outcome" => "success").increment(1);

        self.rebuild_report().await;
        Ok(summary)
    }

    /// 依次刷新全部站点
    ///
    /// 单个站点的错误或 panic 只影响该站点的结果条目，处理继续进行。
    /// 全部站点处理完后生成一次报表。
    #[instrument(skip(self))]
    pub async fn refresh_all(&self) -> Result<Vec<RefreshOutcome>, RefreshError> {
        let sites = self.sites.list().await?;
        info!("Refreshing {} sites", sites.len());

        let mut outcomes = Vec::with_capacity(sites.len());
        for site in sites {
            let result = AssertUnwindSafe(self.refresh_tracked(site.clone()))
                .catch_unwind()
                .await;

            let outcome = match result {
                Ok(Ok(summary)) => {
                    metrics::counter!("careerwatch_refresh_total", "outcome" => "success")
                        .increment(1);
                    RefreshOutcome::succeeded(&summary)
                }
                Ok(Err(e)) => {
                    warn!(site_id = %site.id, "Site refresh failed: {}", e);
                    metrics::counter!("careerwatch_refresh_total", "outcome" => "failed")
                        .increment(1);
                    RefreshOutcome::failed(&site, e.to_string())
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    error!(site_id = %site.id, "Site refresh panicked: {}", message);
                    metrics::counter!("careerwatch_refresh_total", "outcome" => "panicked")
                        .increment(1);
                    RefreshOutcome::failed(&site, message)
                }
            };
            outcomes.push(outcome);
        }

        self.rebuild_report().await;
        Ok(outcomes)
    }

    #[instrument(skip(self, site), fields(site_id = %site.id, url = %site.url))]
    async fn refresh_tracked(&self, site: TrackedSite) -> Result<RefreshSummary, RefreshError> {
        let candidates = self.extraction.extract_jobs(&site.url).await;

        // Site may have been deleted while the page was rendering
        let mut current = self
            .sites
            .get(site.id)
            .await?
            .ok_or(RefreshError::SiteNotFound(site.id))?;

        let fetched_at = Utc::now();
        let listings: Vec<JobListing> = candidates
            .into_iter()
            .map(|candidate| candidate.into_listing(&current, fetched_at))
            .collect();
        let job_count = listings.len();
        let placeholder_count = listings
            .iter()
            .filter(|job| job.kind.is_placeholder())
            .count();

        self.jobs.replace_for_site(current.id, listings).await?;

        current.mark_refreshed(fetched_at, job_count);
        let summary = RefreshSummary {
            site_id: current.id,
            company_name: current.company_name.clone(),
            job_count,
            placeholder_count,
            refreshed_at: fetched_at,
        };
        self.sites.put(current).await?;

        info!(
            jobs = job_count,
            placeholders = placeholder_count,
            "Site refreshed"
        );
        Ok(summary)
    }

    async fn rebuild_report(&self) {
        match self.reports.export().await {
            Ok(result) if result.success => {}
            Ok(result) => info!("Report not rebuilt: {}", result.message),
            Err(e) => error!("Report rebuild failed: {}", e),
        }
    }
}

#[cfg(test)]
#[path = "refresh_service_test.rs"]
mod tests;
