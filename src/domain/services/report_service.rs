// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domain::models::job_listing::JobListing;
use crate::domain::models::report::{Cell, ExportResult, ReportLayout, Sheet};
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::utils::errors::ReportError;
use crate::utils::text::truncate_chars;

/// 工作表名称的最大长度
pub const SHEET_NAME_MAX_CHARS: usize = 31;
pub const SUMMARY_SHEET: &str = "Summary";
pub const ALL_JOBS_SHEET: &str = "All Jobs";

const SUMMARY_HEADERS: &[&str] = &["Company", "Job Count", "Last Updated"];
const ALL_JOBS_HEADERS: &[&str] = &[
    "Company",
    "Title",
    "Location",
    "Summary",
    "URL",
    "Site ID",
    "Fetched At",
];
const COMPANY_HEADERS: &[&str] = &["Title", "Location", "Summary", "URL", "Fetched At"];

/// 报表写出器特质
///
/// 将布局渲染为具体的文件格式
pub trait ReportWriter: Send + Sync {
    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, ReportError>;
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// 由公司名称生成工作表名称
///
/// 替换宿主格式不允许的字符并截断到 31 个字符。截断造成的重名不做区分。
///
/// 名称首尾不能是单引号，因此在截断之后再修剪。
pub fn sheet_name_for(company: &str) -> String {
    let cleaned: String = company
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    let truncated = truncate_chars(&cleaned, SHEET_NAME_MAX_CHARS);
    let name = truncated.trim_matches(|c: char| c.is_whitespace() || c == '\'');
    if name.is_empty() {
        "Unknown".to_string()
    } else {
        name.to_string()
    }
}

/// 由全部职位构建报表布局
///
/// 没有职位时返回 `None`。公司按名称排序，分组键为职位上冗余的公司名称。
pub fn build_report(jobs: &[JobListing]) -> Option<ReportLayout> {
    if jobs.is_empty() {
        return None;
    }

    let mut by_company: BTreeMap<&str, Vec<&JobListing>> = BTreeMap::new();
    for job in jobs {
        by_company
            .entry(job.company_name.as_str())
            .or_default()
            .push(job);
    }

    let summary_rows = by_company
        .iter()
        .map(|(company, company_jobs)| {
            let latest = company_jobs
                .iter()
                .map(|job| job.fetched_at)
                .max()
                .map(|ts| format_timestamp(&ts))
                .unwrap_or_default();
            vec![
                Cell::from(*company),
                Cell::from(company_jobs.len()),
                Cell::from(latest),
            ]
        })
        .collect();

    let all_rows = jobs
        .iter()
        .map(|job| {
            vec![
                Cell::from(job.company_name.as_str()),
                Cell::from(job.title.as_str()),
                Cell::from(job.location.as_str()),
                Cell::from(job.summary.as_str()),
                Cell::from(job.url.as_str()),
                Cell::from(job.site_id.to_string()),
                Cell::from(format_timestamp(&job.fetched_at)),
            ]
        })
        .collect();

    let mut sheets = vec![
        Sheet {
            name: SUMMARY_SHEET.to_string(),
            headers: SUMMARY_HEADERS.to_vec(),
            rows: summary_rows,
        },
        Sheet {
            name: ALL_JOBS_SHEET.to_string(),
            headers: ALL_JOBS_HEADERS.to_vec(),
            rows: all_rows,
        },
    ];

    // Sheet names are case-insensitive in the target format
    let mut used: HashSet<String> = sheets.iter().map(|s| s.name.to_lowercase()).collect();
    // Reserved by Excel
    used.insert("history".to_string());
    for (company, company_jobs) in &by_company {
        let name = sheet_name_for(company);
        if !used.insert(name.to_lowercase()) {
            warn!(
                company = *company,
                sheet = %name,
                "Sheet name already taken, company sheet skipped"
            );
            continue;
        }

        let rows = company_jobs
            .iter()
            .map(|job| {
                vec![
                    Cell::from(job.title.as_str()),
                    Cell::from(job.location.as_str()),
                    Cell::from(job.summary.as_str()),
                    Cell::from(job.url.as_str()),
                    Cell::from(format_timestamp(&job.fetched_at)),
                ]
            })
            .collect();
        sheets.push(Sheet {
            name,
            headers: COMPANY_HEADERS.to_vec(),
            rows,
        });
    }

    Some(ReportLayout {
        sheets,
        job_count: jobs.len(),
        company_count: by_company.len(),
    })
}

/// 报表服务
///
/// 读取全部职位，生成报表并整体覆盖存储中的报表文件。
pub struct ReportService<J: JobRepository> {
    jobs: Arc<J>,
    storage: Arc<dyn StorageRepository>,
    writer: Arc<dyn ReportWriter>,
    file_name: String,
}

impl<J: JobRepository> ReportService<J> {
    pub fn new(
        jobs: Arc<J>,
        storage: Arc<dyn StorageRepository>,
        writer: Arc<dyn ReportWriter>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            jobs,
            storage,
            writer,
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// 生成并写出报表
    ///
    /// 没有职位时返回失败结果，不会覆盖已有的报表文件
    #[instrument(skip(self), fields(file = %self.file_name))]
    pub async fn export(&self) -> Result<ExportResult, ReportError> {
        let jobs = self.jobs.list_all().await?;

        let Some(layout) = build_report(&jobs) else {
            info!("No jobs to export, keeping previous report");
            metrics::counter!("careerwatch_report_builds_total", "outcome" => "empty")
                .increment(1);
            return Ok(ExportResult::empty());
        };

        let bytes = self.writer.render(&layout)?;
        self.storage.save(&self.file_name, &bytes).await?;

        metrics::counter!("careerwatch_report_builds_total", "outcome" => "written").increment(1);
        info!(
            jobs = layout.job_count,
            companies = layout.company_count,
            bytes = bytes.len(),
            "Report written"
        );
        Ok(ExportResult::written(&self.file_name, &layout))
    }

    /// 最近一次写出的报表内容
    pub async fn latest(&self) -> Result<Option<Vec<u8>>, ReportError> {
        Ok(self.storage.get(&self.file_name).await?)
    }
}

#[cfg(test)]
#[path = "report_service_test.rs"]
mod tests;
