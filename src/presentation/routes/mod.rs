// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    routing::{delete, get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::services::refresh_service::RefreshService;
use crate::domain::services::report_service::ReportService;
use crate::domain::services::site_service::SiteService;
use crate::presentation::handlers::{job_handler, refresh_handler, report_handler, site_handler};

/// 路由依赖的服务集合
pub struct AppServices<S: SiteRepository, J: JobRepository> {
    pub sites: Arc<SiteService<S, J>>,
    pub jobs: Arc<J>,
    pub refresh: Arc<RefreshService<S, J>>,
    pub reports: Arc<ReportService<J>>,
}

impl<S: SiteRepository, J: JobRepository> Clone for AppServices<S, J> {
    fn clone(&self) -> Self {
        Self {
            sites: self.sites.clone(),
            jobs: self.jobs.clone(),
            refresh: self.refresh.clone(),
            reports: self.reports.clone(),
        }
    }
}

/// 创建应用路由
///
/// # 参数
///
/// * `services` - 处理器使用的服务，以 `Extension` 形式注入
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<S, J>(services: AppServices<S, J>) -> Router
where
    S: SiteRepository + 'static,
    J: JobRepository + 'static,
{
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route(
            "/api/sites",
            get(site_handler::list_sites::<S, J>).post(site_handler::create_site::<S, J>),
        )
        .route("/api/sites/{id}", delete(site_handler::delete_site::<S, J>))
        .route(
            "/api/sites/{id}/refresh",
            post(refresh_handler::refresh_site::<S, J>),
        )
        .route(
            "/api/sites/{id}/jobs",
            get(job_handler::list_site_jobs::<S, J>),
        )
        .route("/api/refresh", post(refresh_handler::refresh_all::<S, J>))
        .route("/api/jobs", get(job_handler::list_jobs::<J>))
        .route("/api/export", post(report_handler::export_report::<J>))
        .route(
            "/api/export/download",
            get(report_handler::download_report::<J>),
        )
        .layer(Extension(services.sites))
        .layer(Extension(services.jobs))
        .layer(Extension(services.refresh))
        .layer(Extension(services.reports));

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
