// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use careerwatch::config::settings::Settings;
use careerwatch::domain::services::extraction_service::ExtractionService;
use careerwatch::domain::services::refresh_service::RefreshService;
use careerwatch::domain::services::report_service::ReportService;
use careerwatch::domain::services::site_service::SiteService;
use careerwatch::engines::chromium_renderer::ChromiumRenderer;
use careerwatch::infrastructure::report::XlsxReportWriter;
use careerwatch::infrastructure::repositories::job_repo_impl::JobRepositoryImpl;
use careerwatch::infrastructure::repositories::site_repo_impl::SiteRepositoryImpl;
use careerwatch::infrastructure::storage::create_storage_repository;
use careerwatch::presentation::routes::{self, AppServices};
use careerwatch::utils::telemetry;
use careerwatch::workers::RefreshWorker;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting careerwatch...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    careerwatch::infrastructure::metrics::init_metrics(&settings.metrics);

    // 3. Storage and repositories
    let storage = create_storage_repository(&settings.storage)?;
    let site_repo = Arc::new(SiteRepositoryImpl::new(storage.clone()).await?);
    let job_repo = Arc::new(JobRepositoryImpl::new(storage.clone()).await?);
    info!("Storage initialized ({})", settings.storage.storage_type);

    // 4. Services
    let renderer = Arc::new(ChromiumRenderer::new(settings.renderer.clone()));
    let extraction = Arc::new(ExtractionService::new(renderer));
    let reports = Arc::new(ReportService::new(
        job_repo.clone(),
        storage.clone(),
        Arc::new(XlsxReportWriter::new()),
        settings.report.file_name.clone(),
    ));
    let refresh = Arc::new(RefreshService::new(
        site_repo.clone(),
        job_repo.clone(),
        extraction,
        reports.clone(),
    ));
    let sites = Arc::new(SiteService::new(site_repo, job_repo.clone()));

    // 5. Start worker
    if settings.scheduler.enabled {
        RefreshWorker::new(
            refresh.clone(),
            Duration::from_secs(settings.scheduler.interval_secs),
        )
        .start();
    }

    // 6. Start HTTP server
    let app = routes::routes(AppServices {
        sites,
        jobs: job_repo,
        refresh,
        reports,
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
