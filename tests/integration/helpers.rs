// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use careerwatch::domain::repositories::storage_repository::StorageRepository;
use careerwatch::domain::services::extraction_service::ExtractionService;
use careerwatch::domain::services::refresh_service::RefreshService;
use careerwatch::domain::services::report_service::ReportService;
use careerwatch::domain::services::site_service::SiteService;
use careerwatch::engines::traits::{PageRenderer, RenderError, RenderedPage};
use careerwatch::infrastructure::report::XlsxReportWriter;
use careerwatch::infrastructure::repositories::job_repo_impl::JobRepositoryImpl;
use careerwatch::infrastructure::repositories::site_repo_impl::SiteRepositoryImpl;
use careerwatch::infrastructure::storage::InMemoryStorage;
use careerwatch::presentation::routes::AppServices;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const REPORT_FILE: &str = "jobs_report.xlsx";

/// What the stub browser does for a given url
#[derive(Clone)]
pub enum PageBehavior {
    Html(String),
    Fail(String),
    Panic,
}

/// Renderer serving canned pages instead of launching a browser
#[derive(Default)]
pub struct StubRenderer {
    pages: Mutex<HashMap<String, PageBehavior>>,
}

impl StubRenderer {
    pub fn set(&self, url: &str, behavior: PageBehavior) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), behavior);
    }
}

#[async_trait]
impl PageRenderer for StubRenderer {
    async fn render(&self, url: &str) -> Result<RenderedPage, RenderError> {
        let behavior = self.pages.lock().unwrap().get(url).cloned();
        match behavior {
            Some(PageBehavior::Html(html)) => Ok(RenderedPage {
                url: url.to_string(),
                final_url: url.to_string(),
                html,
                render_time_ms: 1,
            }),
            Some(PageBehavior::Fail(msg)) => Err(RenderError::Navigation(msg)),
            Some(PageBehavior::Panic) => panic!("browser process died while rendering {}", url),
            None => Err(RenderError::Navigation(format!("no stub page for {}", url))),
        }
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}

pub struct TestApp {
    pub storage: Arc<InMemoryStorage>,
    pub renderer: Arc<StubRenderer>,
    pub services: AppServices<SiteRepositoryImpl, JobRepositoryImpl>,
}

pub async fn create_test_app() -> TestApp {
    let storage = Arc::new(InMemoryStorage::new());
    let dyn_storage: Arc<dyn StorageRepository> = storage.clone();
    let renderer = Arc::new(StubRenderer::default());

    let site_repo = Arc::new(SiteRepositoryImpl::new(dyn_storage.clone()).await.unwrap());
    let job_repo = Arc::new(JobRepositoryImpl::new(dyn_storage.clone()).await.unwrap());

    let reports = Arc::new(ReportService::new(
        job_repo.clone(),
        dyn_storage,
        Arc::new(XlsxReportWriter::new()),
        REPORT_FILE,
    ));
    let refresh = Arc::new(RefreshService::new(
        site_repo.clone(),
        job_repo.clone(),
        Arc::new(ExtractionService::new(renderer.clone())),
        reports.clone(),
    ));
    let sites = Arc::new(SiteService::new(site_repo, job_repo.clone()));

    TestApp {
        storage,
        renderer,
        services: AppServices {
            sites,
            jobs: job_repo,
            refresh,
            reports,
        },
    }
}

/// Career page with one job card per title
pub fn job_board(titles: &[&str]) -> String {
    let cards: String = titles
        .iter()
        .map(|title| {
            format!(
                r#"<div class="job-card"><h3>{}</h3><span class="location">Remote</span><p>Join our growing team.</p></div>"#,
                title
            )
        })
        .collect();
    format!("<html><body><main>{}</main></body></html>", cards)
}
