use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::domain::extraction::{JobExtractor, SourcePage};
use crate::domain::models::job_listing::JobCandidate;
use crate::engines::traits::PageRenderer;
use crate::utils::errors::panic_message;

/// 提取服务
///
/// 渲染页面并在 DOM 快照上运行提取级联。
/// 该服务从不向调用方返回错误：渲染失败会变成一条 "scraping error" 占位记录，
/// 找不到任何职位时返回一条需要人工检查的占位记录，因此结果至少包含一条记录。
pub struct ExtractionService {
    renderer: Arc<dyn PageRenderer>,
    extractor: JobExtractor,
}

impl ExtractionService {
    pub fn new(renderer: Arc<dyn PageRenderer>) -> Self {
        Self::with_extractor(renderer, JobExtractor::default())
    }

    pub fn with_extractor(renderer: Arc<dyn PageRenderer>, extractor: JobExtractor) -> Self {
        Self {
            renderer,
            extractor,
        }
    }

    /// 提取页面上的职位
    #[instrument(skip(self), fields(renderer = self.renderer.name()))]
    pub async fn extract_jobs(&self, url: &str) -> Vec<JobCandidate> {
        let page = match self.renderer.render(url).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Rendering failed: {}", e);
                metrics::counter!("careerwatch_extraction_total", "strategy" => "error")
                    .increment(1);
                return vec![JobCandidate::scraping_error(url, &e.to_string())];
            }
        };

        let source = SourcePage::new(url).with_base(&page.final_url);
        let extractor = &self.extractor;
        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| {
            extractor.run_page(&page.html, &source)
        })) {
            Ok(outcome) => outcome,
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                error!("Extraction panicked: {}", message);
                metrics::counter!("careerwatch_extraction_total", "strategy" => "error")
                    .increment(1);
                return vec![JobCandidate::scraping_error(url, &message)];
            }
        };
        let strategy = outcome.strategy();
        metrics::counter!("careerwatch_extraction_total", "strategy" => strategy).increment(1);

        let jobs = outcome.into_candidates(url);
        info!(strategy = strategy, jobs = jobs.len(), "Extraction finished");
        jobs
    }
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
