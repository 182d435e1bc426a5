// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use scraper::Html;
use url::Url;

use crate::domain::extraction::anchor_scan::AnchorScanStrategy;
use crate::domain::extraction::selector_cascade::SelectorCascadeStrategy;
use crate::domain::models::job_listing::JobCandidate;

/// 被提取的来源页面
#[derive(Debug, Clone)]
pub struct SourcePage {
    url: String,
    base: Option<Url>,
}

impl SourcePage {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let base = Url::parse(&url).ok();
        Self { url, base }
    }

    /// 使用重定向后的地址解析相对链接，回退值仍为原始地址
    pub fn with_base(mut self, final_url: &str) -> Self {
        if let Ok(base) = Url::parse(final_url) {
            self.base = Some(base);
        }
        self
    }

    /// 原始地址，作为职位链接的回退值
    pub fn url(&self) -> &str {
        &self.url
    }

    /// 用于解析相对链接的基准地址
    pub fn base(&self) -> Option<&Url> {
        self.base.as_ref()
    }
}

/// 提取策略特质
///
/// 策略是纯函数：只读取 DOM 快照，返回候选职位（可能为空）。
pub trait ExtractionStrategy: Send + Sync {
    /// 策略名称
    fn name(&self) -> &'static str;

    /// 从文档中提取候选职位
    fn extract(&self, document: &Html, source: &SourcePage) -> Vec<JobCandidate>;
}

/// 级联提取结果
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractionOutcome {
    /// 某个策略产出了至少一条候选职位
    Found {
        strategy: &'static str,
        jobs: Vec<JobCandidate>,
    },
    /// 所有策略都没有产出
    Exhausted,
}

impl ExtractionOutcome {
    pub fn strategy(&self) -> &'static str {
        match self {
            ExtractionOutcome::Found { strategy, .. } => strategy,
            ExtractionOutcome::Exhausted => "exhausted",
        }
    }

    /// 转换为候选职位列表，耗尽时返回单条占位记录
    pub fn into_candidates(self, source_url: &str) -> Vec<JobCandidate> {
        match self {
            ExtractionOutcome::Found { jobs, .. } => jobs,
            ExtractionOutcome::Exhausted => vec![JobCandidate::exhausted(source_url)],
        }
    }
}

/// 职位提取器
///
/// 按顺序尝试各个策略，第一个产出非空结果的策略胜出。
pub struct JobExtractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Default for JobExtractor {
    fn default() -> Self {
        Self::new(vec![
            Box::new(SelectorCascadeStrategy),
            Box::new(AnchorScanStrategy),
        ])
    }
}

impl JobExtractor {
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    /// 在已解析的文档上运行级联
    pub fn run_document(&self, document: &Html, source: &SourcePage) -> ExtractionOutcome {
        for strategy in &self.strategies {
            let jobs = strategy.extract(document, source);
            if !jobs.is_empty() {
                return ExtractionOutcome::Found {
                    strategy: strategy.name(),
                    jobs,
                };
            }
        }
        ExtractionOutcome::Exhausted
    }

    /// 解析 HTML 并运行级联
    pub fn run(&self, html: &str, source_url: &str) -> ExtractionOutcome {
        self.run_page(html, &SourcePage::new(source_url))
    }

    pub fn run_page(&self, html: &str, source: &SourcePage) -> ExtractionOutcome {
        let document = Html::parse_document(html);
        self.run_document(&document, source)
    }
}
