// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use crate::config::settings::RendererSettings;
use crate::engines::traits::{PageRenderer, RenderError, RenderedPage};

/// Chromium 渲染器
///
/// 基于 chromiumoxide。每次渲染都会启动一个独立的浏览器实例，
/// 渲染结束后（无论成功、失败还是超时）立即关闭，不在调用之间复用。
pub struct ChromiumRenderer {
    settings: RendererSettings,
}

impl ChromiumRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    async fn launch(&self) -> Result<(Browser, JoinHandle<()>), RenderError> {
        let mut builder = BrowserConfig::builder()
            .no_sandbox()
            .request_timeout(self.settings.navigation_timeout())
            .arg("--disable-gpu")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-extensions");

        if !self.settings.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &self.settings.chrome_executable {
            builder = builder.chrome_executable(path);
        }

        let config = builder.build().map_err(RenderError::Launch)?;
        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| RenderError::Launch(e.to_string()))?;

        // Spawn a handler to process browser events
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!("Browser handler event error: {}", e);
                }
            }
        });

        Ok((browser, handler_task))
    }

    /// 打开页面并等待导航完成，受导航超时约束
    async fn navigate(&self, browser: &Browser, url: &str) -> Result<Page, RenderError> {
        let timeout = self.settings.navigation_timeout();

        tokio::time::timeout(timeout, async {
            let page = browser
                .new_page("about:blank")
                .await
                .map_err(|e| RenderError::Navigation(e.to_string()))?;

            page.set_user_agent(self.settings.user_agent.as_str())
                .await
                .map_err(|e| RenderError::Navigation(e.to_string()))?;

            // goto waits for the load event; wait_for_navigation lets in-flight requests settle
            page.goto(url)
                .await
                .map_err(|e| RenderError::Navigation(e.to_string()))?;
            page.wait_for_navigation()
                .await
                .map_err(|e| RenderError::Navigation(e.to_string()))?;

            Ok(page)
        })
        .await
        .map_err(|_| RenderError::Timeout(timeout))?
    }

    async fn snapshot(&self, browser: &Browser, url: &str) -> Result<(String, String), RenderError> {
        let page = self.navigate(browser, url).await?;

        // Late-binding content
        tokio::time::sleep(self.settings.settle_delay()).await;

        let html = page
            .content()
            .await
            .map_err(|e| RenderError::Content(e.to_string()))?;
        let final_url = page
            .url()
            .await
            .ok()
            .flatten()
            .unwrap_or_else(|| url.to_string());

        if let Err(e) = page.close().await {
            debug!("Failed to close page: {}", e);
        }

        Ok((final_url, html))
    }

    async fn shutdown(mut browser: Browser, handler_task: JoinHandle<()>) {
        if let Err(e) = browser.close().await {
            warn!("Failed to close browser: {}", e);
        }
        if let Err(e) = browser.wait().await {
            warn!("Failed to wait for browser exit: {}", e);
        }
        handler_task.abort();
    }
}

#[async_trait]
impl PageRenderer for ChromiumRenderer {
    #[instrument(skip(self), fields(renderer = "chromium"))]
    async fn render(&self, url: &str) -> Result<RenderedPage, RenderError> {
        let start = Instant::now();
        let (browser, handler_task) = self.launch().await?;

        let result = self.snapshot(&browser, url).await;
        Self::shutdown(browser, handler_task).await;

        let (final_url, html) = result?;
        let elapsed = start.elapsed();
        metrics::histogram!("careerwatch_render_duration_seconds").record(elapsed.as_secs_f64());
        debug!(bytes = html.len(), elapsed_ms = elapsed.as_millis() as u64, "Page rendered");

        Ok(RenderedPage {
            url: url.to_string(),
            final_url,
            html,
            render_time_ms: elapsed.as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "chromium"
    }
}
