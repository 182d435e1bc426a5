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

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// 渲染错误类型
#[derive(Error, Debug)]
pub enum RenderError {
    /// 浏览器启动失败
    #[error("Browser launch failed: {0}")]
    Launch(String),
    /// 导航失败
    #[error("Navigation failed: {0}")]
    Navigation(String),
    /// 超时
    #[error("Navigation timed out after {0:?}")]
    Timeout(Duration),
    /// 读取页面内容失败
    #[error("Failed to read page content: {0}")]
    Content(String),
}

/// 渲染完成的页面快照
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// 请求的地址
    pub url: String,
    /// 导航结束后的地址（可能经过重定向）
    pub final_url: String,
    /// 序列化后的 DOM
    pub html: String,
    /// 渲染耗时（毫秒）
    pub render_time_ms: u64,
}

/// 页面渲染器特质
///
/// 每次调用独占一个浏览器实例，并在所有退出路径上释放它。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// 加载页面并返回渲染后的 DOM
    async fn render(&self, url: &str) -> Result<RenderedPage, RenderError>;

    /// 渲染器名称
    fn name(&self) -> &'static str;
}
