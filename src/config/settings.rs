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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 桌面版 Chrome 的 User-Agent
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// 应用程序配置设置
///
/// 包含服务器、存储、渲染、报表、定时刷新和指标等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 存储配置
    pub storage: StorageSettings,
    /// 页面渲染配置
    pub renderer: RendererSettings,
    /// 报表配置
    pub report: ReportSettings,
    /// 定时刷新配置
    pub scheduler: SchedulerSettings,
    /// 指标导出配置
    pub metrics: MetricsSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

/// 存储配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// 存储类型 (local, memory)
    pub storage_type: String,
    /// 本地存储路径 (当 type=local 时使用)
    pub local_path: Option<String>,
}

/// 页面渲染配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct RendererSettings {
    /// 单次导航超时时间（秒）
    pub navigation_timeout_secs: u64,
    /// 网络空闲后额外等待的时间（毫秒）
    pub settle_ms: u64,
    /// 浏览器 User-Agent
    pub user_agent: String,
    /// Chrome 可执行文件路径，缺省时由 chromiumoxide 自动查找
    pub chrome_executable: Option<String>,
    /// 是否以无头模式启动
    pub headless: bool,
}

impl RendererSettings {
    pub fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.navigation_timeout_secs)
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            navigation_timeout_secs: 30,
            settle_ms: 2000,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            chrome_executable: None,
            headless: true,
        }
    }
}

/// 报表配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ReportSettings {
    /// 报表文件名（存储键）
    pub file_name: String,
}

/// 定时刷新配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerSettings {
    /// 是否启用定时批量刷新
    pub enabled: bool,
    /// 刷新间隔（秒）
    pub interval_secs: u64,
}

/// 指标导出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启用 Prometheus 导出
    pub enabled: bool,
    /// 导出器监听地址
    pub listen_addr: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件和环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        Self::builder()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("CAREERWATCH").separator("__"))
            .build()?
            .try_deserialize::<Self>()?
            .validated()
    }

    /// 仅包含默认值的配置
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize::<Self>()?.validated()
    }

    /// 从任意配置源构建并校验
    pub fn from_config(config: Config) -> Result<Self, ConfigError> {
        config.try_deserialize::<Self>()?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.scheduler.interval_secs == 0 {
            return Err(ConfigError::Message(
                "scheduler.interval_secs must be greater than zero".to_string(),
            ));
        }
        if self.renderer.navigation_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "renderer.navigation_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(self)
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let renderer = RendererSettings::default();
        Config::builder()
            // Server
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            // Storage
            .set_default("storage.storage_type", "local")?
            .set_default("storage.local_path", "./storage")?
            // Renderer
            .set_default(
                "renderer.navigation_timeout_secs",
                renderer.navigation_timeout_secs,
            )?
            .set_default("renderer.settle_ms", renderer.settle_ms)?
            .set_default("renderer.user_agent", renderer.user_agent)?
            .set_default("renderer.headless", renderer.headless)?
            // Report
            .set_default("report.file_name", "jobs_report.xlsx")?
            // Scheduler
            .set_default("scheduler.enabled", false)?
            .set_default("scheduler.interval_secs", 86_400)?
            // Metrics
            .set_default("metrics.enabled", false)?
            .set_default("metrics.listen_addr", "0.0.0.0:9000")
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
