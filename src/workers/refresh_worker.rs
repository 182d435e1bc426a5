// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{error, info};

use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::services::refresh_service::RefreshService;
use crate::utils::errors::WorkerError;

const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// 定时批量刷新工作器
///
/// 按固定间隔刷新全部站点，第一次运行发生在启动后一个间隔
pub struct RefreshWorker<S, J>
where
    S: SiteRepository + 'static,
    J: JobRepository + 'static,
{
    service: Arc<RefreshService<S, J>>,
    interval: Duration,
}

impl<S, J> RefreshWorker<S, J>
where
    S: SiteRepository + 'static,
    J: JobRepository + 'static,
{
    /// 间隔不足一秒时按一秒处理，tokio 的定时器不接受零周期
    pub fn new(service: Arc<RefreshService<S, J>>, interval: Duration) -> Self {
        Self {
            service,
            interval: interval.max(MIN_INTERVAL),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 运行工作器
    pub async fn run(&self) {
        info!(
            "Refresh worker started, interval {}s",
            self.interval.as_secs()
        );

        let mut interval = tokio::time::interval_at(Instant::now() + self.interval, self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            interval.tick().await;

            match self.run_once().await {
                Ok((succeeded, failed)) => {
                    info!("Scheduled refresh done: {} ok, {} failed", succeeded, failed);
                }
                Err(e) => {
                    error!("Scheduled refresh failed: {}", e);
                }
            }
        }
    }

    /// 启动后台运行
    pub fn start(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run().await;
        })
    }

    /// 执行一次批量刷新，返回成功与失败的站点数
    pub async fn run_once(&self) -> Result<(usize, usize), WorkerError> {
        let outcomes = self.service.refresh_all().await?;
        let succeeded = outcomes.iter().filter(|o| o.success).count();
        Ok((succeeded, outcomes.len() - succeeded))
    }
}

#[cfg(test)]
#[path = "refresh_worker_test.rs"]
mod tests;
