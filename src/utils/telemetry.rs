// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 缺省日志过滤规则，可通过 `RUST_LOG` 覆盖
pub const DEFAULT_LOG_FILTER: &str = "info,careerwatch=debug";

/// 初始化全局日志订阅者
///
/// 重复调用时保留第一次安装的订阅者，返回是否本次完成了安装
pub fn init_telemetry() -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_initialization_does_not_panic() {
        init_telemetry();
        assert!(!init_telemetry());

        tracing::info!(site_id = "abc", jobs = 3, "Structured log line");
    }
}
