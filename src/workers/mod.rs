// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 工作器模块
///
/// 后台定时任务，目前只有定时批量刷新
pub mod refresh_worker;

pub use refresh_worker::RefreshWorker;
