// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 站点和职位都以 JSON 快照的形式保存在存储仓库中
pub mod job_repo_impl;
pub mod site_repo_impl;
pub mod snapshot;
