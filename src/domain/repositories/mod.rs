// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 职位仓库（job_repository）：按站点整体替换的职位集合
/// - 站点仓库（site_repository）：被跟踪的招聘页面
/// - 存储仓库（storage_repository）：按键读写的整块数据
pub mod job_repository;
pub mod site_repository;
pub mod storage_repository;
