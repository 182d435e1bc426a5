// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：站点、职位和报表布局
/// - 提取引擎（extraction）：在 DOM 快照上运行的启发式提取级联
/// - 仓库接口（repositories）：数据持久化抽象接口
/// - 服务（services）：提取、刷新、报表和站点注册表
///
/// 领域层不依赖任何浏览器或存储实现。
pub mod extraction;
pub mod models;
pub mod repositories;
pub mod services;
