// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 被跟踪站点（tracked_site）：一个招聘页面及其刷新历史
/// - 职位记录（job_listing）：从招聘页面提取出的职位，以及占位记录
/// - 报表（report）：导出报表的工作表布局与导出结果
pub mod job_listing;
pub mod report;
pub mod tracked_site;
