// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// 包含的服务：
/// - 提取服务（extraction_service）：渲染页面并运行提取级联，失败时产出占位记录
/// - 刷新服务（refresh_service）：单站点与批量刷新的编排
/// - 报表服务（report_service）：按公司分组生成多工作表报表并覆盖写出
/// - 站点服务（site_service）：站点注册表的增删查
pub mod extraction_service;
pub mod refresh_service;
pub mod report_service;
pub mod site_service;
