// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP 请求处理器
pub mod job_handler;
pub mod refresh_handler;
pub mod report_handler;
pub mod site_handler;
