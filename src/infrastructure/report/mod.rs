// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 报表写出器实现
pub mod xlsx_writer;

pub use xlsx_writer::XlsxReportWriter;
