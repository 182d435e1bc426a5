// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

/// 报表单元格
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Number(value as f64)
    }
}

/// 报表中的一张工作表
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// 工作表名称，已按宿主格式限制截断
    pub name: String,
    /// 表头
    pub headers: Vec<&'static str>,
    /// 数据行
    pub rows: Vec<Vec<Cell>>,
}

/// 报表布局
///
/// 第一张为汇总表，第二张为全部职位表，之后每个公司一张表。
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub sheets: Vec<Sheet>,
    /// 职位总数
    pub job_count: usize,
    /// 公司数量
    pub company_count: usize,
}

impl ReportLayout {
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}

/// 导出操作的结构化结果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_count: Option<usize>,
}

impl ExportResult {
    pub fn written(file_name: &str, layout: &ReportLayout) -> Self {
        Self {
            success: true,
            message: format!(
                "Exported {} jobs from {} companies to {}",
                layout.job_count, layout.company_count, file_name
            ),
            job_count: Some(layout.job_count),
            company_count: Some(layout.company_count),
        }
    }

    /// 没有任何职位时的空操作结果，不会写出文件
    pub fn empty() -> Self {
        Self {
            success: false,
            message: "No jobs to export".to_string(),
            job_count: None,
            company_count: None,
        }
    }
}
