// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

use crate::domain::models::report::{Cell, ReportLayout, Sheet};
use crate::domain::services::report_service::ReportWriter;
use crate::utils::errors::ReportError;

/// 列宽上限，避免长摘要撑开整张表
const MAX_COLUMN_WIDTH: f64 = 60.0;

impl From<XlsxError> for ReportError {
    fn from(err: XlsxError) -> Self {
        ReportError::Build(err.to_string())
    }
}

/// XLSX 报表写出器
#[derive(Debug, Default, Clone)]
pub struct XlsxReportWriter;

impl XlsxReportWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_sheet(
        worksheet: &mut Worksheet,
        sheet: &Sheet,
        header_format: &Format,
    ) -> Result<(), XlsxError> {
        worksheet.set_name(&sheet.name)?;

        let mut widths: Vec<usize> = sheet.headers.iter().map(|h| h.len()).collect();
        for (col, header) in sheet.headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, header_format)?;
        }

        for (idx, row) in sheet.rows.iter().enumerate() {
            let row_num = (idx + 1) as u32;
            for (col, cell) in row.iter().enumerate() {
                match cell {
                    Cell::Text(text) => {
                        worksheet.write_string(row_num, col as u16, text)?;
                        if let Some(width) = widths.get_mut(col) {
                            *width = (*width).max(text.chars().count());
                        }
                    }
                    Cell::Number(value) => {
                        worksheet.write_number(row_num, col as u16, *value)?;
                    }
                }
            }
        }

        for (col, width) in widths.iter().enumerate() {
            let width = (*width as f64 + 2.0).min(MAX_COLUMN_WIDTH);
            worksheet.set_column_width(col as u16, width)?;
        }
        worksheet.set_freeze_panes(1, 0)?;

        Ok(())
    }
}

impl ReportWriter for XlsxReportWriter {
    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, ReportError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        for sheet in &layout.sheets {
            let worksheet = workbook.add_worksheet();
            Self::write_sheet(worksheet, sheet, &header_format)?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}
