// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::domain::models::report::ExportResult;
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::services::report_service::ReportService;
use crate::presentation::errors::AppError;

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 重新生成报表
///
/// 没有职位时返回 `success: false`，不视为请求错误
pub async fn export_report<J: JobRepository + 'static>(
    Extension(service): Extension<Arc<ReportService<J>>>,
) -> Result<Json<ExportResult>, AppError> {
    Ok(Json(service.export().await?))
}

/// 下载最近一次生成的报表
pub async fn download_report<J: JobRepository + 'static>(
    Extension(service): Extension<Arc<ReportService<J>>>,
) -> Result<Response, AppError> {
    let Some(bytes) = service.latest().await? else {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "No report has been built yet" })),
        )
            .into_response());
    };

    let disposition = format!("attachment; filename=\"{}\"", service.file_name());
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
