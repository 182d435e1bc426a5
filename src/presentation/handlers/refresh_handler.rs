// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::refresh_response::BulkRefreshResponseDto;
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::services::refresh_service::{RefreshService, RefreshSummary};
use crate::presentation::errors::AppError;

/// 刷新单个站点
pub async fn refresh_site<S, J>(
    Extension(service): Extension<Arc<RefreshService<S, J>>>,
    Path(site_id): Path<Uuid>,
) -> Result<Json<RefreshSummary>, AppError>
where
    S: SiteRepository + 'static,
    J: JobRepository + 'static,
{
    Ok(Json(service.refresh_site(site_id).await?))
}

/// 依次刷新全部站点
pub async fn refresh_all<S, J>(
    Extension(service): Extension<Arc<RefreshService<S, J>>>,
) -> Result<Json<BulkRefreshResponseDto>, AppError>
where
    S: SiteRepository + 'static,
    J: JobRepository + 'static,
{
    let outcomes = service.refresh_all().await?;
    Ok(Json(outcomes.into()))
}
