// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::application::dto::site_request::CreateSiteRequestDto;
use crate::domain::models::tracked_site::TrackedSite;
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::services::site_service::SiteService;
use crate::presentation::errors::AppError;

/// 列出全部站点
pub async fn list_sites<S, J>(
    Extension(service): Extension<Arc<SiteService<S, J>>>,
) -> Result<Json<Vec<TrackedSite>>, AppError>
where
    S: SiteRepository + 'static,
    J: JobRepository + 'static,
{
    Ok(Json(service.list().await?))
}

/// 注册新站点
pub async fn create_site<S, J>(
    Extension(service): Extension<Arc<SiteService<S, J>>>,
    Json(payload): Json<CreateSiteRequestDto>,
) -> Result<(StatusCode, Json<TrackedSite>), AppError>
where
    S: SiteRepository + 'static,
    J: JobRepository + 'static,
{
    payload.validate()?;

    let site = service.add(&payload.url, payload.company_name).await?;
    Ok((StatusCode::CREATED, Json(site)))
}

/// 删除站点及其职位
pub async fn delete_site<S, J>(
    Extension(service): Extension<Arc<SiteService<S, J>>>,
    Path(site_id): Path<Uuid>,
) -> Result<StatusCode, AppError>
where
    S: SiteRepository + 'static,
    J: JobRepository + 'static,
{
    service.remove(site_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
