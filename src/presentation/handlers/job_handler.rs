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

use crate::domain::models::job_listing::JobListing;
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::services::site_service::SiteService;
use crate::presentation::errors::AppError;

/// 列出全部职位
pub async fn list_jobs<J: JobRepository + 'static>(
    Extension(jobs): Extension<Arc<J>>,
) -> Result<Json<Vec<JobListing>>, AppError> {
    Ok(Json(jobs.list_all().await?))
}

/// 列出某个站点的职位，站点不存在时返回 404
pub async fn list_site_jobs<S, J>(
    Extension(sites): Extension<Arc<SiteService<S, J>>>,
    Extension(jobs): Extension<Arc<J>>,
    Path(site_id): Path<Uuid>,
) -> Result<Json<Vec<JobListing>>, AppError>
where
    S: SiteRepository + 'static,
    J: JobRepository + 'static,
{
    sites.get(site_id).await?;
    Ok(Json(jobs.list_for_site(site_id).await?))
}
