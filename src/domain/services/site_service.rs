// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::models::tracked_site::TrackedSite;
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::repositories::site_repository::SiteRepository;
use crate::engines::validators::validate_site_url;
use crate::utils::errors::SiteError;

/// 站点注册表服务
pub struct SiteService<S: SiteRepository, J: JobRepository> {
    sites: Arc<S>,
    jobs: Arc<J>,
}

impl<S: SiteRepository, J: JobRepository> SiteService<S, J> {
    pub fn new(sites: Arc<S>, jobs: Arc<J>) -> Self {
        Self { sites, jobs }
    }

    /// 注册一个新的招聘页面
    ///
    /// 地址必须是 http/https，公司名称缺省时使用地址本身
    #[instrument(skip(self))]
    pub async fn add(
        &self,
        url: &str,
        company_name: Option<String>,
    ) -> Result<TrackedSite, SiteError> {
        validate_site_url(url)?;

        let site = TrackedSite::new(url.trim(), company_name);
        self.sites.put(site.clone()).await?;

        info!(site_id = %site.id, company = %site.company_name, "Site added");
        Ok(site)
    }

    pub async fn list(&self) -> Result<Vec<TrackedSite>, SiteError> {
        Ok(self.sites.list().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<TrackedSite, SiteError> {
        self.sites.get(id).await?.ok_or(SiteError::NotFound(id))
    }

    /// 删除站点并清除其职位
    #[instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> Result<(), SiteError> {
        if !self.sites.delete(id).await? {
            return Err(SiteError::NotFound(id));
        }

        let purged = self.jobs.delete_for_site(id).await?;
        info!(site_id = %id, purged, "Site removed");
        Ok(())
    }
}
