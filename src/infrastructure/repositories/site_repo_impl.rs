// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::models::tracked_site::TrackedSite;
use crate::domain::repositories::site_repository::SiteRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::infrastructure::repositories::snapshot::JsonSnapshot;
use crate::utils::errors::RepositoryError;

/// 站点快照的存储键
pub const SITES_KEY: &str = "sites.json";

/// 站点仓库实现
///
/// 基于 JSON 快照
pub struct SiteRepositoryImpl {
    snapshot: JsonSnapshot<TrackedSite>,
}

impl SiteRepositoryImpl {
    pub async fn new(storage: Arc<dyn StorageRepository>) -> Result<Self, RepositoryError> {
        Ok(Self {
            snapshot: JsonSnapshot::load(storage, SITES_KEY).await?,
        })
    }
}

#[async_trait]
impl SiteRepository for SiteRepositoryImpl {
    async fn get(&self, id: Uuid) -> Result<Option<TrackedSite>, RepositoryError> {
        Ok(self
            .snapshot
            .query(|sites| sites.iter().find(|site| site.id == id).cloned())
            .await)
    }

    async fn list(&self) -> Result<Vec<TrackedSite>, RepositoryError> {
        let mut sites = self.snapshot.read().await;
        sites.sort_by_key(|site| site.created_at);
        Ok(sites)
    }

    async fn put(&self, site: TrackedSite) -> Result<(), RepositoryError> {
        self.snapshot
            .mutate(|sites| match sites.iter().position(|existing| existing.id == site.id) {
                Some(idx) => sites[idx] = site,
                None => sites.push(site),
            })
            .await
    }

    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        self.snapshot
            .mutate(|sites| {
                let before = sites.len();
                sites.retain(|site| site.id != id);
                sites.len() != before
            })
            .await
    }
}
