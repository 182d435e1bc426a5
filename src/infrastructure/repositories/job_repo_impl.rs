// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::models::job_listing::JobListing;
use crate::domain::repositories::job_repository::JobRepository;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::infrastructure::repositories::snapshot::JsonSnapshot;
use crate::utils::errors::RepositoryError;

/// 职位快照的存储键
pub const JOBS_KEY: &str = "jobs.json";

/// 职位仓库实现
///
/// 全部职位保存在一个 JSON 快照中，替换操作一次性重写整个快照。
pub struct JobRepositoryImpl {
    snapshot: JsonSnapshot<JobListing>,
}

impl JobRepositoryImpl {
    pub async fn new(storage: Arc<dyn StorageRepository>) -> Result<Self, RepositoryError> {
        Ok(Self {
            snapshot: JsonSnapshot::load(storage, JOBS_KEY).await?,
        })
    }
}

#[async_trait]
impl JobRepository for JobRepositoryImpl {
    async fn replace_for_site(
        &self,
        site_id: Uuid,
        jobs: Vec<JobListing>,
    ) -> Result<(), RepositoryError> {
        self.snapshot
            .mutate(|all| {
                all.retain(|job| job.site_id != site_id);
                all.extend(jobs);
            })
            .await
    }

    async fn list_for_site(&self, site_id: Uuid) -> Result<Vec<JobListing>, RepositoryError> {
        Ok(self
            .snapshot
            .query(|all| {
                all.iter()
                    .filter(|job| job.site_id == site_id)
                    .cloned()
                    .collect()
            })
            .await)
    }

    async fn list_all(&self) -> Result<Vec<JobListing>, RepositoryError> {
        Ok(self.snapshot.read().await)
    }

    async fn delete_for_site(&self, site_id: Uuid) -> Result<usize, RepositoryError> {
        self.snapshot
            .mutate(|all| {
                let before = all.len();
                all.retain(|job| job.site_id != site_id);
                before - all.len()
            })
            .await
    }
}
