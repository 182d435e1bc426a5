// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::job_listing::JobListing;
use crate::utils::errors::RepositoryError;

/// 职位仓库特质
///
/// 职位按所属站点分组保存。`replace_for_site` 对外表现为原子操作：
/// 读者要么看到旧的全部记录，要么看到新的全部记录。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// 删除站点下的全部职位并写入新的职位集合
    async fn replace_for_site(
        &self,
        site_id: Uuid,
        jobs: Vec<JobListing>,
    ) -> Result<(), RepositoryError>;
    /// 列出某个站点的职位
    async fn list_for_site(&self, site_id: Uuid) -> Result<Vec<JobListing>, RepositoryError>;
    /// 列出全部职位
    async fn list_all(&self) -> Result<Vec<JobListing>, RepositoryError>;
    /// 删除某个站点的全部职位，返回删除数量
    async fn delete_for_site(&self, site_id: Uuid) -> Result<usize, RepositoryError>;
}
