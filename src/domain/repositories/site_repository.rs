// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::models::tracked_site::TrackedSite;
use crate::utils::errors::RepositoryError;

/// 站点仓库特质
///
/// 定义被跟踪站点的数据访问接口
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteRepository: Send + Sync {
    /// 根据ID查找站点
    async fn get(&self, id: Uuid) -> Result<Option<TrackedSite>, RepositoryError>;
    /// 列出全部站点，按创建时间排序
    async fn list(&self) -> Result<Vec<TrackedSite>, RepositoryError>;
    /// 插入或更新站点
    async fn put(&self, site: TrackedSite) -> Result<(), RepositoryError>;
    /// 删除站点，返回是否存在过
    async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError>;
}
