// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::repositories::storage_repository::StorageRepository;
use crate::utils::errors::RepositoryError;

/// 整体读写的 JSON 快照
///
/// 每次修改都在写锁内基于副本计算新快照，持久化成功后才替换内存中的状态。
/// 读者只会看到修改前或修改后的完整集合；写入失败时旧状态保持不变。
pub struct JsonSnapshot<T> {
    storage: Arc<dyn StorageRepository>,
    key: String,
    state: RwLock<Vec<T>>,
}

impl<T> JsonSnapshot<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    /// 从存储加载快照，键不存在时以空集合开始
    pub async fn load(
        storage: Arc<dyn StorageRepository>,
        key: impl Into<String>,
    ) -> Result<Self, RepositoryError> {
        let key = key.into();
        let items: Vec<T> = match storage.get(&key).await? {
            Some(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes)?,
            _ => Vec::new(),
        };
        debug!(key = %key, items = items.len(), "Snapshot loaded");

        Ok(Self {
            storage,
            key,
            state: RwLock::new(items),
        })
    }

    /// 当前快照的副本
    pub async fn read(&self) -> Vec<T> {
        self.state.read().await.clone()
    }

    /// 在只读快照上执行查询
    pub async fn query<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        let guard = self.state.read().await;
        f(&guard)
    }

    /// 修改快照并持久化
    pub async fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> Result<R, RepositoryError> {
        let mut guard = self.state.write().await;
        let mut next = guard.clone();
        let result = f(&mut next);

        let bytes = serde_json::to_vec_pretty(&next)?;
        self.storage.save(&self.key, &bytes).await?;

        *guard = next;
        Ok(result)
    }
}
