// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::any::Any;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::repositories::storage_repository::StorageError;

/// 仓库层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),

    #[error("序列化错误: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 刷新编排错误类型
///
/// 提取过程中的错误不会出现在这里，它们已被转换为占位记录。
#[derive(Error, Debug)]
pub enum RefreshError {
    #[error("站点不存在: {0}")]
    SiteNotFound(Uuid),

    #[error("持久化失败: {0}")]
    Persistence(#[from] RepositoryError),
}

/// 报表错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("报表生成失败: {0}")]
    Build(String),

    #[error("报表持久化失败: {0}")]
    Persistence(#[from] RepositoryError),
}

impl From<StorageError> for ReportError {
    fn from(err: StorageError) -> Self {
        ReportError::Persistence(RepositoryError::Storage(err))
    }
}

/// 输入校验错误类型
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

/// Worker错误类型
#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("刷新错误: {0}")]
    Refresh(#[from] RefreshError),
}

/// 站点注册表错误类型
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("站点不存在: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("持久化失败: {0}")]
    Repository(#[from] RepositoryError),
}

/// 从 panic 载荷中取出可读的消息
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "panicked".to_string()
    }
}
