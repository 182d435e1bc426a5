// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 被跟踪的招聘页面
///
/// 由站点注册表创建和删除；刷新编排器只会修改
/// `last_refreshed` 和 `job_count` 两个字段。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedSite {
    /// 站点唯一标识符，创建后不可变
    pub id: Uuid,
    /// 招聘页面地址
    pub url: String,
    /// 公司显示名称，缺省时等于 `url`
    pub company_name: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 最近一次刷新成功的时间
    pub last_refreshed: Option<DateTime<Utc>>,
    /// 最近一次刷新得到的职位数量
    pub job_count: usize,
}

impl TrackedSite {
    /// 创建一个新的站点记录
    ///
    /// # 参数
    ///
    /// * `url` - 招聘页面地址
    /// * `company_name` - 公司名称，为空或缺省时使用 `url`
    pub fn new(url: impl Into<String>, company_name: Option<String>) -> Self {
        let url = url.into();
        let company_name = company_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| url.clone());

        Self {
            id: Uuid::new_v4(),
            url,
            company_name,
            created_at: Utc::now(),
            last_refreshed: None,
            job_count: 0,
        }
    }

    /// 记录一次成功的刷新
    pub fn mark_refreshed(&mut self, at: DateTime<Utc>, job_count: usize) {
        self.last_refreshed = Some(at);
        self.job_count = job_count;
    }
}
