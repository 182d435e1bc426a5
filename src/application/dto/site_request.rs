// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 注册站点请求
#[derive(Debug, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteRequestDto {
    /// 招聘页面地址
    #[validate(length(min = 1, message = "url cannot be empty"))]
    pub url: String,
    /// 公司名称，缺省时使用地址
    #[validate(length(max = 200, message = "companyName is too long"))]
    pub company_name: Option<String>,
}
