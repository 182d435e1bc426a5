// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::Url;

use crate::utils::errors::ValidationError;

/// 验证站点地址
///
/// 地址不能为空，必须能被解析，且协议为 http 或 https
pub fn validate_site_url(url_str: &str) -> Result<Url, ValidationError> {
    let trimmed = url_str.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidUrl("url cannot be empty".to_string()));
    }

    let url = Url::parse(trimmed).map_err(|e| ValidationError::InvalidUrl(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ValidationError::InvalidUrl(format!(
                "unsupported scheme: {}",
                other
            )))
        }
    }

    if url.host_str().is_none() {
        return Err(ValidationError::InvalidUrl("missing host".to_string()));
    }

    Ok(url)
}
