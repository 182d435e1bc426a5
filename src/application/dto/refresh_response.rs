// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Serialize;

use crate::domain::services::refresh_service::RefreshOutcome;

/// 批量刷新响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkRefreshResponseDto {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub results: Vec<RefreshOutcome>,
}

impl From<Vec<RefreshOutcome>> for BulkRefreshResponseDto {
    fn from(results: Vec<RefreshOutcome>) -> Self {
        let succeeded = results.iter().filter(|r| r.success).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
            results,
        }
    }
}
