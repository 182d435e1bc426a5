// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 职位提取模块
///
/// 在渲染后的 DOM 快照上运行的启发式级联，不依赖浏览器：
/// - 级联（cascade）：按顺序尝试的策略列表与“耗尽”终态
/// - 选择器级联（selector_cascade）：基于容器选择器的字段提取
/// - 链接扫描（anchor_scan）：基于职位路径片段的链接回退
/// - 字段工具（fields）：文本规范化、截断与链接解析
pub mod anchor_scan;
pub mod cascade;
pub mod fields;
pub mod selector_cascade;

pub use cascade::{ExtractionOutcome, ExtractionStrategy, JobExtractor, SourcePage};
