//! 核心提取模块
//!
//! 组合遍历、过滤、根节点判定和结果收集，提供翻译节点提取入口

pub mod extractor;

pub use extractor::{check_preconditions, TranslationNodeExtractor};
