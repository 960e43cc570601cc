//! # DOM Translation Nodes
//!
//! 从 HTML 文档中找出需要翻译的元素节点，并标记其中哪些是翻译根。
//!
//! ## 模块组织
//!
//! - `core` - 主要入口函数和输入处理
//! - `parsers` - HTML 解析、DOM 遍历和内联样式解析
//! - `translation` - 翻译节点提取（过滤、根节点判定、结果收集、配置）
//! - `env` - 环境变量定义

pub mod core;
pub mod env;
pub mod parsers;
pub mod translation;

// Re-export commonly used items for convenience
pub use self::core::{get_translation_nodes, get_translation_nodes_with_config};
pub use self::translation::{
    TranslationError, TranslationNode, TranslationNodeExtractor, TranslationNodeList,
    TranslationResult,
};
