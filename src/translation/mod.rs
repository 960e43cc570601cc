//! 翻译节点模块
//!
//! 从 DOM 子树中选出需要交给翻译流程的元素节点，并区分翻译根与非根节点：
//! - **core**: 提取器，组合整个提取流程
//! - **pipeline**: 文本过滤、根节点判定、结果收集和单元分组
//! - **config**: 配置管理
//! - **error**: 错误处理
//!
//! # 基本用法
//!
//! ```rust
//! use dom_translation_nodes::parsers::html::{get_child_node_by_name, html_to_dom};
//! use dom_translation_nodes::translation::TranslationNodeExtractor;
//!
//! let dom = html_to_dom(b"<p>Lorem <a>ipsum</a></p><p>dolor</p>", "utf-8");
//! let html = get_child_node_by_name(&dom.document, "html").unwrap();
//! let body = get_child_node_by_name(&html, "body").unwrap();
//!
//! let nodes = TranslationNodeExtractor::default()
//!     .extract(&dom.document, &body)
//!     .unwrap();
//! assert_eq!(nodes.describe(), "p[root] a p[root]");
//! ```

/// 配置管理模块 - 预算、容量提示和配置文件加载
pub mod config;

/// 核心提取模块
pub mod core;

/// 错误处理模块 - 统一的错误类型和处理机制
pub mod error;

/// 提取管道模块
pub mod pipeline;

// 重新导出主要类型
pub use self::config::{ConfigManager, ExtractionConfig};
pub use self::core::{check_preconditions, TranslationNodeExtractor};
pub use self::error::{TranslationError, TranslationResult};
pub use self::pipeline::{
    group_into_units, BlockLayout, DefaultBlockLayout, TranslationNode, TranslationNodeList,
    TranslationUnit,
};
