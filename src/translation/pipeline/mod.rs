//! 翻译管道模块
//!
//! 提供翻译节点提取管道：文本过滤、根节点判定、结果收集和单元分组

pub mod collector;
pub mod filters;
pub mod resolver;
pub mod units;

// 重新导出主要类型
pub use collector::{NodeSummary, TranslationNode, TranslationNodeList};
pub use filters::{has_translatable_content, text_has_translatable_content, TextFragment};
pub use resolver::{BlockLayout, CandidateSet, DefaultBlockLayout, TranslationRootResolver};
pub use units::{group_into_units, TranslationUnit};
