//! 翻译节点提取器
//!
//! 这个模块把各个管道组件组合成一次同步的提取过程：
//!
//! ## 工作流程
//! 1. 检查前置条件：文档上下文必须是文档节点，根节点必须是属于该文档的内容节点
//! 2. 从根节点之后开始先序遍历，产出候选元素（受预算限制）
//! 3. 对每个候选元素判定是否为翻译根，然后加入候选集合
//! 4. 按发现顺序追加到结果列表
//!
//! 前置条件失败时不会产生任何结果；遍历开始后不会失败，预算耗尽时返回的
//! 部分结果同样是成功结果。
//!
//! ## 使用示例
//! ```rust
//! use dom_translation_nodes::parsers::html::{find_element_by_id, html_to_dom};
//! use dom_translation_nodes::translation::config::ExtractionConfig;
//! use dom_translation_nodes::translation::core::TranslationNodeExtractor;
//!
//! let dom = html_to_dom(b"<div id=\"root\"><p>Lorem <b>ipsum</b></p></div>", "utf-8");
//! let root = find_element_by_id(&dom.document, "root").unwrap();
//!
//! let extractor = TranslationNodeExtractor::new(ExtractionConfig::default());
//! let nodes = extractor.extract(&dom.document, &root).unwrap();
//! assert_eq!(nodes.describe(), "p[root] b");
//! ```

use markup5ever_rcdom::{Handle, NodeData};

use crate::parsers::html::dom::{get_node_name, is_same_node, owner_document};
use crate::parsers::html::walker::CandidateWalker;
use crate::translation::config::{constants, ExtractionConfig};
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::pipeline::collector::TranslationNodeList;
use crate::translation::pipeline::resolver::{
    BlockLayout, CandidateSet, DefaultBlockLayout, TranslationRootResolver,
};

/// 翻译节点提取器
///
/// 提取器本身不保存任何遍历状态，候选集合和结果列表在每次调用时重新创建，
/// 同一个提取器可以反复使用。
pub struct TranslationNodeExtractor<L = DefaultBlockLayout> {
    config: ExtractionConfig,
    layout: L,
}

impl TranslationNodeExtractor {
    /// 使用默认块级布局创建提取器
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            config,
            layout: DefaultBlockLayout,
        }
    }
}

impl Default for TranslationNodeExtractor {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl<L: BlockLayout> TranslationNodeExtractor<L> {
    /// 替换块级布局判定
    pub fn with_layout<M: BlockLayout>(self, layout: M) -> TranslationNodeExtractor<M> {
        TranslationNodeExtractor {
            config: self.config,
            layout,
        }
    }

    /// 获取配置
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// 提取翻译节点
    ///
    /// # 错误
    /// - `TranslationError::InvalidState`: 文档上下文不是文档节点，或根节点是文档节点本身
    /// - `TranslationError::WrongDocument`: 根节点不属于给定文档
    pub fn extract(&self, document: &Handle, root: &Handle) -> TranslationResult<TranslationNodeList> {
        check_preconditions(document, root)?;

        let budget = self.config.budget.min(constants::CANDIDATE_BUDGET);
        let mut walker = CandidateWalker::new(root, budget);
        // 手工构造的配置不经过校验，容量提示不能超过预算
        let mut candidates = CandidateSet::with_capacity(self.config.candidate_capacity.min(budget));
        let mut list = TranslationNodeList::with_capacity(self.config.list_capacity.min(budget));
        let resolver = TranslationRootResolver::new(&self.layout);

        for node in walker.by_ref() {
            let is_root = resolver.is_translation_root(&node, &candidates);
            candidates.insert(&node);

            tracing::trace!(
                "翻译节点 #{}: <{}> root={}",
                list.len(),
                get_node_name(&node).unwrap_or_default(),
                is_root
            );

            list.append(node, is_root);
        }

        let stats = walker.stats();
        if stats.budget_exhausted {
            tracing::debug!("已达到候选节点上限 {}，返回部分结果", budget);
        }

        tracing::debug!(
            "共有 {} 个翻译节点，其中 {} 个为翻译根（访问 {} 个节点，跳过 {} 个元素）",
            list.len(),
            list.root_count(),
            stats.nodes_visited,
            stats.elements_skipped
        );

        Ok(list)
    }
}

/// 检查提取的前置条件
pub fn check_preconditions(document: &Handle, root: &Handle) -> TranslationResult<()> {
    if !matches!(document.data, NodeData::Document) {
        return Err(TranslationError::InvalidState(
            "文档上下文不是文档节点".to_string(),
        ));
    }

    if matches!(root.data, NodeData::Document) {
        return Err(TranslationError::InvalidState(
            "根节点必须是文档中的内容节点".to_string(),
        ));
    }

    match owner_document(root) {
        Some(owner) if is_same_node(&owner, document) => Ok(()),
        _ => Err(TranslationError::WrongDocument),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::html::dom::{find_element_by_id, html_to_dom};

    #[test]
    fn test_extract_simple() {
        let dom = html_to_dom(
            b"<div id=\"root\"><div>Lorem <span>dolor</span> sit</div></div>",
            "utf-8",
        );
        let root = find_element_by_id(&dom.document, "root").unwrap();

        let nodes = TranslationNodeExtractor::default()
            .extract(&dom.document, &root)
            .unwrap();

        assert_eq!(nodes.describe(), "div[root] span");
    }

    #[test]
    fn test_custom_layout() {
        let dom = html_to_dom(
            b"<div id=\"root\"><div>Lorem <span>dolor</span> sit</div></div>",
            "utf-8",
        );
        let root = find_element_by_id(&dom.document, "root").unwrap();

        let everything_is_block = TranslationNodeExtractor::default().with_layout(|_: &Handle| true);
        let nodes = everything_is_block.extract(&dom.document, &root).unwrap();

        assert_eq!(nodes.describe(), "div[root] span[root]");
    }

    #[test]
    fn test_budget_is_capped_by_global_limit() {
        let config = ExtractionConfig {
            budget: usize::MAX,
            ..ExtractionConfig::default()
        };
        let dom = html_to_dom(b"<div id=\"root\"><p>a</p></div>", "utf-8");
        let root = find_element_by_id(&dom.document, "root").unwrap();

        let nodes = TranslationNodeExtractor::new(config)
            .extract(&dom.document, &root)
            .unwrap();

        assert_eq!(nodes.len(), 1);
    }

    #[test]
    fn test_oversized_capacity_hints_are_clamped() {
        let config = ExtractionConfig {
            budget: 10,
            candidate_capacity: usize::MAX,
            list_capacity: usize::MAX,
        };
        let dom = html_to_dom(b"<div id=\"root\"><p>a <b>b</b></p></div>", "utf-8");
        let root = find_element_by_id(&dom.document, "root").unwrap();

        let nodes = TranslationNodeExtractor::new(config)
            .extract(&dom.document, &root)
            .unwrap();

        assert_eq!(nodes.describe(), "p[root] b");
    }

    #[test]
    fn test_document_as_root_is_invalid_state() {
        let dom = html_to_dom(b"<p>a</p>", "utf-8");

        let result = check_preconditions(&dom.document, &dom.document);

        assert!(matches!(result, Err(TranslationError::InvalidState(_))));
    }

    #[test]
    fn test_element_as_document_is_invalid_state() {
        let dom = html_to_dom(b"<p id=\"p\">a</p>", "utf-8");
        let p = find_element_by_id(&dom.document, "p").unwrap();

        let result = check_preconditions(&p, &p);

        assert!(matches!(result, Err(TranslationError::InvalidState(_))));
    }

    #[test]
    fn test_root_from_other_document() {
        let first = html_to_dom(b"<p id=\"p\">a</p>", "utf-8");
        let second = html_to_dom(b"<p id=\"p\">a</p>", "utf-8");
        let p = find_element_by_id(&first.document, "p").unwrap();

        assert_eq!(
            check_preconditions(&second.document, &p),
            Err(TranslationError::WrongDocument)
        );
        assert_eq!(check_preconditions(&first.document, &p), Ok(()));
    }
}
