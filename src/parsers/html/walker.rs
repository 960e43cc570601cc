//! DOM遍历器模块
//!
//! 这个模块提供候选翻译节点的遍历逻辑：
//!
//! - `PreorderWalker`：从给定根节点之后开始的深度优先先序遍历（不包含根节点本身）
//! - `CandidateWalker`：在先序遍历之上筛选候选元素，并受全局预算限制
//!
//! # 遍历规则
//!
//! - 只有 HTML 命名空间中的元素会被考虑，文本节点只在作为元素的直接子节点时被检查
//! - 排除列表中的元素（script、style 等）本身不会成为候选，但遍历仍然会进入它们的子节点
//! - 元素的任意一个直接文本子节点包含可翻译内容时，该元素即为候选，检查在第一个命中处停止
//! - 每产生一个候选，预算减一；预算耗尽时遍历立即结束，返回部分结果
//!
//! # 使用示例
//!
//! ```rust
//! use dom_translation_nodes::parsers::html::{find_element_by_id, html_to_dom};
//! use dom_translation_nodes::parsers::html::walker::CandidateWalker;
//!
//! let dom = html_to_dom(b"<div id=\"root\"><p>Hello</p><p>World</p></div>", "utf-8");
//! let root = find_element_by_id(&dom.document, "root").unwrap();
//!
//! let candidates: Vec<_> = CandidateWalker::new(&root, 1).collect();
//! assert_eq!(candidates.len(), 1);
//! ```

use markup5ever_rcdom::{Handle, NodeData};

use crate::translation::config::constants;
use crate::translation::pipeline::filters::text_has_translatable_content;

use super::dom::{get_node_name, is_html_element};

/// 先序遍历器
///
/// 使用显式栈代替递归，深层嵌套的文档不会耗尽调用栈。根节点本身不会被产出。
pub struct PreorderWalker {
    stack: Vec<Handle>,
}

impl PreorderWalker {
    /// 创建从 `root` 之后开始的先序遍历器
    pub fn new(root: &Handle) -> Self {
        let stack = root.children.borrow().iter().rev().cloned().collect();
        Self { stack }
    }
}

impl Iterator for PreorderWalker {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let node = self.stack.pop()?;
        self.stack
            .extend(node.children.borrow().iter().rev().cloned());
        Some(node)
    }
}

/// 遍历统计信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub nodes_visited: usize,
    pub elements_skipped: usize,
    pub candidates_found: usize,
    pub budget_exhausted: bool,
}

/// 受预算限制的候选元素遍历器
pub struct CandidateWalker {
    nodes: PreorderWalker,
    remaining: usize,
    stats: WalkStats,
}

impl CandidateWalker {
    /// 创建新的候选遍历器
    ///
    /// `budget` 是本次遍历最多产出的候选数量；为 0 时不会产出任何节点。
    pub fn new(root: &Handle, budget: usize) -> Self {
        Self {
            nodes: PreorderWalker::new(root),
            remaining: budget,
            stats: WalkStats::default(),
        }
    }

    /// 剩余预算
    pub fn remaining_budget(&self) -> usize {
        self.remaining
    }

    /// 获取遍历统计信息
    pub fn stats(&self) -> &WalkStats {
        &self.stats
    }
}

impl Iterator for CandidateWalker {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        if self.remaining == 0 {
            return None;
        }

        for node in self.nodes.by_ref() {
            self.stats.nodes_visited += 1;

            if !is_html_element(&node) {
                continue;
            }

            if is_skipped_element(&node) {
                self.stats.elements_skipped += 1;
                continue;
            }

            if has_text_for_translation(&node) {
                self.remaining -= 1;
                self.stats.candidates_found += 1;
                if self.remaining == 0 {
                    self.stats.budget_exhausted = true;
                }
                return Some(node);
            }
        }

        None
    }
}

/// 检查元素是否属于不可翻译内容的标签（脚本、框架、代码、样式等）
pub fn is_skipped_element(node: &Handle) -> bool {
    get_node_name(node).is_some_and(|name| constants::SKIP_ELEMENTS.contains(&name))
}

/// 检查元素是否至少有一个包含可翻译内容的直接文本子节点
///
/// 子节点按顺序检查，第一个命中即返回。
pub fn has_text_for_translation(node: &Handle) -> bool {
    node.children.borrow().iter().any(|child| match &child.data {
        NodeData::Text { contents } => text_has_translatable_content(&contents.borrow()),
        _ => false,
    })
}
