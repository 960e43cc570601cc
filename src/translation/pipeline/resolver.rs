//! 翻译根节点判定模块
//!
//! 对每个候选节点判断它是独立的翻译根，还是并入祖先节点的翻译单元：
//!
//! 1. 布局判定为块级元素 → 翻译根
//! 2. 父节点已经是候选节点 → 非根，并入父节点的单元
//! 3. 其余情况（没有父节点，或父节点不是候选） → 翻译根
//!
//! 候选节点按先序遍历顺序判定，判定某个节点时，它所有成为候选的祖先都已经在
//! `CandidateSet` 中。

use std::collections::HashSet;
use std::rc::Rc;

use markup5ever_rcdom::{Handle, Node};

use crate::parsers::css::get_declared_display;
use crate::parsers::html::dom::{get_node_attr, get_node_name, get_parent_node};
use crate::translation::config::constants;

/// 块级布局判定
pub trait BlockLayout {
    /// 元素是否以块级元素的方式渲染
    fn is_block(&self, element: &Handle) -> bool;
}

impl<F> BlockLayout for F
where
    F: Fn(&Handle) -> bool,
{
    fn is_block(&self, element: &Handle) -> bool {
        self(element)
    }
}

/// 默认块级布局判定
///
/// 没有真正的布局引擎时使用：优先看内联 `style` 中显式声明的 `display`，
/// 否则按标签名判断。
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultBlockLayout;

impl BlockLayout for DefaultBlockLayout {
    fn is_block(&self, element: &Handle) -> bool {
        let declared = get_node_attr(element, "style")
            .as_deref()
            .and_then(get_declared_display);

        match declared {
            Some(display) => constants::BLOCK_DISPLAY_VALUES.contains(&display.as_str()),
            None => get_node_name(element)
                .is_some_and(|name| constants::BLOCK_LEVEL_ELEMENTS.contains(&name)),
        }
    }
}

/// 候选节点集合，按节点身份（指针）索引
#[derive(Debug, Default)]
pub struct CandidateSet {
    nodes: HashSet<*const Node>,
}

impl CandidateSet {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: HashSet::with_capacity(capacity),
        }
    }

    /// 加入节点，已存在时返回 false
    pub fn insert(&mut self, node: &Handle) -> bool {
        self.nodes.insert(Rc::as_ptr(node))
    }

    pub fn contains(&self, node: &Handle) -> bool {
        self.nodes.contains(&Rc::as_ptr(node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// 翻译根判定器
pub struct TranslationRootResolver<'a> {
    layout: &'a dyn BlockLayout,
}

impl<'a> TranslationRootResolver<'a> {
    pub fn new(layout: &'a dyn BlockLayout) -> Self {
        Self { layout }
    }

    /// 判断候选节点是否为翻译根
    pub fn is_translation_root(&self, node: &Handle, candidates: &CandidateSet) -> bool {
        if self.layout.is_block(node) {
            return true;
        }

        // A non-block element whose parent didn't make it into the list
        // has no enclosing unit to join
        match get_parent_node(node) {
            Some(parent) => !candidates.contains(&parent),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::html::dom::{find_element_by_id, html_to_dom};

    fn element(html: &str, id: &str) -> (markup5ever_rcdom::RcDom, Handle) {
        let dom = html_to_dom(html.as_bytes(), "utf-8");
        let node = find_element_by_id(&dom.document, id).unwrap();
        (dom, node)
    }

    #[test]
    fn test_default_layout_by_tag() {
        let layout = DefaultBlockLayout;
        let (_dom, div) = element("<div id=\"x\"></div>", "x");
        let (_dom2, span) = element("<span id=\"x\"></span>", "x");
        let (_dom3, li) = element("<ul><li id=\"x\"></li></ul>", "x");

        assert!(layout.is_block(&div));
        assert!(!layout.is_block(&span));
        assert!(layout.is_block(&li));
    }

    #[test]
    fn test_default_layout_display_overrides() {
        let layout = DefaultBlockLayout;
        let (_a, span) = element("<span id=\"x\" style=\"display: block\"></span>", "x");
        let (_b, li) = element("<ul><li id=\"x\" style=\"display: inline\"></li></ul>", "x");
        let (_c, b) = element("<b id=\"x\" style=\"display:none\"></b>", "x");
        let (_d, div) = element("<div id=\"x\" style=\"display: flex\"></div>", "x");
        let (_e, em) = element("<em id=\"x\" style=\"display: inline-block\"></em>", "x");

        assert!(layout.is_block(&span));
        assert!(!layout.is_block(&li));
        assert!(!layout.is_block(&b));
        assert!(!layout.is_block(&div));
        assert!(layout.is_block(&em));
    }

    #[test]
    fn test_table_cells_are_not_block() {
        let layout = DefaultBlockLayout;
        let (_a, td) = element("<table><tr><td id=\"x\">a</td></tr></table>", "x");
        let (_b, span) = element("<span id=\"x\" style=\"display: table-cell\"></span>", "x");
        let (_c, div) = element("<div id=\"x\" style=\"display: table-cell\"></div>", "x");

        // 单元格的显式取值和标签默认值保持一致
        assert!(!layout.is_block(&td));
        assert!(!layout.is_block(&span));
        assert!(!layout.is_block(&div));
    }

    #[test]
    fn test_closure_layout() {
        let never = |_: &Handle| false;
        let (_dom, div) = element("<div id=\"x\"></div>", "x");
        assert!(!never.is_block(&div));
    }

    #[test]
    fn test_candidate_set_identity() {
        let (dom, first) = element("<p id=\"x\">a</p><p id=\"y\">a</p>", "x");
        let second = find_element_by_id(&dom.document, "y").unwrap();

        let mut set = CandidateSet::with_capacity(4);
        assert!(set.insert(&first));
        assert!(!set.insert(&first.clone()));

        assert!(set.contains(&first));
        assert!(!set.contains(&second));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_inline_with_candidate_parent_is_not_root() {
        let (dom, span) = element("<div id=\"d\">text <span id=\"s\">x</span></div>", "s");
        let div = find_element_by_id(&dom.document, "d").unwrap();

        let layout = DefaultBlockLayout;
        let resolver = TranslationRootResolver::new(&layout);
        let mut candidates = CandidateSet::default();

        assert!(resolver.is_translation_root(&div, &candidates));
        candidates.insert(&div);
        assert!(!resolver.is_translation_root(&span, &candidates));
    }

    #[test]
    fn test_inline_without_candidate_parent_is_root() {
        let (_dom, span) = element("<div id=\"d\"><span id=\"s\">x</span></div>", "s");

        let layout = DefaultBlockLayout;
        let resolver = TranslationRootResolver::new(&layout);

        assert!(resolver.is_translation_root(&span, &CandidateSet::default()));
    }

    #[test]
    fn test_block_is_root_even_inside_candidate() {
        let (dom, p) = element("<div id=\"d\">text <p id=\"p\">x</p></div>", "p");
        let div = find_element_by_id(&dom.document, "d").unwrap();

        let layout = DefaultBlockLayout;
        let resolver = TranslationRootResolver::new(&layout);
        let mut candidates = CandidateSet::default();
        candidates.insert(&div);

        assert!(resolver.is_translation_root(&p, &candidates));
    }
}
