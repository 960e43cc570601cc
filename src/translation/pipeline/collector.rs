//! 翻译节点收集器模块
//!
//! 按发现顺序保存候选节点及其翻译根标记

use std::ops::Index;

use markup5ever_rcdom::Handle;
use serde::Serialize;

use crate::parsers::html::dom::{get_node_attr, get_node_name};

/// 单个翻译节点
#[derive(Debug, Clone)]
pub struct TranslationNode {
    /// DOM节点引用
    pub node: Handle,
    /// 是否为翻译根
    pub is_root: bool,
}

impl TranslationNode {
    /// 元素标签名
    pub fn tag_name(&self) -> &str {
        get_node_name(&self.node).unwrap_or("#node")
    }

    /// 简短描述，如 `div[root]` 或 `span`
    pub fn describe(&self) -> String {
        if self.is_root {
            format!("{}[root]", self.tag_name())
        } else {
            self.tag_name().to_string()
        }
    }
}

/// 翻译节点列表
///
/// 只追加，顺序等于先序遍历中的发现顺序。
#[derive(Debug, Clone, Default)]
pub struct TranslationNodeList {
    nodes: Vec<TranslationNode>,
    root_count: usize,
}

impl TranslationNodeList {
    /// 创建带预分配容量的列表，容量只是提示
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root_count: 0,
        }
    }

    /// 追加节点
    pub fn append(&mut self, node: Handle, is_root: bool) {
        if is_root {
            self.root_count += 1;
        }
        self.nodes.push(TranslationNode { node, is_root });
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// 按索引获取条目
    pub fn get(&self, index: usize) -> Option<&TranslationNode> {
        self.nodes.get(index)
    }

    /// 按索引获取节点
    pub fn item(&self, index: usize) -> Option<&Handle> {
        self.nodes.get(index).map(|entry| &entry.node)
    }

    /// 按索引查询是否为翻译根
    pub fn is_translation_root_at(&self, index: usize) -> Option<bool> {
        self.nodes.get(index).map(|entry| entry.is_root)
    }

    /// 翻译根数量
    pub fn root_count(&self) -> usize {
        self.root_count
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TranslationNode> {
        self.nodes.iter()
    }

    /// 只遍历翻译根
    pub fn roots(&self) -> impl Iterator<Item = &TranslationNode> {
        self.nodes.iter().filter(|entry| entry.is_root)
    }

    /// 以空格连接的描述，如 `div[root] span`
    pub fn describe(&self) -> String {
        self.nodes
            .iter()
            .map(TranslationNode::describe)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// 生成可序列化的摘要
    pub fn summaries(&self) -> Vec<NodeSummary> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, entry)| NodeSummary {
                index,
                tag: entry.tag_name().to_string(),
                id: get_node_attr(&entry.node, "id"),
                is_root: entry.is_root,
            })
            .collect()
    }
}

impl Index<usize> for TranslationNodeList {
    type Output = TranslationNode;

    fn index(&self, index: usize) -> &TranslationNode {
        &self.nodes[index]
    }
}

impl IntoIterator for TranslationNodeList {
    type Item = TranslationNode;
    type IntoIter = std::vec::IntoIter<TranslationNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a TranslationNodeList {
    type Item = &'a TranslationNode;
    type IntoIter = std::slice::Iter<'a, TranslationNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// 节点摘要（用于 JSON 输出）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub index: usize,
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub is_root: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::html::dom::{find_element_by_id, html_to_dom};
    use std::rc::Rc;

    fn sample() -> (markup5ever_rcdom::RcDom, TranslationNodeList) {
        let dom = html_to_dom(
            b"<div id=\"d\">text <span id=\"s\">x</span><em>y</em></div>",
            "utf-8",
        );
        let div = find_element_by_id(&dom.document, "d").unwrap();
        let span = find_element_by_id(&dom.document, "s").unwrap();

        let mut list = TranslationNodeList::with_capacity(8);
        list.append(div, true);
        list.append(span, false);
        (dom, list)
    }

    #[test]
    fn test_append_and_indexed_access() {
        let (dom, list) = sample();
        let span = find_element_by_id(&dom.document, "s").unwrap();

        assert_eq!(list.len(), 2);
        assert!(!list.is_empty());
        assert_eq!(list.is_translation_root_at(0), Some(true));
        assert_eq!(list.is_translation_root_at(1), Some(false));
        assert_eq!(list.is_translation_root_at(2), None);
        assert!(Rc::ptr_eq(list.item(1).unwrap(), &span));
        assert!(list.item(2).is_none());
        assert_eq!(list[0].tag_name(), "div");
    }

    #[test]
    fn test_describe() {
        let (_dom, list) = sample();
        assert_eq!(list.describe(), "div[root] span");
        assert_eq!(TranslationNodeList::default().describe(), "");
    }

    #[test]
    fn test_roots() {
        let (_dom, list) = sample();
        assert_eq!(list.root_count(), 1);
        let roots: Vec<&str> = list.roots().map(|entry| entry.tag_name()).collect();
        assert_eq!(roots, vec!["div"]);
    }

    #[test]
    fn test_summaries_serialize() {
        let (_dom, list) = sample();
        let json = serde_json::to_string(&list.summaries()).unwrap();
        assert_eq!(
            json,
            r#"[{"index":0,"tag":"div","id":"d","is_root":true},{"index":1,"tag":"span","id":"s","is_root":false}]"#
        );
    }

    #[test]
    fn test_iteration_order() {
        let (_dom, list) = sample();
        let tags: Vec<&str> = (&list).into_iter().map(|entry| entry.tag_name()).collect();
        assert_eq!(tags, vec!["div", "span"]);

        let owned: Vec<TranslationNode> = list.into_iter().collect();
        assert!(owned[0].is_root);
    }
}
