//! 翻译单元模块
//!
//! 把扁平的翻译节点列表折叠成翻译单元：每个翻译根开启一个单元，
//! 非根节点并入最近的、已在列表中的祖先所属的单元。

use std::collections::HashMap;
use std::rc::Rc;

use markup5ever_rcdom::{Handle, Node, NodeData};

use super::collector::TranslationNodeList;
use crate::parsers::html::dom::get_parent_node;

/// 翻译单元
#[derive(Debug, Clone)]
pub struct TranslationUnit {
    /// 单元的翻译根
    pub root: Handle,
    /// 并入该单元的非根节点，按发现顺序
    pub members: Vec<Handle>,
    /// 简单单元：没有成员且根节点没有子元素，可以按纯文本处理
    pub is_simple: bool,
}

impl TranslationUnit {
    fn new(root: Handle) -> Self {
        Self {
            root,
            members: Vec::new(),
            is_simple: false,
        }
    }
}

/// 将翻译节点列表折叠为翻译单元
pub fn group_into_units(list: &TranslationNodeList) -> Vec<TranslationUnit> {
    let mut units: Vec<TranslationUnit> = Vec::new();
    // Nodes (and the intermediate ancestors between members and their unit) -> unit index
    let mut owners: HashMap<*const Node, usize> = HashMap::with_capacity(list.len());

    for entry in list {
        let key = Rc::as_ptr(&entry.node);
        let owner = if entry.is_root {
            None
        } else {
            find_owner_unit(&entry.node, &mut owners)
        };

        match owner {
            Some(index) => {
                units[index].members.push(entry.node.clone());
                owners.insert(key, index);
            }
            None => {
                if !entry.is_root {
                    tracing::warn!(
                        "非根翻译节点没有位于列表中的祖先，按翻译根处理: <{}>",
                        entry.tag_name()
                    );
                }
                owners.insert(key, units.len());
                units.push(TranslationUnit::new(entry.node.clone()));
            }
        }
    }

    for unit in &mut units {
        unit.is_simple = unit.members.is_empty() && !has_element_children(&unit.root);
    }

    units
}

/// 沿父链向上寻找所属单元，并把途经的中间祖先映射到该单元
fn find_owner_unit(node: &Handle, owners: &mut HashMap<*const Node, usize>) -> Option<usize> {
    let mut intermediates = Vec::new();
    let mut ancestor = get_parent_node(node);

    while let Some(current) = ancestor {
        let key = Rc::as_ptr(&current);
        if let Some(&index) = owners.get(&key) {
            for intermediate in intermediates {
                owners.insert(intermediate, index);
            }
            return Some(index);
        }
        intermediates.push(key);
        ancestor = get_parent_node(&current);
    }

    None
}

fn has_element_children(node: &Handle) -> bool {
    node.children
        .borrow()
        .iter()
        .any(|child| matches!(child.data, NodeData::Element { .. }))
}
