use std::rc::Rc;

use encoding_rs::Encoding;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::{namespace_url, ns};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// 将 HTML 字节转换为 DOM
pub fn html_to_dom(data: &[u8], document_encoding: &str) -> RcDom {
    let s: String = match Encoding::for_label(document_encoding.as_bytes()) {
        Some(encoding) => {
            let (string, _, _) = encoding.decode(data);
            string.into_owned()
        }
        None => String::from_utf8_lossy(data).into_owned(),
    };

    // Reading from an in-memory slice never fails, the sink absorbs parse errors
    parse_document(RcDom::default(), Default::default()).one(s)
}

/// 根据 id 属性查找元素（文档顺序中的第一个）
pub fn find_element_by_id(node: &Handle, id: &str) -> Option<Handle> {
    if get_node_attr(node, "id").as_deref() == Some(id) {
        return Some(node.clone());
    }

    node.children
        .borrow()
        .iter()
        .find_map(|child| find_element_by_id(child, id))
}

/// 根据名称获取子节点
pub fn get_child_node_by_name(parent: &Handle, node_name: &str) -> Option<Handle> {
    let children = parent.children.borrow();
    let matching_children = children.iter().find(|child| match child.data {
        NodeData::Element { ref name, .. } => &*name.local == node_name,
        _ => false,
    });
    matching_children.cloned()
}

/// 获取节点属性值
pub fn get_node_attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => {
            for attr in attrs.borrow().iter() {
                if &*attr.name.local == attr_name {
                    return Some(attr.value.to_string());
                }
            }
            None
        }
        _ => None,
    }
}

/// 获取节点名称
pub fn get_node_name(node: &Handle) -> Option<&'_ str> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

/// 判断节点是否为 HTML 命名空间中的元素
pub fn is_html_element(node: &Handle) -> bool {
    match &node.data {
        NodeData::Element { name, .. } => name.ns == ns!(html),
        _ => false,
    }
}

/// 获取父节点
///
/// rcdom 把父节点存放在 `Cell<Option<Weak>>` 中，读取时需要先取出再放回，
/// 否则节点会与父节点断开。
pub fn get_parent_node(child: &Handle) -> Option<Handle> {
    let weak = child.parent.take();
    let parent = weak.as_ref().and_then(|node| node.upgrade());
    child.parent.set(weak);
    parent
}

/// 获取节点所属的文档节点
///
/// 沿父链向上查找；游离子树（顶端不是文档节点）没有所属文档。
pub fn owner_document(node: &Handle) -> Option<Handle> {
    let mut current = node.clone();
    while let Some(parent) = get_parent_node(&current) {
        current = parent;
    }

    match current.data {
        NodeData::Document => Some(current),
        _ => None,
    }
}

/// 判断两个句柄是否指向同一个节点
pub fn is_same_node(a: &Handle, b: &Handle) -> bool {
    Rc::ptr_eq(a, b)
}
