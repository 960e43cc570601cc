//! HTML解析和处理模块
//!
//! - `utils`: 基础工具函数和常量
//! - `dom`: 基础DOM操作
//! - `walker`: 有预算限制的候选节点遍历

pub mod dom;
pub mod utils;
pub mod walker;

pub use dom::{
    find_element_by_id, get_child_node_by_name, get_node_attr, get_node_name, get_parent_node,
    html_to_dom, is_html_element, is_same_node, owner_document,
};
pub use utils::WHITESPACES;
pub use walker::{CandidateWalker, PreorderWalker, WalkStats};
