//! # 解析器模块
//!
//! - `html` - HTML文档解析、DOM操作、候选节点遍历
//! - `css` - 内联样式声明解析

pub mod css;
pub mod html;

// Re-export commonly used items for convenience
pub use css::get_declared_display;
pub use html::{find_element_by_id, get_node_name, html_to_dom};
