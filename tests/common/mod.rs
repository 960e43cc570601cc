// 集成测试公共模块
//
// 提供测试辅助工具和共享功能

use std::io::Cursor;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, RcDom};

use dom_translation_nodes::parsers::html::{
    find_element_by_id, get_child_node_by_name, get_node_attr, PreorderWalker,
};
use dom_translation_nodes::translation::{ExtractionConfig, TranslationNodeExtractor};
use dom_translation_nodes::TranslationNodeList;

/// HTML测试工具
pub struct HtmlTestHelper;

impl HtmlTestHelper {
    /// 创建测试用的DOM结构
    pub fn create_test_dom(html: &str) -> RcDom {
        let mut input = Cursor::new(html);
        parse_document(RcDom::default(), Default::default())
            .from_utf8()
            .read_from(&mut input)
            .unwrap()
    }

    /// 按 id 查找元素，找不到时直接失败
    pub fn by_id(dom: &RcDom, id: &str) -> Handle {
        find_element_by_id(&dom.document, id)
            .unwrap_or_else(|| panic!("element #{} not found", id))
    }

    /// 获取 `<body>` 元素
    pub fn body(dom: &RcDom) -> Handle {
        let html = get_child_node_by_name(&dom.document, "html").unwrap();
        get_child_node_by_name(&html, "body").unwrap()
    }

    /// 收集带有指定属性的元素（按文档顺序）
    pub fn elements_with_attr(dom: &RcDom, attr_name: &str) -> Vec<(Handle, String)> {
        PreorderWalker::new(&dom.document)
            .filter_map(|node| get_node_attr(&node, attr_name).map(|value| (node, value)))
            .collect()
    }

    /// 重复的行内元素，用于预算测试
    pub fn create_repeated_inline_page(count: usize) -> String {
        let mut html = String::from("<html><body>");
        for _ in 0..count {
            html.push_str("<b>a</b>");
        }
        html.push_str("</body></html>");
        html
    }

    /// 每个列表项产生三个翻译节点的嵌套页面
    pub fn create_nested_list_page(items: usize) -> String {
        let mut html = String::from("<html><ul>");
        for _ in 0..items {
            html.push_str("<li>Foo<a><b>Bar</b></a><div>Lorem</div></li>");
        }
        html.push_str("</ul></html>");
        html
    }
}

/// 提取辅助工具
pub struct ExtractionHelper;

impl ExtractionHelper {
    /// 使用默认配置提取
    pub fn extract(dom: &RcDom, root: &Handle) -> TranslationNodeList {
        TranslationNodeExtractor::default()
            .extract(&dom.document, root)
            .unwrap()
    }

    /// 使用指定预算提取
    pub fn extract_with_budget(dom: &RcDom, root: &Handle, budget: usize) -> TranslationNodeList {
        TranslationNodeExtractor::new(ExtractionConfig::with_budget(budget))
            .extract(&dom.document, root)
            .unwrap()
    }
}
