use std::fs;
use std::io::{self, Read};
use std::path::Path;

use markup5ever_rcdom::{Handle, RcDom};

use crate::parsers::html::{find_element_by_id, get_child_node_by_name, html_to_dom};
use crate::translation::config::ExtractionConfig;
use crate::translation::core::TranslationNodeExtractor;
use crate::translation::error::{TranslationError, TranslationResult};
use crate::translation::pipeline::TranslationNodeList;

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Target name that makes the CLI read its document from stdin
pub const STDIN_TARGET: &str = "-";

/// A parsed document together with the translation nodes found in it
///
/// The `RcDom` is kept alongside the list so that parent links of the
/// returned handles stay valid for as long as the result is in use.
pub struct ExtractedDocument {
    pub dom: RcDom,
    pub root: Handle,
    pub nodes: TranslationNodeList,
}

/// Returns the nodes of `root`'s subtree that should be handed to translation
///
/// Uses the default configuration: a budget of 15000 candidates and the
/// default block layout.
///
/// # Arguments
///
/// * `document` - The document node that owns `root`
/// * `root` - The content node whose descendants are searched (never included itself)
///
/// # Returns
///
/// The translation nodes in discovery order, or `InvalidState` / `WrongDocument`
/// if the preconditions do not hold.
///
/// # Examples
///
/// ```
/// use dom_translation_nodes::core::get_translation_nodes;
/// use dom_translation_nodes::parsers::html::{find_element_by_id, html_to_dom};
///
/// let dom = html_to_dom(b"<div id=\"main\"><p>Hello <b>world</b></p></div>", "utf-8");
/// let root = find_element_by_id(&dom.document, "main").unwrap();
///
/// let nodes = get_translation_nodes(&dom.document, &root).unwrap();
/// assert_eq!(nodes.len(), 2);
/// assert_eq!(nodes.is_translation_root_at(0), Some(true));
/// assert_eq!(nodes.is_translation_root_at(1), Some(false));
/// ```
pub fn get_translation_nodes(
    document: &Handle,
    root: &Handle,
) -> TranslationResult<TranslationNodeList> {
    TranslationNodeExtractor::default().extract(document, root)
}

/// Same as [`get_translation_nodes`], with an explicit configuration
pub fn get_translation_nodes_with_config(
    document: &Handle,
    root: &Handle,
    config: ExtractionConfig,
) -> TranslationResult<TranslationNodeList> {
    TranslationNodeExtractor::new(config).extract(document, root)
}

/// Parses raw HTML and extracts the translation nodes below the chosen root
///
/// # Arguments
///
/// * `input_data` - Raw HTML data as bytes
/// * `input_encoding` - Optional character encoding (defaults to UTF-8)
/// * `root_id` - Optional id of the root element (defaults to `<body>`)
/// * `config` - Extraction configuration
pub fn extract_from_data(
    input_data: &[u8],
    input_encoding: Option<&str>,
    root_id: Option<&str>,
    config: ExtractionConfig,
) -> TranslationResult<ExtractedDocument> {
    let dom = html_to_dom(input_data, input_encoding.unwrap_or("utf-8"));
    let root = select_root(&dom, root_id)?;
    let nodes = get_translation_nodes_with_config(&dom.document, &root, config)?;

    Ok(ExtractedDocument { dom, root, nodes })
}

/// Finds the root element: the element with the given id, or `<body>`
pub fn select_root(dom: &RcDom, root_id: Option<&str>) -> TranslationResult<Handle> {
    match root_id {
        Some(id) => find_element_by_id(&dom.document, id).ok_or_else(|| {
            TranslationError::InvalidState(format!("Element with id \"{id}\" not found"))
        }),
        None => get_child_node_by_name(&dom.document, "html")
            .and_then(|html| get_child_node_by_name(&html, "body"))
            .ok_or_else(|| TranslationError::InvalidState("Document has no body".to_string())),
    }
}

/// Reads document data from a local file, or from stdin when target is `-`
pub fn read_input(target: &str) -> TranslationResult<Vec<u8>> {
    if target == STDIN_TARGET {
        let mut data = Vec::new();
        io::stdin().read_to_end(&mut data)?;
        return Ok(data);
    }

    let path = Path::new(target);
    if !path.exists() {
        return Err(TranslationError::IoError(format!(
            "File not found: {target}"
        )));
    }

    fs::read(path)
        .map_err(|e| TranslationError::IoError(format!("Failed to read file: {e}")))
}

/// Prints an error message to stderr in red
pub fn print_error_message(msg: &str) {
    eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
