//! 提取配置管理模块
//!
//! 提供简化的配置管理，支持环境变量、配置文件和默认值

pub mod manager;

// 重新导出主要类型
pub use manager::{ConfigManager, ExtractionConfig};

/// 配置常量
pub mod constants {
    // 候选节点预算（全局上限）
    pub const CANDIDATE_BUDGET: usize = 15000;

    // 内部存储的初始容量，仅用于性能
    pub const CANDIDATE_SET_CAPACITY: usize = 500;
    pub const NODE_LIST_CAPACITY: usize = 1000;

    // 通常包含不可翻译文本的元素
    pub const SKIP_ELEMENTS: &[&str] = &[
        "script", "iframe", "frameset", "frame", "code", "noscript", "style",
    ];

    // 默认按块级元素处理的标签
    pub const BLOCK_LEVEL_ELEMENTS: &[&str] = &[
        "address", "article", "aside", "blockquote", "canvas", "dd", "div", "dl", "dt",
        "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5",
        "h6", "header", "hr", "li", "main", "nav", "noscript", "ol", "p", "pre", "section",
        "table", "tfoot", "ul", "video",
    ];

    // 会生成块容器的 display 取值
    pub const BLOCK_DISPLAY_VALUES: &[&str] = &[
        "block", "inline-block", "list-item", "flow-root", "table-caption",
    ];

    // 配置文件搜索路径
    pub const CONFIG_PATHS: &[&str] = &[
        "translation-nodes.toml",
        ".translation-nodes.toml",
        "~/.config/translation-nodes/config.toml",
    ];

    // .env 文件
    pub const ENV_FILES: &[&str] = &[".env.local", ".env"];
}
