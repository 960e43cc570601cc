//! 文本过滤器模块
//!
//! 判断一段文本是否包含值得翻译的内容。
//!
//! 文本片段有两种存储宽度：所有字符都落在 U+0000..=U+00FF 时使用单字节
//! (Latin-1) 存储，否则使用 UTF-16 宽存储。需要宽存储就意味着至少有一个
//! 单字节范围之外的字符，这类片段一律视为可翻译。单字节片段则逐字节检查
//! 是否存在字母。

use std::borrow::Cow;

use crate::parsers::html::utils::is_whitespace_byte;

/// 文本片段的底层存储
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentStorage<'a> {
    /// 单字节存储，每个字节即一个 Latin-1 码位
    Narrow(Cow<'a, [u8]>),
    /// UTF-16 宽存储
    Wide(Cow<'a, [u16]>),
}

/// 待分类的文本片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment<'a> {
    storage: FragmentStorage<'a>,
    /// 缓存的"仅包含空白"标记，`None` 表示尚未计算
    only_whitespace: Option<bool>,
}

impl<'a> TextFragment<'a> {
    /// 从字符串创建片段，自动选择存储宽度
    pub fn new(text: &'a str) -> Self {
        let storage = if text.is_ascii() {
            FragmentStorage::Narrow(Cow::Borrowed(text.as_bytes()))
        } else if text.chars().all(|c| (c as u32) <= 0xFF) {
            FragmentStorage::Narrow(Cow::Owned(text.chars().map(|c| c as u8).collect()))
        } else {
            FragmentStorage::Wide(Cow::Owned(text.encode_utf16().collect()))
        };

        Self {
            storage,
            only_whitespace: None,
        }
    }

    /// 从 DOM 文本节点创建片段，同时填充空白标记
    ///
    /// DOM 文本在构建时就可以确定是否只含空白，分类时直接走缓存。
    pub fn from_dom_text(text: &'a str) -> Self {
        let mut fragment = Self::new(text);
        fragment.cache_whitespace_flag();
        fragment
    }

    /// 从单字节 (Latin-1) 数据创建片段
    pub fn narrow(bytes: &'a [u8]) -> Self {
        Self {
            storage: FragmentStorage::Narrow(Cow::Borrowed(bytes)),
            only_whitespace: None,
        }
    }

    /// 从 UTF-16 数据创建片段
    pub fn wide(units: &'a [u16]) -> Self {
        Self {
            storage: FragmentStorage::Wide(Cow::Borrowed(units)),
            only_whitespace: None,
        }
    }

    /// 设置缓存的空白标记
    pub fn with_whitespace_flag(mut self, only_whitespace: bool) -> Self {
        self.only_whitespace = Some(only_whitespace);
        self
    }

    /// 计算并缓存空白标记
    pub fn cache_whitespace_flag(&mut self) -> bool {
        let only_whitespace = match &self.storage {
            FragmentStorage::Narrow(bytes) => bytes.iter().all(|&b| is_whitespace_byte(b)),
            FragmentStorage::Wide(units) => units
                .iter()
                .all(|&u| u < 0x80 && is_whitespace_byte(u as u8)),
        };
        self.only_whitespace = Some(only_whitespace);
        only_whitespace
    }

    /// 是否为宽存储
    pub fn is_wide(&self) -> bool {
        matches!(self.storage, FragmentStorage::Wide(_))
    }

    /// 缓存的空白标记
    pub fn cached_only_whitespace(&self) -> Option<bool> {
        self.only_whitespace
    }

    /// 获取底层存储
    pub fn storage(&self) -> &FragmentStorage<'a> {
        &self.storage
    }

    /// 片段长度（存储单元数）
    pub fn len(&self) -> usize {
        match &self.storage {
            FragmentStorage::Narrow(bytes) => bytes.len(),
            FragmentStorage::Wide(units) => units.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<&'a str> for TextFragment<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text)
    }
}

/// 判断单个字节是否为前 256 个码位中的字母
///
/// 215 (×) 与 247 (÷) 不是字母。
pub fn is_letter_byte(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
        || (192..=214).contains(&byte)
        || (216..=246).contains(&byte)
        || byte >= 248
}

/// 判断文本片段是否包含可翻译内容
pub fn has_translatable_content(fragment: &TextFragment<'_>) -> bool {
    let bytes = match &fragment.storage {
        // Wide storage means at least one code point beyond U+00FF
        FragmentStorage::Wide(_) => return true,
        FragmentStorage::Narrow(bytes) => bytes,
    };

    if fragment.only_whitespace == Some(true) {
        return false;
    }

    bytes.iter().any(|&b| is_letter_byte(b))
}

/// 便利函数：判断 DOM 文本是否包含可翻译内容
pub fn text_has_translatable_content(text: &str) -> bool {
    has_translatable_content(&TextFragment::from_dom_text(text))
}
