//! 翻译节点提取统一错误处理
//!
//! 提供结构化错误类型和错误处理机制

use thiserror::Error;

/// 翻译错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// 根节点不属于给定文档
    #[error("根节点不属于指定的文档")]
    WrongDocument,

    /// 根节点或文档上下文不可用
    #[error("状态无效: {0}")]
    InvalidState(String),

    /// 配置错误
    #[error("配置错误: {0}")]
    ConfigError(String),

    /// 输入输出错误
    #[error("输入输出错误: {0}")]
    IoError(String),

    /// 序列化错误
    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl TranslationError {
    /// 是否为遍历开始前的前置条件错误
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            TranslationError::WrongDocument | TranslationError::InvalidState(_)
        )
    }
}

impl From<std::io::Error> for TranslationError {
    fn from(error: std::io::Error) -> Self {
        TranslationError::IoError(error.to_string())
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(error: serde_json::Error) -> Self {
        TranslationError::SerializationError(error.to_string())
    }
}

/// 翻译结果类型
pub type TranslationResult<T> = Result<T, TranslationError>;
