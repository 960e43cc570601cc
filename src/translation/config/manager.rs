//! 简化的配置管理器
//!
//! 提供统一的配置接口，支持文件配置、环境变量和默认值

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::constants;
use crate::translation::error::{TranslationError, TranslationResult};

/// 翻译节点提取配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// 单次调用最多返回的翻译节点数
    pub budget: usize,
    /// 候选集合的初始容量
    pub candidate_capacity: usize,
    /// 结果列表的初始容量
    pub list_capacity: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            budget: constants::CANDIDATE_BUDGET,
            candidate_capacity: constants::CANDIDATE_SET_CAPACITY,
            list_capacity: constants::NODE_LIST_CAPACITY,
        }
    }
}

impl ExtractionConfig {
    /// 创建带指定预算的默认配置
    pub fn with_budget(budget: usize) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }

    /// 验证配置
    pub fn validate(&self) -> TranslationResult<()> {
        if self.budget == 0 {
            return Err(TranslationError::ConfigError("预算不能为0".to_string()));
        }

        if self.budget > constants::CANDIDATE_BUDGET {
            return Err(TranslationError::ConfigError(format!(
                "预算不能超过全局上限 {}",
                constants::CANDIDATE_BUDGET
            )));
        }

        if self.list_capacity == 0 {
            return Err(TranslationError::ConfigError("结果列表容量不能为0".to_string()));
        }

        // 容量只是预分配提示，超过全局上限的部分永远用不到
        if self.candidate_capacity > constants::CANDIDATE_BUDGET
            || self.list_capacity > constants::CANDIDATE_BUDGET
        {
            return Err(TranslationError::ConfigError(format!(
                "容量提示不能超过全局上限 {}",
                constants::CANDIDATE_BUDGET
            )));
        }

        Ok(())
    }

    /// 应用环境变量覆盖（使用类型安全环境变量系统）
    pub fn apply_env_overrides(&mut self) -> TranslationResult<()> {
        use crate::env::{extraction, EnvVar};

        if let Some(budget) = extraction::Budget::get_if_set() {
            self.budget = budget.map_err(|e| TranslationError::ConfigError(e.to_string()))?;
            tracing::info!("环境变量覆盖预算: {}", self.budget);
        }

        Ok(())
    }
}

/// 简化的配置管理器
pub struct ConfigManager {
    config: ExtractionConfig,
}

impl ConfigManager {
    /// 创建新的配置管理器
    pub fn new() -> TranslationResult<Self> {
        let mut config = Self::load_config()?;
        config.apply_env_overrides()?;
        config.validate()?;

        Ok(Self { config })
    }

    /// 从指定文件创建配置管理器
    pub fn from_file(path: &str) -> TranslationResult<Self> {
        Self::load_dotenv();

        let expanded_path = shellexpand::tilde(path);
        let mut config = Self::load_from_file(&expanded_path)?;
        config.apply_env_overrides()?;
        config.validate()?;

        Ok(Self { config })
    }

    /// 取出配置
    pub fn into_config(self) -> ExtractionConfig {
        self.config
    }

    /// 从文件加载配置
    fn load_config() -> TranslationResult<ExtractionConfig> {
        Self::load_dotenv();

        {
            use crate::env::{extraction, EnvVar};

            if let Some(path) = extraction::ConfigPath::get_if_set() {
                let path = path.map_err(|e| TranslationError::ConfigError(e.to_string()))?;
                tracing::info!("加载配置文件: {}", path);
                return Self::load_from_file(&path);
            }
        }

        // 查找配置文件
        for path in constants::CONFIG_PATHS {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                tracing::info!("加载配置文件: {}", expanded_path);
                return Self::load_from_file(&expanded_path);
            }
        }

        tracing::debug!("未找到配置文件，使用默认配置");
        Ok(ExtractionConfig::default())
    }

    /// 从指定文件加载配置
    fn load_from_file(path: &str) -> TranslationResult<ExtractionConfig> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TranslationError::ConfigError(format!("读取配置文件失败: {}", e)))?;

        Self::parse_config(path, &content)
    }

    /// 解析配置内容，`.toml` 结尾按 TOML 解析，其余按 JSON 解析
    fn parse_config(path: &str, content: &str) -> TranslationResult<ExtractionConfig> {
        if path.ends_with(".toml") {
            toml::from_str(content)
                .map_err(|e| TranslationError::ConfigError(format!("解析TOML配置失败: {}", e)))
        } else {
            serde_json::from_str(content)
                .map_err(|e| TranslationError::ConfigError(format!("解析JSON配置失败: {}", e)))
        }
    }

    /// 加载 .env 文件
    ///
    /// 重复调用不会覆盖已经存在的环境变量
    pub fn load_dotenv() {
        for env_file in constants::ENV_FILES {
            if Path::new(env_file).exists() && dotenv::from_filename(env_file).is_ok() {
                tracing::debug!("已加载环境变量文件: {}", env_file);
                break;
            }
        }
    }
}
