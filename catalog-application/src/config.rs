//! 网格配置
//!
use crate::error::AppError;
use serde::Deserialize;

/// 日志网格装饰器配置
///
/// ```rust
/// use catalog_application::config::LogGridConfig;
///
/// let raw = r#"{"translation_domain":"Admin.Advparameters"}"#;
/// let cfg = LogGridConfig::from_json_str(raw).unwrap();
/// assert_eq!(cfg.translation_domain, "Admin.Advparameters");
/// assert_eq!(cfg.empty_placeholder, "---");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogGridConfig {
    /// 标签与占位符使用的翻译域
    pub translation_domain: String,
    /// 空值占位符的消息键
    pub empty_placeholder: String,
}

impl Default for LogGridConfig {
    fn default() -> Self {
        Self {
            translation_domain: "Admin.Global".to_string(),
            empty_placeholder: "---".to_string(),
        }
    }
}

impl LogGridConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        serde_json::from_str(raw).map_err(|e| AppError::Config(e.to_string()))
    }
}
