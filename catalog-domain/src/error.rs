//! 领域层统一错误定义
//!
//! 聚焦值对象校验、解析、命令与仓储的最小必要集合，
//! 便于在各实现层统一转换为 `DomainError`。
//!
use thiserror::Error;

/// 统一错误类型（最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 值对象/解析 ---
    #[error("parse error: {reason}")]
    Parse { reason: String },
    #[error("invalid value: {reason}")]
    InvalidValue { reason: String },

    // --- 领域规则/命令 ---
    #[error("invalid command: {reason}")]
    InvalidCommand { reason: String },

    // --- 仓储/持久化 ---
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("repository error: {reason}")]
    Repository { reason: String },
}

impl DomainError {
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

// 允许在值对象构造中直接使用 `?` 将解析错误转换为 DomainError

impl From<std::num::ParseIntError> for DomainError {
    fn from(err: std::num::ParseIntError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<rust_decimal::Error> for DomainError {
    fn from(err: rust_decimal::Error) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}
