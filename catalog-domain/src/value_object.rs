//! 值对象（Value Object）
//!
//! 无标识、以值相等为准的对象，用于封装不可变的概念性值与校验逻辑。
//! 字符串类值对象通过 [`ValueObject::validate`] 在构造时完成格式校验。
//!

use crate::error::{DomainError, DomainResult};

/// 值对象抽象
pub trait ValueObject {
    /// 业务校验失败时的错误类型
    type Error;

    /// 创建值对象时进行验证
    fn validate(&self) -> Result<(), Self::Error>;
}

/// 校验字符串长度（按字符计）与字符集
///
/// - `name`：用于错误信息的值对象名称
/// - `max_len`：最大字符数
/// - `allowed`：逐字符判定
pub(crate) fn check_chars(
    name: &str,
    value: &str,
    max_len: usize,
    allowed: impl Fn(char) -> bool,
) -> DomainResult<()> {
    let len = value.chars().count();
    if len > max_len {
        return Err(DomainError::invalid_value(format!(
            "{name} is too long: {len} characters, max {max_len}"
        )));
    }
    if let Some(bad) = value.chars().find(|c| !allowed(*c)) {
        return Err(DomainError::invalid_value(format!(
            "{name} contains invalid character {bad:?}: {value:?}"
        )));
    }
    Ok(())
}
