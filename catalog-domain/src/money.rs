//! 金额解析
//!
//! 后台表单以字符串提交金额，统一在此解析为任意精度十进制数。
//!
use crate::error::{DomainError, DomainResult};
use rust_decimal::Decimal;
use std::str::FromStr;

/// 解析十进制金额字符串（允许首尾空白、负数与科学计数法）
pub fn parse_decimal(raw: &str) -> DomainResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::Parse {
            reason: "empty decimal string".to_string(),
        });
    }
    if trimmed.contains(['e', 'E']) {
        return Ok(Decimal::from_scientific(trimmed)?);
    }
    Ok(Decimal::from_str(trimmed)?)
}
