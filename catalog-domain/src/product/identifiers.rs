//! 商品编码类值对象
//!
//! 空字符串均合法，表示清空该编码。
//!
use crate::error::{DomainError, DomainResult};
use crate::value_object::{ValueObject, check_chars};
use catalog_macros::value_object;
use std::fmt;

macro_rules! string_value_object {
    ($(#[$meta:meta])* $name:ident, $label:literal, $max:expr, $allowed:expr) => {
        $(#[$meta])*
        #[value_object]
        #[derive(Default, Hash)]
        #[serde(try_from = "String")]
        pub struct $name(String);

        impl $name {
            pub const MAX_LENGTH: usize = $max;

            pub fn new(value: impl Into<String>) -> DomainResult<Self> {
                let vo = Self(value.into());
                vo.validate()?;
                Ok(vo)
            }

            pub fn value(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl TryFrom<String> for $name {
            type Error = DomainError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl ValueObject for $name {
            type Error = DomainError;

            fn validate(&self) -> Result<(), Self::Error> {
                check_chars($label, &self.0, Self::MAX_LENGTH, $allowed)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_value_object!(
    /// ISBN：数字与连字符，最多 32 位
    Isbn,
    "isbn",
    32,
    |c: char| c.is_ascii_digit() || c == '-'
);

string_value_object!(
    /// UPC 条码：最多 12 位数字
    Upc,
    "upc",
    12,
    |c: char| c.is_ascii_digit()
);

string_value_object!(
    /// EAN-13 条码：最多 13 位数字
    Ean13,
    "ean13",
    13,
    |c: char| c.is_ascii_digit()
);

string_value_object!(
    /// 商家自定义参考号：最多 64 个字符，不含 `<>;={}`
    Reference,
    "reference",
    64,
    |c: char| !matches!(c, '<' | '>' | ';' | '=' | '{' | '}')
);
