//! 目录领域过程宏（catalog-macros）
//!
//! - `#[value_object]`：为值对象补齐派生（Clone/Debug/Serialize/Deserialize/PartialEq/Eq）
//! - `#[entity_id]`：为单字段整型 tuple struct 生成带校验的标识类型
//!
//! 生成代码引用 `::catalog_domain::error::DomainError`，因此使用方需依赖 `catalog-domain`。
use proc_macro::TokenStream;

mod derive_utils;
mod entity_id;
mod value_object;

/// 值对象宏
///
/// 支持结构体（具名或 tuple）与枚举，合并/追加派生：
/// `Debug`（可关闭）、`Clone`、`Serialize`、`Deserialize`、`PartialEq`、`Eq`。
///
/// 参数：
/// - `debug = false`：不派生 `Debug`，由使用方手写实现
/// - `copy = true`：额外派生 `Copy` 与 `Hash`
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}

/// 实体 ID 宏
///
/// 用于 `struct ProductId(u32);` 这类整型标识：
/// - 合并派生 `Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord`
/// - 生成 `new(value) -> Result<Self, DomainError>`，拒绝非正数
/// - 生成 `value()`、`Display`、`FromStr`、`TryFrom<i64>` 与 `From<Self> for inner`
/// - 反序列化经由 `TryFrom<i64>`，保证与 `new` 相同的校验
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}
