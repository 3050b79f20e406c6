//! 持久化端口（persist）
//!
//! 定义应用层处理器依赖的基础设施能力：
//! - 商品读取（`ProductProvider`）；
//! - 定制字段删除（`CustomizationFieldDeleter`）；
//! - 定制能力刷新（`ProductCustomizabilityUpdater`）；
//! - 商品属性写回（`ProductUpdater`）。
//!
//! 该模块只描述协议，具体存储后端由上层实现并注入。
//!
mod customization;
mod product;

pub use customization::{CustomizationFieldDeleter, ProductCustomizabilityUpdater};
pub use product::{ProductProvider, ProductUpdater};
