//! 商品目录领域层（catalog-domain）
//!
//! 提供后台商品管理所需的领域构件：
//! - 标识与值对象（`value_object`、`shop`、`localization`、`product`）
//! - 商品实体与定制字段模型（`product`、`entity`）
//! - 金额解析（`money`）
//! - 面向基础设施的端口（`persist`）：商品读取、定制字段删除、定制能力刷新与商品更新
//!
//! 本 crate 不关心存储与传输实现，仅定义领域层接口与错误类型，
//! 具体适配（数据库、内存实现等）由上层提供并注入。
//!
pub mod entity;
pub mod error;
pub mod localization;
pub mod money;
pub mod persist;
pub mod product;
pub mod shop;
pub mod value_object;

// 允许在本 crate 内部通过 ::catalog_domain 进行自引用，
// 以便过程宏生成的路径在本 crate 内同样可以解析。
extern crate self as catalog_domain;
