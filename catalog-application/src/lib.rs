//! 商品目录应用层（catalog-application）
//!
//! - 命令/查询契约与进程内总线（`command*`、`query*`、`inmemory_*_bus`）
//! - 商品命令处理器（`product`）：部分更新、移除全部定制字段
//! - 后台网格数据与日志网格装饰器（`grid`）
//! - 翻译端口（`translator`）与配置（`config`）
//! - 内存适配器（`inmemory_product_store`）
//!
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod config;
pub mod context;
pub mod dto;
pub mod error;
pub mod grid;
pub mod inmemory_command_bus;
pub mod inmemory_product_store;
pub mod inmemory_query_bus;
pub mod product;
pub mod query;
pub mod query_bus;
pub mod query_handler;
pub mod translator;

pub use inmemory_command_bus::InMemoryCommandBus;
pub use inmemory_product_store::InMemoryProductStore;
pub use inmemory_query_bus::InMemoryQueryBus;
