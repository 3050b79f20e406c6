//! 商品相关命令与处理器
//!
mod remove_all_customization_fields;
mod update_product;

pub use remove_all_customization_fields::{
    RemoveAllCustomizationFieldsFromProductCommand, RemoveAllCustomizationFieldsFromProductHandler,
};
pub use update_product::{UpdateProductCommand, UpdateProductHandler};
