//! 商品（Product）
//!
//! - 标识：`ProductId`、`ManufacturerId` 与可表示“无品牌”的 `ManufacturerReference`
//! - 展示属性：可见性、成色、跳转选项（`attributes`）
//! - 编码类值对象：ISBN、UPC、EAN-13、参考号（`identifiers`）
//! - 定制字段及定制能力（`customization`）
//! - 商品实体（`Product`）
//!
mod attributes;
mod customization;
mod identifiers;
mod model;

pub use attributes::{ProductCondition, ProductVisibility, RedirectOption, RedirectType};
pub use customization::{
    Customizability, CustomizationField, CustomizationFieldId, CustomizationFieldType,
};
pub use identifiers::{Ean13, Isbn, Reference, Upc};
pub use model::Product;

use crate::error::{DomainError, DomainResult};
use catalog_macros::{entity_id, value_object};

#[entity_id]
pub struct ProductId(u32);

#[entity_id]
pub struct ManufacturerId(u32);

/// 商品的品牌关联：`0` 表示不关联任何品牌
#[value_object(copy = true)]
#[derive(Default)]
pub enum ManufacturerReference {
    #[default]
    NoManufacturer,
    Manufacturer(ManufacturerId),
}

impl ManufacturerReference {
    /// 表示“无品牌”的原始值
    pub const NO_MANUFACTURER_ID: i64 = 0;

    /// 从原始整型构造：`0` 为无品牌，正数为品牌 ID，负数报错
    pub fn from_raw(raw: i64) -> DomainResult<Self> {
        match raw {
            Self::NO_MANUFACTURER_ID => Ok(Self::NoManufacturer),
            r if r < 0 => Err(DomainError::invalid_value(format!(
                "manufacturer id must not be negative, got {r}"
            ))),
            r => Ok(Self::Manufacturer(ManufacturerId::try_from(r)?)),
        }
    }

    pub fn manufacturer_id(&self) -> Option<ManufacturerId> {
        match self {
            Self::Manufacturer(id) => Some(*id),
            Self::NoManufacturer => None,
        }
    }

    /// 原始整型值（无品牌为 `0`）
    pub fn value(&self) -> u32 {
        self.manufacturer_id().map_or(0, |id| id.value())
    }
}
