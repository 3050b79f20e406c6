//! 多店铺（multi-store）作用域
//!
//! 一次操作可作用于单个店铺、某个店铺组或全部店铺。
//!
use catalog_macros::{entity_id, value_object};
use std::fmt;

#[entity_id]
pub struct ShopId(u32);

#[entity_id]
pub struct ShopGroupId(u32);

/// 店铺作用域选择器
#[value_object(copy = true)]
pub enum ShopConstraint {
    /// 单个店铺
    Shop(ShopId),
    /// 店铺组内的全部店铺
    ShopGroup(ShopGroupId),
    /// 全部店铺
    AllShops,
}

impl ShopConstraint {
    pub fn shop(shop_id: ShopId) -> Self {
        Self::Shop(shop_id)
    }

    pub fn shop_group(group_id: ShopGroupId) -> Self {
        Self::ShopGroup(group_id)
    }

    pub fn all_shops() -> Self {
        Self::AllShops
    }

    pub fn shop_id(&self) -> Option<ShopId> {
        match self {
            Self::Shop(id) => Some(*id),
            _ => None,
        }
    }

    pub fn shop_group_id(&self) -> Option<ShopGroupId> {
        match self {
            Self::ShopGroup(id) => Some(*id),
            _ => None,
        }
    }

    pub fn for_all_shops(&self) -> bool {
        matches!(self, Self::AllShops)
    }
}

impl fmt::Display for ShopConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shop(id) => write!(f, "shop:{id}"),
            Self::ShopGroup(id) => write!(f, "shop-group:{id}"),
            Self::AllShops => write!(f, "all-shops"),
        }
    }
}
