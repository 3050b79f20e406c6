use crate::error::DomainResult;
use crate::product::{Product, ProductId};
use crate::shop::ShopConstraint;
use async_trait::async_trait;
use std::sync::Arc;

/// 按 ID 读取商品
#[async_trait]
pub trait ProductProvider: Send + Sync {
    /// 商品不存在时返回 `DomainError::NotFound`
    async fn get(&self, product_id: ProductId) -> DomainResult<Product>;
}

/// 将商品属性写回存储
#[async_trait]
pub trait ProductUpdater: Send + Sync {
    async fn update(&self, product: &Product, shop_constraint: &ShopConstraint)
    -> DomainResult<()>;
}

#[async_trait]
impl<T> ProductProvider for Arc<T>
where
    T: ProductProvider + ?Sized,
{
    async fn get(&self, product_id: ProductId) -> DomainResult<Product> {
        (**self).get(product_id).await
    }
}

#[async_trait]
impl<T> ProductUpdater for Arc<T>
where
    T: ProductUpdater + ?Sized,
{
    async fn update(
        &self,
        product: &Product,
        shop_constraint: &ShopConstraint,
    ) -> DomainResult<()> {
        (**self).update(product, shop_constraint).await
    }
}
