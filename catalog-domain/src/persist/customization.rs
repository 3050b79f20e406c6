use crate::error::DomainResult;
use crate::product::{CustomizationFieldId, Product};
use async_trait::async_trait;
use std::sync::Arc;

/// 删除定制字段
#[async_trait]
pub trait CustomizationFieldDeleter: Send + Sync {
    async fn delete(&self, field_id: CustomizationFieldId) -> DomainResult<()>;

    /// 批量删除；空列表为合法的空操作
    async fn bulk_delete(&self, field_ids: &[CustomizationFieldId]) -> DomainResult<()>;
}

/// 依据商品现存定制字段重新计算其定制能力并保存
#[async_trait]
pub trait ProductCustomizabilityUpdater: Send + Sync {
    async fn refresh_product_customizability(&self, product: &Product) -> DomainResult<()>;
}

#[async_trait]
impl<T> CustomizationFieldDeleter for Arc<T>
where
    T: CustomizationFieldDeleter + ?Sized,
{
    async fn delete(&self, field_id: CustomizationFieldId) -> DomainResult<()> {
        (**self).delete(field_id).await
    }

    async fn bulk_delete(&self, field_ids: &[CustomizationFieldId]) -> DomainResult<()> {
        (**self).bulk_delete(field_ids).await
    }
}

#[async_trait]
impl<T> ProductCustomizabilityUpdater for Arc<T>
where
    T: ProductCustomizabilityUpdater + ?Sized,
{
    async fn refresh_product_customizability(&self, product: &Product) -> DomainResult<()> {
        (**self).refresh_product_customizability(product).await
    }
}
