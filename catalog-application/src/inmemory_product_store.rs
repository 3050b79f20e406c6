use async_trait::async_trait;
use catalog_domain::entity::Entity;
use catalog_domain::error::{DomainError, DomainResult};
use catalog_domain::persist::{
    CustomizationFieldDeleter, ProductCustomizabilityUpdater, ProductProvider, ProductUpdater,
};
use catalog_domain::product::{CustomizationFieldId, Product, ProductId};
use catalog_domain::shop::ShopConstraint;
use dashmap::DashMap;
use tracing::debug;

/// 基于内存的商品存储
///
/// 同时实现商品读取、定制字段删除、定制能力刷新与商品写回端口，
/// 适用于测试与演示。写回时记录最近一次使用的店铺作用域。
#[derive(Default)]
pub struct InMemoryProductStore {
    products: DashMap<ProductId, Product>,
    last_scopes: DashMap<ProductId, ShopConstraint>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 写入（或覆盖）一个商品
    pub fn insert(&self, product: Product) {
        self.products.insert(product.id(), product);
    }

    /// 读取商品快照
    pub fn product(&self, product_id: ProductId) -> Option<Product> {
        self.products.get(&product_id).map(|p| p.value().clone())
    }

    /// 最近一次写回该商品时使用的店铺作用域
    pub fn last_update_scope(&self, product_id: ProductId) -> Option<ShopConstraint> {
        self.last_scopes.get(&product_id).map(|s| *s.value())
    }

    fn owns_field(&self, field_id: CustomizationFieldId) -> bool {
        self.products.iter().any(|p| {
            p.customization_fields()
                .iter()
                .any(|f| f.id() == field_id)
        })
    }
}

#[async_trait]
impl ProductProvider for InMemoryProductStore {
    async fn get(&self, product_id: ProductId) -> DomainResult<Product> {
        self.product(product_id)
            .ok_or_else(|| DomainError::not_found(format!("product {product_id}")))
    }
}

#[async_trait]
impl ProductUpdater for InMemoryProductStore {
    async fn update(
        &self,
        product: &Product,
        shop_constraint: &ShopConstraint,
    ) -> DomainResult<()> {
        let Some(mut stored) = self.products.get_mut(&product.id()) else {
            return Err(DomainError::not_found(format!("product {}", product.id())));
        };
        // 定制字段由专门的端口维护，这里保留存储中的版本
        let fields = stored.customization_fields().to_vec();
        *stored = product.clone().with_customization_fields(fields);
        drop(stored);

        self.last_scopes.insert(product.id(), *shop_constraint);
        Ok(())
    }
}

#[async_trait]
impl CustomizationFieldDeleter for InMemoryProductStore {
    async fn delete(&self, field_id: CustomizationFieldId) -> DomainResult<()> {
        self.bulk_delete(&[field_id]).await
    }

    /// 全有或全无：任一字段不存在时不删除任何字段
    async fn bulk_delete(&self, field_ids: &[CustomizationFieldId]) -> DomainResult<()> {
        if field_ids.is_empty() {
            return Ok(());
        }

        if let Some(missing) = field_ids.iter().find(|id| !self.owns_field(**id)) {
            return Err(DomainError::not_found(format!(
                "customization field {missing}"
            )));
        }

        let mut removed = 0;
        for mut product in self.products.iter_mut() {
            removed += product.remove_customization_fields(field_ids);
        }
        debug!(removed, "customization fields deleted");
        Ok(())
    }
}

#[async_trait]
impl ProductCustomizabilityUpdater for InMemoryProductStore {
    async fn refresh_product_customizability(&self, product: &Product) -> DomainResult<()> {
        let Some(mut stored) = self.products.get_mut(&product.id()) else {
            return Err(DomainError::not_found(format!("product {}", product.id())));
        };
        stored.refresh_customizability();
        debug!(
            product_id = %product.id(),
            customizability = stored.customizability().value(),
            "product customizability refreshed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_domain::product::{
        Customizability, CustomizationField, CustomizationFieldType,
    };

    fn field(id: u32, required: bool) -> CustomizationField {
        CustomizationField::builder()
            .id(CustomizationFieldId::new(id).unwrap())
            .kind(CustomizationFieldType::Text)
            .required(required)
            .build()
    }

    fn store_with(id: u32, fields: Vec<CustomizationField>) -> InMemoryProductStore {
        let store = InMemoryProductStore::new();
        store.insert(Product::new(ProductId::new(id).unwrap()).with_customization_fields(fields));
        store
    }

    #[tokio::test]
    async fn get_missing_product_is_not_found() {
        let store = InMemoryProductStore::new();
        let err = store.get(ProductId::new(1).unwrap()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn bulk_delete_is_all_or_nothing() {
        let store = store_with(1, vec![field(1, false), field(2, false)]);
        let err = store
            .bulk_delete(&[
                CustomizationFieldId::new(1).unwrap(),
                CustomizationFieldId::new(99).unwrap(),
            ])
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let product = store.product(ProductId::new(1).unwrap()).unwrap();
        assert_eq!(product.customization_fields().len(), 2);
    }

    #[tokio::test]
    async fn delete_and_refresh() {
        let store = store_with(1, vec![field(1, true), field(2, false)]);
        let id = ProductId::new(1).unwrap();

        store
            .delete(CustomizationFieldId::new(1).unwrap())
            .await
            .unwrap();
        let product = store.product(id).unwrap();
        assert_eq!(product.customization_fields().len(), 1);
        // 删除后尚未刷新
        assert_eq!(
            product.customizability(),
            Customizability::RequiresCustomization
        );

        store.refresh_product_customizability(&product).await.unwrap();
        assert_eq!(
            store.product(id).unwrap().customizability(),
            Customizability::AllowsCustomization
        );
    }

    #[tokio::test]
    async fn update_keeps_stored_customization_fields_and_records_scope() {
        let store = store_with(1, vec![field(1, false)]);
        let id = ProductId::new(1).unwrap();

        let mut changed = Product::new(id);
        changed.mpn = "X-1".into();
        store
            .update(&changed, &ShopConstraint::all_shops())
            .await
            .unwrap();

        let stored = store.product(id).unwrap();
        assert_eq!(stored.mpn, "X-1");
        assert_eq!(stored.customization_fields().len(), 1);
        assert_eq!(store.last_update_scope(id), Some(ShopConstraint::AllShops));
    }
}
