use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
};
use async_trait::async_trait;
use catalog_domain::error::DomainResult;
use catalog_domain::persist::{
    CustomizationFieldDeleter, ProductCustomizabilityUpdater, ProductProvider,
};
use catalog_domain::product::ProductId;
use tracing::{debug, info};

/// 移除商品的全部定制字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveAllCustomizationFieldsFromProductCommand {
    product_id: ProductId,
}

impl RemoveAllCustomizationFieldsFromProductCommand {
    pub fn new(product_id: i64) -> DomainResult<Self> {
        Ok(Self {
            product_id: ProductId::try_from(product_id)?,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }
}

impl Command for RemoveAllCustomizationFieldsFromProductCommand {
    const NAME: &'static str = "product.remove_all_customization_fields";
}

/// 处理 [`RemoveAllCustomizationFieldsFromProductCommand`]
///
/// 依次：读取商品 → 批量删除其定制字段 → 刷新商品定制能力。
/// 任一步失败即返回；删除成功而刷新失败时不回滚。
pub struct RemoveAllCustomizationFieldsFromProductHandler<P, D, U> {
    product_provider: P,
    customization_field_deleter: D,
    customizability_updater: U,
}

impl<P, D, U> RemoveAllCustomizationFieldsFromProductHandler<P, D, U>
where
    P: ProductProvider,
    D: CustomizationFieldDeleter,
    U: ProductCustomizabilityUpdater,
{
    pub fn new(
        customization_field_deleter: D,
        product_provider: P,
        customizability_updater: U,
    ) -> Self {
        Self {
            product_provider,
            customization_field_deleter,
            customizability_updater,
        }
    }
}

#[async_trait]
impl<P, D, U> CommandHandler<RemoveAllCustomizationFieldsFromProductCommand>
    for RemoveAllCustomizationFieldsFromProductHandler<P, D, U>
where
    P: ProductProvider,
    D: CustomizationFieldDeleter,
    U: ProductCustomizabilityUpdater,
{
    #[tracing::instrument(
        name = "remove_all_customization_fields",
        skip_all,
        fields(product_id = %cmd.product_id(), actor_id = ctx.actor_id())
    )]
    async fn handle(
        &self,
        ctx: &AppContext,
        cmd: RemoveAllCustomizationFieldsFromProductCommand,
    ) -> Result<(), AppError> {
        let product = self.product_provider.get(cmd.product_id()).await?;

        let field_ids = product.customization_field_ids();
        debug!(count = field_ids.len(), "deleting customization fields");
        self.customization_field_deleter
            .bulk_delete(&field_ids)
            .await?;

        self.customizability_updater
            .refresh_product_customizability(&product)
            .await?;

        info!(removed = field_ids.len(), "customization fields removed");
        Ok(())
    }
}
