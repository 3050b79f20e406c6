use async_trait::async_trait;
use catalog_application::command_bus::CommandBus;
use catalog_application::context::AppContext;
use catalog_application::error::AppError;
use catalog_application::grid::{
    GetLogGridDataHandler, GetLogGridDataQuery, GridData, GridDataFactory, LogDataFactory,
    SearchCriteria,
};
use catalog_application::product::{
    RemoveAllCustomizationFieldsFromProductCommand, RemoveAllCustomizationFieldsFromProductHandler,
    UpdateProductCommand, UpdateProductHandler,
};
use catalog_application::query_bus::QueryBus;
use catalog_application::translator::MessageCatalog;
use catalog_application::{InMemoryCommandBus, InMemoryProductStore, InMemoryQueryBus};
use catalog_domain::localization::localized_strings;
use catalog_domain::product::{
    CustomizationField, CustomizationFieldId, CustomizationFieldType, Product, ProductId,
};
use catalog_domain::shop::{ShopConstraint, ShopId};
use serde_json::json;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

struct SampleLogs;

#[async_trait]
impl GridDataFactory for SampleLogs {
    async fn get_data(&self, _criteria: &SearchCriteria) -> Result<GridData, AppError> {
        let records = [
            json!({
                "id_log": 1,
                "message": "Product updated",
                "in_all_shop": 1,
                "language": "en",
            }),
            json!({ "id_log": 2, "message": "Cache cleared", "id_shop": 1, "shop_name": "Main" }),
            json!({
                "id_log": 3,
                "message": "Export",
                "id_shop_group": 1,
                "shop_group_name": "Default",
            }),
        ]
        .into_iter()
        .filter_map(|v| v.as_object().cloned())
        .collect();
        Ok(GridData::new(records, 3, Arc::from("SELECT * FROM log")))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let store = Arc::new(InMemoryProductStore::new());
    store.insert(
        Product::new(ProductId::new(1)?).with_customization_fields(vec![
            CustomizationField::builder()
                .id(CustomizationFieldId::new(10)?)
                .kind(CustomizationFieldType::Text)
                .required(true)
                .localized_names(localized_strings([(1, "Engraving")])?)
                .build(),
            CustomizationField::builder()
                .id(CustomizationFieldId::new(11)?)
                .kind(CustomizationFieldType::File)
                .build(),
        ]),
    );

    let commands = InMemoryCommandBus::new();
    commands.register::<UpdateProductCommand, _>(Arc::new(UpdateProductHandler::new(
        store.clone(),
        store.clone(),
    )))?;
    commands.register::<RemoveAllCustomizationFieldsFromProductCommand, _>(Arc::new(
        RemoveAllCustomizationFieldsFromProductHandler::new(
            store.clone(),
            store.clone(),
            store.clone(),
        ),
    ))?;

    let queries = InMemoryQueryBus::new();
    queries.register::<GetLogGridDataQuery, _>(Arc::new(GetLogGridDataHandler::new(
        LogDataFactory::new(SampleLogs, MessageCatalog::new()),
    )))?;

    let ctx = AppContext::builder()
        .correlation_id("cor-1".to_string())
        .actor_id("employee-1".to_string())
        .build();

    let update = UpdateProductCommand::new(1, ShopConstraint::shop(ShopId::new(1)?))?
        .set_localized_names(localized_strings([(1, "Engraved mug")])?)
        .set_price("19.90")?
        .set_condition("new")?
        .set_redirect_option("301-category", 0)?;
    commands.dispatch(&ctx, update).await?;

    commands
        .dispatch(&ctx, RemoveAllCustomizationFieldsFromProductCommand::new(1)?)
        .await?;

    if let Some(product) = store.product(ProductId::new(1)?) {
        println!(
            "product 1: price={} fields={} customizability={}",
            product.price,
            product.customization_fields().len(),
            product.customizability().value(),
        );
    }

    let logs = queries
        .dispatch(&ctx, GetLogGridDataQuery::default())
        .await?;
    for record in logs.records().all() {
        println!("{}", serde_json::to_string(record)?);
    }
    Ok(())
}
