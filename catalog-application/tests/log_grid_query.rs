use anyhow::Result as AnyResult;
use async_trait::async_trait;
use catalog_application::InMemoryQueryBus;
use catalog_application::config::LogGridConfig;
use catalog_application::context::AppContext;
use catalog_application::error::AppError;
use catalog_application::grid::{
    GetLogGridDataHandler, GetLogGridDataQuery, GridData, GridDataFactory, LogDataFactory,
    OrderWay, RecordCollection, SearchCriteria,
};
use catalog_application::query_bus::QueryBus;
use catalog_application::translator::MessageCatalog;
use serde_json::{Value, json};
use std::sync::Arc;

/// 模拟日志表：按检索条件分页返回
struct LogTable {
    rows: Vec<Value>,
}

#[async_trait]
impl GridDataFactory for LogTable {
    async fn get_data(&self, criteria: &SearchCriteria) -> Result<GridData, AppError> {
        let offset = criteria.offset.unwrap_or(0) as usize;
        let limit = criteria.limit.map_or(self.rows.len(), |l| l as usize);
        let records: RecordCollection = self
            .rows
            .iter()
            .skip(offset)
            .take(limit)
            .filter_map(|row| row.as_object().cloned())
            .collect();
        Ok(GridData::new(
            records,
            self.rows.len() as u64,
            Arc::from("SELECT l.* FROM log l"),
        ))
    }
}

fn log_table() -> LogTable {
    LogTable {
        rows: vec![
            json!({ "id_log": 1, "in_all_shop": 1, "language": "en" }),
            json!({ "id_log": 2, "id_shop": 1, "shop_name": "Main", "language": null }),
            json!({ "id_log": 3, "id_shop_group": 2, "shop_group_name": "EU" }),
            json!({ "id_log": 4, "id_shop": "0", "id_shop_group": "0" }),
        ],
    }
}

fn bus(config: &LogGridConfig) -> InMemoryQueryBus {
    let translator = MessageCatalog::new().with_message("Admin.Global", "Shop group", "Group");
    let factory = LogDataFactory::with_config(log_table(), translator, config);

    let bus = InMemoryQueryBus::new();
    bus.register::<GetLogGridDataQuery, _>(Arc::new(GetLogGridDataHandler::new(factory)))
        .unwrap();
    bus
}

#[tokio::test]
async fn log_grid_is_decorated_through_the_query_bus() -> AnyResult<()> {
    let bus = bus(&LogGridConfig::default());

    let data = bus
        .dispatch(&AppContext::default(), GetLogGridDataQuery::default())
        .await?;

    assert_eq!(data.records_total(), 4);
    assert_eq!(&**data.query(), "SELECT l.* FROM log l");

    let labels: Vec<&Value> = data.records().all().iter().map(|r| &r["shop_name"]).collect();
    assert_eq!(
        labels,
        vec![
            &json!("All shops"),
            &json!("Shop Main (id : 1)"),
            &json!("Group EU(id : 2)"),
            &json!("---"),
        ]
    );

    let languages: Vec<&Value> = data.records().all().iter().map(|r| &r["language"]).collect();
    assert_eq!(
        languages,
        vec![&json!("en"), &json!("---"), &json!("---"), &json!("---")]
    );
    Ok(())
}

#[tokio::test]
async fn paging_does_not_change_the_total() -> AnyResult<()> {
    let config = LogGridConfig::from_json_str(r#"{ "empty_placeholder": "none" }"#)?;
    let bus = bus(&config);

    let criteria = SearchCriteria::builder()
        .order_by("id_log".to_string())
        .order_way(OrderWay::Desc)
        .offset(3)
        .limit(10)
        .build();
    let data = bus
        .dispatch(&AppContext::default(), GetLogGridDataQuery::new(criteria))
        .await?;

    assert_eq!(data.records().len(), 1);
    assert_eq!(data.records_total(), 4);
    assert_eq!(data.records().all()[0]["shop_name"], "none");
    Ok(())
}
