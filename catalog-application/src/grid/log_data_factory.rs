use super::{GridData, GridDataFactory, Record, RecordCollection, SearchCriteria};
use crate::config::LogGridConfig;
use crate::error::AppError;
use crate::translator::Translator;
use async_trait::async_trait;
use serde_json::Value;
use tracing::trace;

/// 日志网格装饰器
///
/// 包装为日志配置的数据工厂，为每条日志记录：
/// - 以 `in_all_shop`/`id_shop`/`id_shop_group` 推导 `shop_name` 展示文本；
/// - 为缺失的 `language` 填充占位符。
///
/// 记录总数与查询描述原样透传。
pub struct LogDataFactory<F, T> {
    data_factory: F,
    translator: T,
    translation_domain: String,
    default_empty_data: String,
}

impl<F, T> LogDataFactory<F, T>
where
    F: GridDataFactory,
    T: Translator,
{
    pub fn new(data_factory: F, translator: T) -> Self {
        Self::with_config(data_factory, translator, &LogGridConfig::default())
    }

    pub fn with_config(data_factory: F, translator: T, config: &LogGridConfig) -> Self {
        let default_empty_data =
            translator.trans(&config.empty_placeholder, &config.translation_domain);
        Self {
            data_factory,
            translator,
            translation_domain: config.translation_domain.clone(),
            default_empty_data,
        }
    }

    fn trans(&self, id: &str) -> String {
        self.translator.trans(id, &self.translation_domain)
    }

    fn modify_record(&self, record: &mut Record) {
        let shop_name = self.shop_context_label(record);
        record.insert("shop_name".to_string(), Value::String(shop_name));

        if record.get("language").is_none_or(Value::is_null) {
            record.insert(
                "language".to_string(),
                Value::String(self.default_empty_data.clone()),
            );
        }
    }

    /// 店铺作用域展示文本，优先级：全部店铺 > 单店铺 > 店铺组 > 占位符
    fn shop_context_label(&self, record: &Record) -> String {
        let in_all_shop = is_truthy(record.get("in_all_shop"));
        let has_shop = is_truthy(record.get("id_shop"));
        let has_group = is_truthy(record.get("id_shop_group"));

        if in_all_shop {
            self.trans("All shops")
        } else if has_shop && !has_group {
            format!(
                "{} {} (id : {})",
                self.trans("Shop"),
                display(record.get("shop_name")),
                display(record.get("id_shop")),
            )
        } else if !has_shop && has_group {
            format!(
                "{} {}(id : {})",
                self.trans("Shop group"),
                display(record.get("shop_group_name")),
                display(record.get("id_shop_group")),
            )
        } else {
            self.default_empty_data.clone()
        }
    }
}

#[async_trait]
impl<F, T> GridDataFactory for LogDataFactory<F, T>
where
    F: GridDataFactory,
    T: Translator,
{
    async fn get_data(&self, criteria: &SearchCriteria) -> Result<GridData, AppError> {
        let (records, records_total, query) = self
            .data_factory
            .get_data(criteria)
            .await?
            .into_parts();

        let records: RecordCollection = records
            .into_inner()
            .into_iter()
            .map(|mut record| {
                self.modify_record(&mut record);
                record
            })
            .collect();

        trace!(count = records.len(), records_total, "log records decorated");
        Ok(GridData::new(records, records_total, query))
    }
}

// 松散值的真值判定：缺失、null、false、0、""、"0" 与空数组/对象为假
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty() && s != "0",
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

fn display(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        // 与字符串拼接一致：true 为 "1"，false 为空
        Some(Value::Bool(true)) => "1".to_string(),
        Some(Value::Bool(false)) => String::new(),
        Some(other) => other.to_string(),
    }
}
