//! 后台网格数据（grid）
//!
//! 网格是后台中可分页、可筛选的表格视图。数据工厂按检索条件返回
//! 记录集合、记录总数以及生成这些记录的查询描述；装饰器可包装任意工厂，
//! 对返回的记录做展示层的加工。
//!
mod log_data_factory;
mod query;

pub use log_data_factory::LogDataFactory;
pub use query::{GetLogGridDataHandler, GetLogGridDataQuery};

use crate::dto::Dto;
use crate::error::AppError;
use async_trait::async_trait;
use bon::Builder;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;

/// 一行松散类型的记录：字段名 -> 值
pub type Record = Map<String, Value>;

/// 记录集合
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RecordCollection(Vec<Record>);

impl RecordCollection {
    pub fn new(records: Vec<Record>) -> Self {
        Self(records)
    }

    pub fn all(&self) -> &[Record] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Record> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Record> for RecordCollection {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// 网格数据：记录、记录总数（不受分页影响）与查询描述
#[derive(Debug, Clone, Serialize)]
pub struct GridData {
    records: RecordCollection,
    records_total: u64,
    query: Arc<str>,
}

impl GridData {
    pub fn new(records: RecordCollection, records_total: u64, query: Arc<str>) -> Self {
        Self {
            records,
            records_total,
            query,
        }
    }

    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    pub fn records_total(&self) -> u64 {
        self.records_total
    }

    pub fn query(&self) -> &Arc<str> {
        &self.query
    }

    pub fn into_parts(self) -> (RecordCollection, u64, Arc<str>) {
        (self.records, self.records_total, self.query)
    }
}

impl Dto for GridData {}

/// 排序方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderWay {
    #[default]
    Asc,
    Desc,
}

/// 网格检索条件
#[derive(Builder, Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchCriteria {
    #[builder(default)]
    pub filters: BTreeMap<String, Value>,
    pub order_by: Option<String>,
    #[builder(default)]
    pub order_way: OrderWay,
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// 网格数据工厂
#[async_trait]
pub trait GridDataFactory: Send + Sync {
    async fn get_data(&self, criteria: &SearchCriteria) -> Result<GridData, AppError>;
}

#[async_trait]
impl<T> GridDataFactory for Arc<T>
where
    T: GridDataFactory + ?Sized,
{
    async fn get_data(&self, criteria: &SearchCriteria) -> Result<GridData, AppError> {
        (**self).get_data(criteria).await
    }
}
