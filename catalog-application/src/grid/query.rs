use super::{GridData, GridDataFactory, SearchCriteria};
use crate::{context::AppContext, error::AppError, query::Query, query_handler::QueryHandler};
use async_trait::async_trait;

/// 查询日志网格数据
#[derive(Debug, Clone, Default)]
pub struct GetLogGridDataQuery {
    pub criteria: SearchCriteria,
}

impl GetLogGridDataQuery {
    pub fn new(criteria: SearchCriteria) -> Self {
        Self { criteria }
    }
}

impl Query for GetLogGridDataQuery {
    const NAME: &'static str = "grid.log.get_data";
    type Dto = GridData;
}

/// 将日志网格数据工厂（通常为 [`LogDataFactory`](super::LogDataFactory)）接入查询总线
pub struct GetLogGridDataHandler<F> {
    data_factory: F,
}

impl<F> GetLogGridDataHandler<F>
where
    F: GridDataFactory,
{
    pub fn new(data_factory: F) -> Self {
        Self { data_factory }
    }
}

#[async_trait]
impl<F> QueryHandler<GetLogGridDataQuery> for GetLogGridDataHandler<F>
where
    F: GridDataFactory,
{
    async fn handle(
        &self,
        _ctx: &AppContext,
        q: GetLogGridDataQuery,
    ) -> Result<GridData, AppError> {
        self.data_factory.get_data(&q.criteria).await
    }
}
