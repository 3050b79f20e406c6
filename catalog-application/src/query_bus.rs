use crate::{context::AppContext, error::AppError, query::Query};
use async_trait::async_trait;

/// 查询总线
///
/// 返回值的类型由查询决定（`Q::Dto`），调用方无需再做类型转换。
#[async_trait]
pub trait QueryBus: Send + Sync {
    async fn dispatch<Q>(&self, ctx: &AppContext, query: Q) -> Result<Q::Dto, AppError>
    where
        Q: Query;
}
