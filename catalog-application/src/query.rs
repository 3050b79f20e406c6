use crate::dto::Dto;

/// 后台只读查询
///
/// 例如 [`GetLogGridDataQuery`](crate::grid::GetLogGridDataQuery) 按检索条件读取日志网格，
/// 结果类型为 [`GridData`](crate::grid::GridData)。
pub trait Query: Send + Sync + 'static {
    /// 稳定名称，形如 `grid.log.get_data`
    const NAME: &'static str;

    type Dto: Dto;
}
