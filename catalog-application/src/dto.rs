use serde::Serialize;

/// 查询结果
///
/// 后台网格等界面直接序列化该结果，因此要求 `Serialize`。
pub trait Dto: Serialize + Send + Sync + 'static {}
