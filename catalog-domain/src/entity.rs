//! 实体（Entity）基础抽象
//!
//! 以标识区分的领域对象，区别于以值相等为准的值对象。
//!
use std::fmt::Display;

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体标识类型
    type Id: Copy + Display;

    /// 获取实体标识
    fn id(&self) -> Self::Id;
}
