use crate::{command::Command, context::AppContext, error::AppError};
use async_trait::async_trait;

/// 命令总线
///
/// 按命令类型找到注册的处理器并执行；未注册时返回 `AppError::HandlerNotFound`。
/// 进程内实现见 [`InMemoryCommandBus`](crate::InMemoryCommandBus)。
#[async_trait]
pub trait CommandBus: Send + Sync {
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>
    where
        C: Command;
}
