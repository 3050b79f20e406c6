use crate::{
    command::Command, command_bus::CommandBus, command_handler::CommandHandler,
    context::AppContext, error::AppError,
};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::any::{Any, TypeId};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::debug;

type CmdHandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<(), AppError>> + Send + 'a>>;

type CmdHandlerFn =
    Arc<dyn for<'a> Fn(Box<dyn Any + Send>, &'a AppContext) -> CmdHandlerFuture<'a> + Send + Sync>;

// 通过泛型约束让编译器推导出闭包的高阶生命周期签名
fn erase<F>(f: F) -> CmdHandlerFn
where
    F: for<'a> Fn(Box<dyn Any + Send>, &'a AppContext) -> CmdHandlerFuture<'a>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// 基于内存的 CommandBus 实现
/// - 通过 TypeId 注册不同 Command 对应的 Handler，每种命令仅允许一个处理器
/// - 运行时以类型擦除（Any）方式进行调度
pub struct InMemoryCommandBus {
    handlers: DashMap<TypeId, (&'static str, CmdHandlerFn)>,
}

impl Default for InMemoryCommandBus {
    fn default() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }
}

impl InMemoryCommandBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册命令处理器；同一命令重复注册返回 `AlreadyRegisteredCommand`
    pub fn register<C, H>(&self, handler: Arc<H>) -> Result<(), AppError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let f = erase(move |boxed_cmd, ctx| {
            let handler = handler.clone();

            Box::pin(async move {
                // 键与闭包同一泛型 C，正常情况下 downcast 不会失败
                match boxed_cmd.downcast::<C>() {
                    Ok(cmd) => handler.handle(ctx, *cmd).await,
                    Err(_) => Err(AppError::TypeMismatch {
                        expected: C::NAME,
                        found: "unknown",
                    }),
                }
            })
        });

        match self.handlers.entry(TypeId::of::<C>()) {
            Entry::Occupied(_) => Err(AppError::AlreadyRegisteredCommand { command: C::NAME }),
            Entry::Vacant(slot) => {
                slot.insert((C::NAME, f));
                debug!(command = C::NAME, "command handler registered");
                Ok(())
            }
        }
    }

    /// 已注册的命令名列表
    pub fn registered_commands(&self) -> Vec<&'static str> {
        self.handlers.iter().map(|e| e.value().0).collect()
    }
}

#[async_trait]
impl CommandBus for InMemoryCommandBus {
    async fn dispatch<C>(&self, ctx: &AppContext, cmd: C) -> Result<(), AppError>
    where
        C: Command,
    {
        let Some(f) = self
            .handlers
            .get(&TypeId::of::<C>())
            .map(|h| Arc::clone(&h.value().1))
        else {
            return Err(AppError::HandlerNotFound(C::NAME));
        };

        debug!(
            command = C::NAME,
            correlation_id = ctx.correlation_id(),
            actor_id = ctx.actor_id(),
            "dispatching command"
        );
        (f)(Box::new(cmd), ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Touch;

    impl Command for Touch {
        const NAME: &'static str = "test.touch";
    }

    struct Untouched;

    impl Command for Untouched {
        const NAME: &'static str = "test.untouched";
    }

    struct TouchHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CommandHandler<Touch> for TouchHandler {
        async fn handle(&self, _ctx: &AppContext, _cmd: Touch) -> Result<(), AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl CommandHandler<Untouched> for FailingHandler {
        async fn handle(&self, _ctx: &AppContext, _cmd: Untouched) -> Result<(), AppError> {
            Err(AppError::Validation("nope".into()))
        }
    }

    #[tokio::test]
    async fn register_and_dispatch_works() {
        let bus = InMemoryCommandBus::new();
        let calls = Arc::new(AtomicUsize::new(0));
        bus.register::<Touch, _>(Arc::new(TouchHandler {
            calls: calls.clone(),
        }))
        .unwrap();

        let ctx = AppContext::default();
        bus.dispatch(&ctx, Touch).await.unwrap();
        bus.dispatch(&ctx, Touch).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(bus.registered_commands(), vec!["test.touch"]);
    }

    #[tokio::test]
    async fn handler_not_found_when_unregistered() {
        let bus = InMemoryCommandBus::new();
        let err = bus
            .dispatch(&AppContext::default(), Untouched)
            .await
            .unwrap_err();
        match err {
            AppError::HandlerNotFound(name) => assert_eq!(name, "test.untouched"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let bus = InMemoryCommandBus::new();
        let calls = Arc::new(AtomicUsize::new(0));
        bus.register::<Touch, _>(Arc::new(TouchHandler {
            calls: calls.clone(),
        }))
        .unwrap();
        let err = bus
            .register::<Touch, _>(Arc::new(TouchHandler { calls }))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::AlreadyRegisteredCommand {
                command: "test.touch"
            }
        ));
    }

    #[tokio::test]
    async fn handler_errors_propagate_unchanged() {
        let bus = InMemoryCommandBus::new();
        bus.register::<Untouched, _>(Arc::new(FailingHandler))
            .unwrap();
        let err = bus
            .dispatch(&AppContext::default(), Untouched)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "nope"));
    }

    struct WhoAmI;

    impl Command for WhoAmI {
        const NAME: &'static str = "test.who_am_i";
    }

    struct ActorRecorder {
        seen: std::sync::Mutex<Vec<Option<String>>>,
    }

    #[async_trait]
    impl CommandHandler<WhoAmI> for ActorRecorder {
        async fn handle(&self, ctx: &AppContext, _cmd: WhoAmI) -> Result<(), AppError> {
            self.seen
                .lock()
                .unwrap()
                .push(ctx.actor_id().map(str::to_string));
            Ok(())
        }
    }

    #[tokio::test]
    async fn context_reaches_the_handler() {
        let bus = InMemoryCommandBus::new();
        let recorder = Arc::new(ActorRecorder {
            seen: std::sync::Mutex::new(Vec::new()),
        });
        bus.register::<WhoAmI, _>(recorder.clone()).unwrap();

        let ctx = AppContext::builder()
            .correlation_id("cor-9".to_string())
            .actor_id("employee-7".to_string())
            .build();
        bus.dispatch(&ctx, WhoAmI).await.unwrap();
        bus.dispatch(&AppContext::default(), WhoAmI).await.unwrap();

        assert_eq!(
            *recorder.seen.lock().unwrap(),
            vec![Some("employee-7".to_string()), None]
        );
    }
}
