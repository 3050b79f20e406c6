use bon::Builder;
use catalog_domain::localization::LanguageId;

/// 应用层上下文（Application Context）
///
/// 承载一次应用层调用（命令/查询）所需的横切信息：
/// - 关联追踪 `correlation_id`；
/// - 操作者（后台员工）`actor_id`；
/// - 当前后台界面语言 `language_id`。
///
/// 典型用法：
/// ```rust
/// use catalog_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123".to_string())
///     .actor_id("employee-1".to_string())
///     .build();
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// assert!(ctx.language_id().is_none());
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct AppContext {
    correlation_id: Option<String>,
    actor_id: Option<String>,
    language_id: Option<LanguageId>,
}

impl AppContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }

    pub fn language_id(&self) -> Option<LanguageId> {
        self.language_id
    }
}
