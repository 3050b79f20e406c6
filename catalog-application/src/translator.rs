//! 文案翻译端口
//!
//! 后台文案以“消息键 + 翻译域”定位，如 `("All shops", "Admin.Global")`。
//! 翻译目录的加载属于框架职责，这里只提供端口与一个基于内存目录的实现。
//!
use std::collections::HashMap;
use std::sync::Arc;

/// 翻译能力
pub trait Translator: Send + Sync {
    /// 返回 `id` 在 `domain` 下的译文；缺失时由实现决定回退策略
    fn trans(&self, id: &str, domain: &str) -> String;
}

impl<T> Translator for Arc<T>
where
    T: Translator + ?Sized,
{
    fn trans(&self, id: &str, domain: &str) -> String {
        (**self).trans(id, domain)
    }
}

/// 内存翻译目录：未收录的消息键原样返回
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    messages: HashMap<(String, String), String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 收录一条译文
    pub fn with_message(
        mut self,
        domain: impl Into<String>,
        id: impl Into<String>,
        translation: impl Into<String>,
    ) -> Self {
        self.messages
            .insert((domain.into(), id.into()), translation.into());
        self
    }
}

impl Translator for MessageCatalog {
    fn trans(&self, id: &str, domain: &str) -> String {
        self.messages
            .get(&(domain.to_string(), id.to_string()))
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}
