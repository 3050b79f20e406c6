//! 多语言文本
//!
use catalog_macros::entity_id;
use std::collections::BTreeMap;

#[entity_id]
pub struct LanguageId(u32);

/// 按语言 ID 索引的文本（如商品名称、描述）
pub type LocalizedStrings = BTreeMap<LanguageId, String>;

/// 从 `(语言 ID, 文本)` 原始对构造多语言文本，任一语言 ID 非法即失败
pub fn localized_strings<I, S>(pairs: I) -> crate::error::DomainResult<LocalizedStrings>
where
    I: IntoIterator<Item = (i64, S)>,
    S: Into<String>,
{
    pairs
        .into_iter()
        .map(|(lang, text)| Ok((LanguageId::try_from(lang)?, text.into())))
        .collect()
}
