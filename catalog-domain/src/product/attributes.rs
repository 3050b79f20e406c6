use crate::error::{DomainError, DomainResult};
use catalog_macros::value_object;
use std::fmt;
use std::str::FromStr;

/// 商品在前台的可见范围
#[value_object(copy = true)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductVisibility {
    /// 目录与搜索中均可见
    #[default]
    Both,
    /// 仅目录可见
    Catalog,
    /// 仅搜索可见
    Search,
    /// 均不可见（仍可通过直链访问）
    None,
}

impl ProductVisibility {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Catalog => "catalog",
            Self::Search => "search",
            Self::None => "none",
        }
    }
}

impl FromStr for ProductVisibility {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(Self::Both),
            "catalog" => Ok(Self::Catalog),
            "search" => Ok(Self::Search),
            "none" => Ok(Self::None),
            other => Err(DomainError::invalid_value(format!(
                "invalid product visibility {other:?}, expected one of both|catalog|search|none"
            ))),
        }
    }
}

impl fmt::Display for ProductVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 商品成色
#[value_object(copy = true)]
#[derive(Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductCondition {
    #[default]
    New,
    Used,
    Refurbished,
}

impl ProductCondition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Used => "used",
            Self::Refurbished => "refurbished",
        }
    }
}

impl FromStr for ProductCondition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(Self::New),
            "used" => Ok(Self::Used),
            "refurbished" => Ok(Self::Refurbished),
            other => Err(DomainError::invalid_value(format!(
                "invalid product condition {other:?}, expected one of new|used|refurbished"
            ))),
        }
    }
}

impl fmt::Display for ProductCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 商品下线后的跳转方式
#[value_object(copy = true)]
#[derive(Default)]
pub enum RedirectType {
    #[default]
    #[serde(rename = "404")]
    NotFound,
    #[serde(rename = "301-product")]
    PermanentProduct,
    #[serde(rename = "302-product")]
    TemporaryProduct,
    #[serde(rename = "301-category")]
    PermanentCategory,
    #[serde(rename = "302-category")]
    TemporaryCategory,
}

impl RedirectType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "404",
            Self::PermanentProduct => "301-product",
            Self::TemporaryProduct => "302-product",
            Self::PermanentCategory => "301-category",
            Self::TemporaryCategory => "302-category",
        }
    }

    pub const fn is_product_redirect(&self) -> bool {
        matches!(self, Self::PermanentProduct | Self::TemporaryProduct)
    }

    pub const fn is_category_redirect(&self) -> bool {
        matches!(self, Self::PermanentCategory | Self::TemporaryCategory)
    }
}

impl FromStr for RedirectType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "404" => Ok(Self::NotFound),
            "301-product" => Ok(Self::PermanentProduct),
            "302-product" => Ok(Self::TemporaryProduct),
            "301-category" => Ok(Self::PermanentCategory),
            "302-category" => Ok(Self::TemporaryCategory),
            other => Err(DomainError::invalid_value(format!(
                "invalid redirect type {other:?}"
            ))),
        }
    }
}

impl fmt::Display for RedirectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 跳转选项：跳转方式 + 目标（商品 ID 或分类 ID，`0` 表示无目标）
///
/// - `404`：目标必须为 `0`
/// - 商品跳转：目标必须为正数
/// - 分类跳转：目标可为 `0`（使用商品默认分类）
#[value_object(copy = true)]
#[derive(Default)]
#[serde(try_from = "RawRedirectOption")]
pub struct RedirectOption {
    redirect_type: RedirectType,
    target: u32,
}

// 反序列化的原始形态，经 `RedirectOption::new` 校验
#[derive(serde::Deserialize)]
struct RawRedirectOption {
    redirect_type: String,
    target: i64,
}

impl TryFrom<RawRedirectOption> for RedirectOption {
    type Error = DomainError;

    fn try_from(raw: RawRedirectOption) -> Result<Self, Self::Error> {
        Self::new(&raw.redirect_type, raw.target)
    }
}

impl RedirectOption {
    pub const NO_TARGET: u32 = 0;

    pub fn new(redirect_type: &str, target: i64) -> DomainResult<Self> {
        let redirect_type: RedirectType = redirect_type.parse()?;
        let target = u32::try_from(target).map_err(|_| {
            DomainError::invalid_value(format!("invalid redirect target {target}"))
        })?;

        if redirect_type == RedirectType::NotFound && target != Self::NO_TARGET {
            return Err(DomainError::invalid_value(format!(
                "redirect type 404 takes no target, got {target}"
            )));
        }
        if redirect_type.is_product_redirect() && target == Self::NO_TARGET {
            return Err(DomainError::invalid_value(format!(
                "redirect type {redirect_type} requires a target product"
            )));
        }

        Ok(Self {
            redirect_type,
            target,
        })
    }

    pub fn redirect_type(&self) -> RedirectType {
        self.redirect_type
    }

    /// 跳转目标，无目标时为 `None`
    pub fn target(&self) -> Option<u32> {
        (self.target != Self::NO_TARGET).then_some(self.target)
    }
}
