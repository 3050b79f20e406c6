//! 商品定制字段
//!
//! 定制字段允许顾客在下单时为商品附加个性化内容（如刻字文本、上传图片）。
//! 商品的定制能力（`Customizability`）由其现存字段推导而来。
//!
use crate::localization::LocalizedStrings;
use bon::Builder;
use catalog_macros::{entity_id, value_object};

#[entity_id]
pub struct CustomizationFieldId(u32);

/// 定制字段类型
#[value_object(copy = true)]
#[serde(rename_all = "lowercase")]
pub enum CustomizationFieldType {
    /// 文件上传
    File,
    /// 文本输入
    Text,
}

/// 定制字段
#[derive(Builder, Debug, Clone, PartialEq, Eq)]
pub struct CustomizationField {
    id: CustomizationFieldId,
    kind: CustomizationFieldType,
    #[builder(default)]
    required: bool,
    #[builder(default)]
    localized_names: LocalizedStrings,
}

impl CustomizationField {
    pub fn id(&self) -> CustomizationFieldId {
        self.id
    }

    pub fn kind(&self) -> CustomizationFieldType {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn localized_names(&self) -> &LocalizedStrings {
        &self.localized_names
    }
}

/// 商品定制能力
#[value_object(copy = true)]
#[derive(Default)]
pub enum Customizability {
    /// 无定制字段
    #[default]
    NotCustomizable,
    /// 存在定制字段，但均为可选
    AllowsCustomization,
    /// 至少一个必填定制字段
    RequiresCustomization,
}

impl Customizability {
    /// 由现存定制字段推导定制能力
    pub fn from_fields(fields: &[CustomizationField]) -> Self {
        if fields.is_empty() {
            Self::NotCustomizable
        } else if fields.iter().any(CustomizationField::is_required) {
            Self::RequiresCustomization
        } else {
            Self::AllowsCustomization
        }
    }

    /// 持久化使用的整型编码
    pub const fn value(&self) -> u8 {
        match self {
            Self::NotCustomizable => 0,
            Self::AllowsCustomization => 1,
            Self::RequiresCustomization => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(id: u32, kind: CustomizationFieldType, required: bool) -> CustomizationField {
        CustomizationField::builder()
            .id(CustomizationFieldId::new(id).unwrap())
            .kind(kind)
            .required(required)
            .build()
    }

    #[test]
    fn no_fields_means_not_customizable() {
        assert_eq!(
            Customizability::from_fields(&[]),
            Customizability::NotCustomizable
        );
        assert_eq!(Customizability::default().value(), 0);
    }

    #[test]
    fn optional_fields_allow_customization() {
        let fields = [
            field(1, CustomizationFieldType::Text, false),
            field(2, CustomizationFieldType::File, false),
        ];
        assert_eq!(
            Customizability::from_fields(&fields),
            Customizability::AllowsCustomization
        );
    }

    #[test]
    fn any_required_field_requires_customization() {
        let fields = [
            field(1, CustomizationFieldType::Text, false),
            field(2, CustomizationFieldType::File, true),
        ];
        let c = Customizability::from_fields(&fields);
        assert_eq!(c, Customizability::RequiresCustomization);
        assert_eq!(c.value(), 2);
    }

    #[test]
    fn builder_defaults() {
        let f = CustomizationField::builder()
            .id(CustomizationFieldId::new(9).unwrap())
            .kind(CustomizationFieldType::Text)
            .build();
        assert!(!f.is_required());
        assert!(f.localized_names().is_empty());
    }
}
