use super::{
    Customizability, CustomizationField, CustomizationFieldId, CustomizationFieldType, Ean13,
    Isbn, ManufacturerReference, ProductCondition, ProductId, ProductVisibility, RedirectOption,
    Reference, Upc,
};
use crate::entity::Entity;
use crate::localization::LocalizedStrings;
use rust_decimal::Decimal;

/// 商品实体
///
/// 普通属性直接公开，由更新命令按需覆盖；定制字段与由其推导的
/// 定制能力/计数保持私有，只能通过 [`Product::refresh_customizability`] 同步。
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    customization_fields: Vec<CustomizationField>,
    customizability: Customizability,
    text_fields_count: u32,
    file_fields_count: u32,

    pub names: LocalizedStrings,
    pub descriptions: LocalizedStrings,
    pub short_descriptions: LocalizedStrings,
    pub meta_titles: LocalizedStrings,
    pub meta_descriptions: LocalizedStrings,
    pub link_rewrites: LocalizedStrings,

    pub visibility: ProductVisibility,
    pub available_for_order: bool,
    pub online_only: bool,
    pub show_price: bool,
    pub condition: ProductCondition,
    pub show_condition: bool,
    pub manufacturer: ManufacturerReference,

    pub price: Decimal,
    pub ecotax: Decimal,
    pub tax_rules_group_id: u32,
    pub on_sale: bool,
    pub wholesale_price: Decimal,
    pub unit_price: Decimal,
    pub unity: String,

    pub redirect_option: RedirectOption,
    pub isbn: Isbn,
    pub upc: Upc,
    pub ean13: Ean13,
    pub mpn: String,
    pub reference: Reference,
}

impl Product {
    /// 以后台新建商品的默认值创建
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            customization_fields: Vec::new(),
            customizability: Customizability::NotCustomizable,
            text_fields_count: 0,
            file_fields_count: 0,
            names: LocalizedStrings::new(),
            descriptions: LocalizedStrings::new(),
            short_descriptions: LocalizedStrings::new(),
            meta_titles: LocalizedStrings::new(),
            meta_descriptions: LocalizedStrings::new(),
            link_rewrites: LocalizedStrings::new(),
            visibility: ProductVisibility::Both,
            available_for_order: true,
            online_only: false,
            show_price: true,
            condition: ProductCondition::New,
            show_condition: false,
            manufacturer: ManufacturerReference::NoManufacturer,
            price: Decimal::ZERO,
            ecotax: Decimal::ZERO,
            tax_rules_group_id: 0,
            on_sale: false,
            wholesale_price: Decimal::ZERO,
            unit_price: Decimal::ZERO,
            unity: String::new(),
            redirect_option: RedirectOption::default(),
            isbn: Isbn::default(),
            upc: Upc::default(),
            ean13: Ean13::default(),
            mpn: String::new(),
            reference: Reference::default(),
        }
    }

    /// 附带定制字段（同步刷新定制能力）
    pub fn with_customization_fields(mut self, fields: Vec<CustomizationField>) -> Self {
        self.customization_fields = fields;
        self.refresh_customizability();
        self
    }

    pub fn customization_fields(&self) -> &[CustomizationField] {
        &self.customization_fields
    }

    pub fn customization_field_ids(&self) -> Vec<CustomizationFieldId> {
        self.customization_fields
            .iter()
            .map(CustomizationField::id)
            .collect()
    }

    /// 移除给定 ID 的定制字段，返回实际移除数量；不刷新定制能力
    pub fn remove_customization_fields(&mut self, ids: &[CustomizationFieldId]) -> usize {
        let before = self.customization_fields.len();
        self.customization_fields.retain(|f| !ids.contains(&f.id()));
        before - self.customization_fields.len()
    }

    /// 依据现存定制字段重新计算定制能力与文本/文件字段计数
    pub fn refresh_customizability(&mut self) {
        let count = |kind: CustomizationFieldType| {
            let n = self
                .customization_fields
                .iter()
                .filter(|f| f.kind() == kind)
                .count();
            u32::try_from(n).unwrap_or(u32::MAX)
        };
        self.text_fields_count = count(CustomizationFieldType::Text);
        self.file_fields_count = count(CustomizationFieldType::File);
        self.customizability = Customizability::from_fields(&self.customization_fields);
    }

    pub fn customizability(&self) -> Customizability {
        self.customizability
    }

    pub fn text_fields_count(&self) -> u32 {
        self.text_fields_count
    }

    pub fn file_fields_count(&self) -> u32 {
        self.file_fields_count
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
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
    fn new_product_defaults() {
        let p = Product::new(ProductId::new(1).unwrap());
        assert_eq!(p.id().value(), 1);
        assert!(p.customization_fields().is_empty());
        assert_eq!(p.customizability(), Customizability::NotCustomizable);
        assert_eq!(p.visibility, ProductVisibility::Both);
        assert!(p.available_for_order);
        assert!(p.show_price);
        assert_eq!(p.price, Decimal::ZERO);
        assert_eq!(p.manufacturer, ManufacturerReference::NoManufacturer);
    }

    #[test]
    fn customization_fields_drive_counts() {
        let p = Product::new(ProductId::new(1).unwrap()).with_customization_fields(vec![
            field(1, CustomizationFieldType::Text, false),
            field(2, CustomizationFieldType::Text, true),
            field(3, CustomizationFieldType::File, false),
        ]);
        assert_eq!(p.text_fields_count(), 2);
        assert_eq!(p.file_fields_count(), 1);
        assert_eq!(p.customizability(), Customizability::RequiresCustomization);
        assert_eq!(
            p.customization_field_ids()
                .iter()
                .map(|id| id.value())
                .collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn remove_then_refresh() {
        let mut p = Product::new(ProductId::new(1).unwrap()).with_customization_fields(vec![
            field(1, CustomizationFieldType::Text, true),
            field(2, CustomizationFieldType::File, false),
        ]);
        let removed = p.remove_customization_fields(&[CustomizationFieldId::new(1).unwrap()]);
        assert_eq!(removed, 1);
        // 移除不会自动刷新
        assert_eq!(p.customizability(), Customizability::RequiresCustomization);

        p.refresh_customizability();
        assert_eq!(p.customizability(), Customizability::AllowsCustomization);
        assert_eq!(p.text_fields_count(), 0);
        assert_eq!(p.file_fields_count(), 1);
    }
}
