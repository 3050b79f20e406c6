use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
};
use async_trait::async_trait;
use catalog_domain::error::{DomainError, DomainResult};
use catalog_domain::localization::LocalizedStrings;
use catalog_domain::money::parse_decimal;
use catalog_domain::persist::{ProductProvider, ProductUpdater};
use catalog_domain::product::{
    Ean13, Isbn, ManufacturerReference, Product, ProductCondition, ProductId, ProductVisibility,
    RedirectOption, Reference, Upc,
};
use catalog_domain::shop::ShopConstraint;
use rust_decimal::Decimal;
use tracing::info;

/// 商品基础信息的部分更新
///
/// 所有可选字段初始为 `None`，表示“不修改”；只有显式设置的字段会被写回。
/// 仅覆盖可一次性持久化的商品通用属性，不涉及商品关联关系。
///
/// 设置器消费并返回自身以便链式调用；需要构造值对象的设置器返回
/// `DomainResult<Self>`，格式错误在设置时即被拒绝。命令本身不做跨字段校验。
///
/// ```rust
/// use catalog_application::product::UpdateProductCommand;
/// use catalog_domain::shop::ShopConstraint;
///
/// let cmd = UpdateProductCommand::new(42, ShopConstraint::all_shops())?
///     .set_price("19.99")?
///     .set_on_sale(true)
///     .set_condition("used")?;
/// assert_eq!(cmd.price().map(|p| p.to_string()), Some("19.99".to_string()));
/// assert!(cmd.ecotax().is_none());
/// # Ok::<(), catalog_domain::error::DomainError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateProductCommand {
    product_id: ProductId,
    shop_constraint: ShopConstraint,

    localized_names: Option<LocalizedStrings>,
    localized_descriptions: Option<LocalizedStrings>,
    localized_short_descriptions: Option<LocalizedStrings>,
    visibility: Option<ProductVisibility>,
    available_for_order: Option<bool>,
    online_only: Option<bool>,
    show_price: Option<bool>,
    condition: Option<ProductCondition>,
    show_condition: Option<bool>,
    manufacturer: Option<ManufacturerReference>,
    price: Option<Decimal>,
    ecotax: Option<Decimal>,
    tax_rules_group_id: Option<u32>,
    on_sale: Option<bool>,
    wholesale_price: Option<Decimal>,
    unit_price: Option<Decimal>,
    unity: Option<String>,
    localized_meta_titles: Option<LocalizedStrings>,
    localized_meta_descriptions: Option<LocalizedStrings>,
    localized_link_rewrites: Option<LocalizedStrings>,
    redirect_option: Option<RedirectOption>,
    isbn: Option<Isbn>,
    upc: Option<Upc>,
    ean13: Option<Ean13>,
    mpn: Option<String>,
    reference: Option<Reference>,
}

impl UpdateProductCommand {
    pub fn new(product_id: i64, shop_constraint: ShopConstraint) -> DomainResult<Self> {
        Ok(Self {
            product_id: ProductId::try_from(product_id)?,
            shop_constraint,
            localized_names: None,
            localized_descriptions: None,
            localized_short_descriptions: None,
            visibility: None,
            available_for_order: None,
            online_only: None,
            show_price: None,
            condition: None,
            show_condition: None,
            manufacturer: None,
            price: None,
            ecotax: None,
            tax_rules_group_id: None,
            on_sale: None,
            wholesale_price: None,
            unit_price: None,
            unity: None,
            localized_meta_titles: None,
            localized_meta_descriptions: None,
            localized_link_rewrites: None,
            redirect_option: None,
            isbn: None,
            upc: None,
            ean13: None,
            mpn: None,
            reference: None,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn shop_constraint(&self) -> &ShopConstraint {
        &self.shop_constraint
    }

    // --- 多语言文本 ---

    pub fn localized_names(&self) -> Option<&LocalizedStrings> {
        self.localized_names.as_ref()
    }

    pub fn set_localized_names(mut self, names: LocalizedStrings) -> Self {
        self.localized_names = Some(names);
        self
    }

    pub fn localized_descriptions(&self) -> Option<&LocalizedStrings> {
        self.localized_descriptions.as_ref()
    }

    pub fn set_localized_descriptions(mut self, descriptions: LocalizedStrings) -> Self {
        self.localized_descriptions = Some(descriptions);
        self
    }

    pub fn localized_short_descriptions(&self) -> Option<&LocalizedStrings> {
        self.localized_short_descriptions.as_ref()
    }

    pub fn set_localized_short_descriptions(mut self, descriptions: LocalizedStrings) -> Self {
        self.localized_short_descriptions = Some(descriptions);
        self
    }

    pub fn localized_meta_titles(&self) -> Option<&LocalizedStrings> {
        self.localized_meta_titles.as_ref()
    }

    pub fn set_localized_meta_titles(mut self, titles: LocalizedStrings) -> Self {
        self.localized_meta_titles = Some(titles);
        self
    }

    pub fn localized_meta_descriptions(&self) -> Option<&LocalizedStrings> {
        self.localized_meta_descriptions.as_ref()
    }

    pub fn set_localized_meta_descriptions(mut self, descriptions: LocalizedStrings) -> Self {
        self.localized_meta_descriptions = Some(descriptions);
        self
    }

    pub fn localized_link_rewrites(&self) -> Option<&LocalizedStrings> {
        self.localized_link_rewrites.as_ref()
    }

    pub fn set_localized_link_rewrites(mut self, link_rewrites: LocalizedStrings) -> Self {
        self.localized_link_rewrites = Some(link_rewrites);
        self
    }

    // --- 展示选项 ---

    pub fn visibility(&self) -> Option<ProductVisibility> {
        self.visibility
    }

    pub fn set_visibility(mut self, visibility: &str) -> DomainResult<Self> {
        self.visibility = Some(visibility.parse()?);
        Ok(self)
    }

    pub fn is_available_for_order(&self) -> Option<bool> {
        self.available_for_order
    }

    pub fn set_available_for_order(mut self, available_for_order: bool) -> Self {
        self.available_for_order = Some(available_for_order);
        self
    }

    pub fn is_online_only(&self) -> Option<bool> {
        self.online_only
    }

    pub fn set_online_only(mut self, online_only: bool) -> Self {
        self.online_only = Some(online_only);
        self
    }

    pub fn show_price(&self) -> Option<bool> {
        self.show_price
    }

    pub fn set_show_price(mut self, show_price: bool) -> Self {
        self.show_price = Some(show_price);
        self
    }

    pub fn condition(&self) -> Option<ProductCondition> {
        self.condition
    }

    pub fn set_condition(mut self, condition: &str) -> DomainResult<Self> {
        self.condition = Some(condition.parse()?);
        Ok(self)
    }

    pub fn show_condition(&self) -> Option<bool> {
        self.show_condition
    }

    pub fn set_show_condition(mut self, show_condition: bool) -> Self {
        self.show_condition = Some(show_condition);
        self
    }

    /// `0` 表示解除品牌关联
    pub fn manufacturer(&self) -> Option<ManufacturerReference> {
        self.manufacturer
    }

    pub fn set_manufacturer_id(mut self, manufacturer_id: i64) -> DomainResult<Self> {
        self.manufacturer = Some(ManufacturerReference::from_raw(manufacturer_id)?);
        Ok(self)
    }

    // --- 价格 ---

    pub fn price(&self) -> Option<Decimal> {
        self.price
    }

    pub fn set_price(mut self, price: &str) -> DomainResult<Self> {
        self.price = Some(parse_decimal(price)?);
        Ok(self)
    }

    pub fn ecotax(&self) -> Option<Decimal> {
        self.ecotax
    }

    pub fn set_ecotax(mut self, ecotax: &str) -> DomainResult<Self> {
        self.ecotax = Some(parse_decimal(ecotax)?);
        Ok(self)
    }

    pub fn tax_rules_group_id(&self) -> Option<u32> {
        self.tax_rules_group_id
    }

    pub fn set_tax_rules_group_id(mut self, tax_rules_group_id: u32) -> Self {
        self.tax_rules_group_id = Some(tax_rules_group_id);
        self
    }

    pub fn is_on_sale(&self) -> Option<bool> {
        self.on_sale
    }

    pub fn set_on_sale(mut self, on_sale: bool) -> Self {
        self.on_sale = Some(on_sale);
        self
    }

    pub fn wholesale_price(&self) -> Option<Decimal> {
        self.wholesale_price
    }

    pub fn set_wholesale_price(mut self, wholesale_price: &str) -> DomainResult<Self> {
        self.wholesale_price = Some(parse_decimal(wholesale_price)?);
        Ok(self)
    }

    pub fn unit_price(&self) -> Option<Decimal> {
        self.unit_price
    }

    pub fn set_unit_price(mut self, unit_price: &str) -> DomainResult<Self> {
        self.unit_price = Some(parse_decimal(unit_price)?);
        Ok(self)
    }

    pub fn unity(&self) -> Option<&str> {
        self.unity.as_deref()
    }

    pub fn set_unity(mut self, unity: impl Into<String>) -> Self {
        self.unity = Some(unity.into());
        self
    }

    // --- SEO ---

    pub fn redirect_option(&self) -> Option<RedirectOption> {
        self.redirect_option
    }

    pub fn set_redirect_option(
        mut self,
        redirect_type: &str,
        redirect_target: i64,
    ) -> DomainResult<Self> {
        self.redirect_option = Some(RedirectOption::new(redirect_type, redirect_target)?);
        Ok(self)
    }

    // --- 编码 ---

    pub fn isbn(&self) -> Option<&Isbn> {
        self.isbn.as_ref()
    }

    pub fn set_isbn(mut self, isbn: &str) -> DomainResult<Self> {
        self.isbn = Some(Isbn::new(isbn)?);
        Ok(self)
    }

    pub fn upc(&self) -> Option<&Upc> {
        self.upc.as_ref()
    }

    pub fn set_upc(mut self, upc: &str) -> DomainResult<Self> {
        self.upc = Some(Upc::new(upc)?);
        Ok(self)
    }

    pub fn ean13(&self) -> Option<&Ean13> {
        self.ean13.as_ref()
    }

    pub fn set_ean13(mut self, ean13: &str) -> DomainResult<Self> {
        self.ean13 = Some(Ean13::new(ean13)?);
        Ok(self)
    }

    pub fn mpn(&self) -> Option<&str> {
        self.mpn.as_deref()
    }

    pub fn set_mpn(mut self, mpn: impl Into<String>) -> Self {
        self.mpn = Some(mpn.into());
        self
    }

    pub fn reference(&self) -> Option<&Reference> {
        self.reference.as_ref()
    }

    pub fn set_reference(mut self, reference: &str) -> DomainResult<Self> {
        self.reference = Some(Reference::new(reference)?);
        Ok(self)
    }

    /// 是否设置了任一可选字段
    pub fn has_updates(&self) -> bool {
        let Self {
            product_id: _,
            shop_constraint: _,
            localized_names,
            localized_descriptions,
            localized_short_descriptions,
            visibility,
            available_for_order,
            online_only,
            show_price,
            condition,
            show_condition,
            manufacturer,
            price,
            ecotax,
            tax_rules_group_id,
            on_sale,
            wholesale_price,
            unit_price,
            unity,
            localized_meta_titles,
            localized_meta_descriptions,
            localized_link_rewrites,
            redirect_option,
            isbn,
            upc,
            ean13,
            mpn,
            reference,
        } = self;

        [
            localized_names.is_some(),
            localized_descriptions.is_some(),
            localized_short_descriptions.is_some(),
            visibility.is_some(),
            available_for_order.is_some(),
            online_only.is_some(),
            show_price.is_some(),
            condition.is_some(),
            show_condition.is_some(),
            manufacturer.is_some(),
            price.is_some(),
            ecotax.is_some(),
            tax_rules_group_id.is_some(),
            on_sale.is_some(),
            wholesale_price.is_some(),
            unit_price.is_some(),
            unity.is_some(),
            localized_meta_titles.is_some(),
            localized_meta_descriptions.is_some(),
            localized_link_rewrites.is_some(),
            redirect_option.is_some(),
            isbn.is_some(),
            upc.is_some(),
            ean13.is_some(),
            mpn.is_some(),
            reference.is_some(),
        ]
        .into_iter()
        .any(|set| set)
    }

    /// 将已设置的字段写入商品；多语言文本按语言合并，未提交的语言保持不变
    pub fn apply_to(&self, product: &mut Product) {
        fn merge(target: &mut LocalizedStrings, source: Option<&LocalizedStrings>) {
            if let Some(source) = source {
                target.extend(source.iter().map(|(lang, text)| (*lang, text.clone())));
            }
        }

        fn assign<T: Clone>(target: &mut T, source: Option<&T>) {
            if let Some(value) = source {
                *target = value.clone();
            }
        }

        merge(&mut product.names, self.localized_names.as_ref());
        merge(&mut product.descriptions, self.localized_descriptions.as_ref());
        merge(
            &mut product.short_descriptions,
            self.localized_short_descriptions.as_ref(),
        );
        merge(&mut product.meta_titles, self.localized_meta_titles.as_ref());
        merge(
            &mut product.meta_descriptions,
            self.localized_meta_descriptions.as_ref(),
        );
        merge(
            &mut product.link_rewrites,
            self.localized_link_rewrites.as_ref(),
        );

        assign(&mut product.visibility, self.visibility.as_ref());
        assign(
            &mut product.available_for_order,
            self.available_for_order.as_ref(),
        );
        assign(&mut product.online_only, self.online_only.as_ref());
        assign(&mut product.show_price, self.show_price.as_ref());
        assign(&mut product.condition, self.condition.as_ref());
        assign(&mut product.show_condition, self.show_condition.as_ref());
        assign(&mut product.manufacturer, self.manufacturer.as_ref());
        assign(&mut product.price, self.price.as_ref());
        assign(&mut product.ecotax, self.ecotax.as_ref());
        assign(
            &mut product.tax_rules_group_id,
            self.tax_rules_group_id.as_ref(),
        );
        assign(&mut product.on_sale, self.on_sale.as_ref());
        assign(&mut product.wholesale_price, self.wholesale_price.as_ref());
        assign(&mut product.unit_price, self.unit_price.as_ref());
        assign(&mut product.unity, self.unity.as_ref());
        assign(&mut product.redirect_option, self.redirect_option.as_ref());
        assign(&mut product.isbn, self.isbn.as_ref());
        assign(&mut product.upc, self.upc.as_ref());
        assign(&mut product.ean13, self.ean13.as_ref());
        assign(&mut product.mpn, self.mpn.as_ref());
        assign(&mut product.reference, self.reference.as_ref());
    }
}

impl Command for UpdateProductCommand {
    const NAME: &'static str = "product.update";
}

/// 处理 [`UpdateProductCommand`]：读取商品、应用变更并按店铺作用域写回
pub struct UpdateProductHandler<P, U> {
    product_provider: P,
    product_updater: U,
}

impl<P, U> UpdateProductHandler<P, U>
where
    P: ProductProvider,
    U: ProductUpdater,
{
    pub fn new(product_provider: P, product_updater: U) -> Self {
        Self {
            product_provider,
            product_updater,
        }
    }
}

#[async_trait]
impl<P, U> CommandHandler<UpdateProductCommand> for UpdateProductHandler<P, U>
where
    P: ProductProvider,
    U: ProductUpdater,
{
    #[tracing::instrument(
        name = "update_product",
        skip_all,
        fields(
            product_id = %cmd.product_id(),
            shop = %cmd.shop_constraint(),
            actor_id = ctx.actor_id()
        )
    )]
    async fn handle(&self, ctx: &AppContext, cmd: UpdateProductCommand) -> Result<(), AppError> {
        if !cmd.has_updates() {
            return Err(DomainError::InvalidCommand {
                reason: format!("no product field to update for product {}", cmd.product_id()),
            }
            .into());
        }

        let mut product = self.product_provider.get(cmd.product_id()).await?;
        cmd.apply_to(&mut product);
        self.product_updater
            .update(&product, cmd.shop_constraint())
            .await?;

        info!("product updated");
        Ok(())
    }
}
