use catalog_macros::entity_id;
use std::str::FromStr;

#[entity_id]
struct ProductId(u32);

#[entity_id]
#[derive(Default)]
struct ShopId(u16);

fn main() {
    let id = ProductId::new(7).unwrap();
    let _: u32 = id.value();
    let _: u32 = id.into();
    let _ = format!("{id} {id:?}");

    let mut ids = std::collections::BTreeSet::new();
    ids.insert(id);

    let _ = ProductId::try_from(-1_i64).is_err();
    let _ = ProductId::from_str(" 3 ").is_ok();
    let _ = ShopId::default();
}
