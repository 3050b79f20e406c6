use catalog_domain::error::DomainError;
use catalog_macros::{entity_id, value_object};
use std::str::FromStr;

#[entity_id]
struct OrderId(u32);

#[value_object(copy = true)]
enum Size {
    Small,
    Large,
}

#[value_object]
struct Dimensions {
    width: u32,
    height: u32,
}

#[test]
fn entity_id_rejects_non_positive_values() {
    assert!(OrderId::new(0).is_err());
    assert_eq!(OrderId::new(12).unwrap().value(), 12);

    let err = OrderId::try_from(-4_i64).unwrap_err();
    assert!(matches!(err, DomainError::InvalidValue { .. }));
    assert!(OrderId::try_from(i64::MAX).is_err());
}

#[test]
fn entity_id_parses_and_displays() {
    let id = OrderId::from_str(" 42 ").unwrap();
    assert_eq!(id.to_string(), "42");
    assert!(matches!(
        OrderId::from_str("abc"),
        Err(DomainError::Parse { .. })
    ));
    assert!(OrderId::from_str("0").is_err());
}

#[test]
fn entity_id_serde_goes_through_validation() {
    let id = OrderId::new(5).unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), "5");
    assert_eq!(serde_json::from_str::<OrderId>("5").unwrap(), id);
    assert!(serde_json::from_str::<OrderId>("0").is_err());
    assert!(serde_json::from_str::<OrderId>("-3").is_err());
}

#[test]
fn value_object_derives_are_usable() {
    let d = Dimensions {
        width: 2,
        height: 3,
    };
    let json = serde_json::to_string(&d).unwrap();
    assert_eq!(json, r#"{"width":2,"height":3}"#);
    assert_eq!(serde_json::from_str::<Dimensions>(&json).unwrap(), d);

    let size = Size::Small;
    let copy = size;
    assert_eq!(size, copy);
    assert_ne!(size, Size::Large);
}
