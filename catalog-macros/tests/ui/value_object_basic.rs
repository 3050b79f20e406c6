use catalog_macros::value_object;

#[value_object]
struct Label {
    text: String,
}

#[value_object(debug = false)]
struct Secret(String);

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret(..)")
    }
}

#[value_object(copy = true)]
enum Level {
    Low,
    High,
}

#[value_object]
#[derive(Default)]
struct Amount(i64);

fn main() {
    let a = Label { text: "a".into() };
    let _ = format!("{:?}", a.clone());
    let _eq = a == Label { text: "a".into() };

    // 手写 Debug 可编译说明未自动派生
    let _ = format!("{:?}", Secret("s".into()));

    let lv = Level::High;
    let copied = lv;
    let mut set = std::collections::HashSet::new();
    set.insert(lv);
    let _ = copied == Level::Low;

    // 使用方自行派生的 Default 与宏合并
    let _ = Amount::default();
}
