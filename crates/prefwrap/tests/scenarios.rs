use std::sync::Arc;

use prefwrap::{MemoryStore, RawRepresentable, Store, StoredValue, TypedPreference};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, RawRepresentable)]
enum Theme {
    Light = 0,
    Dark = 1,
}

fn memory() -> Arc<MemoryStore> {
    Arc::new(MemoryStore::new())
}

#[test]
fn test_retry_count() {
    let store = memory();
    let retry_count = TypedPreference::direct("retry_count", 0_i64, store.clone());

    assert_eq!(retry_count.value(), 0);

    retry_count.set_value(5);
    assert_eq!(retry_count.value(), 5);

    store.write("retry_count", StoredValue::String("five".to_string()));
    assert_eq!(retry_count.value(), 0);
}

#[test]
fn test_theme_with_invalid_raw_value() {
    let store = memory();
    store.write("theme", StoredValue::Integer(2));

    let theme = TypedPreference::raw("theme", Theme::Light, store.clone());
    assert_eq!(theme.value(), Theme::Light);

    let optional_theme = TypedPreference::<Option<Theme>>::raw_nullable("theme", store.clone());
    assert_eq!(optional_theme.value(), None);
}

#[test]
fn test_nickname() {
    let store = memory();
    let nickname = TypedPreference::<Option<String>>::nullable("nickname", store.clone());

    assert_eq!(nickname.value(), None);

    nickname.set_value(Some("Ada".to_string()));
    assert_eq!(nickname.value(), Some("Ada".to_string()));

    nickname.set_value(None);
    assert_eq!(nickname.value(), None);
    assert_eq!(store.read("nickname"), None);
    assert!(!store.contains_key("nickname"));
}

#[test]
fn test_direct_round_trip() {
    let store = memory();
    let url = Url::parse("https://example.com/feed").unwrap();

    let integer = TypedPreference::direct("integer", 0_i64, store.clone());
    let float = TypedPreference::direct("float", 0.0_f64, store.clone());
    let string = TypedPreference::direct("string", String::new(), store.clone());
    let flag = TypedPreference::direct("flag", false, store.clone());
    let data = TypedPreference::direct("data", Vec::<u8>::new(), store.clone());
    let link = TypedPreference::direct("link", Url::parse("about:blank").unwrap(), store.clone());
    let small = TypedPreference::direct("small", 0_u16, store.clone());

    integer.set_value(-12);
    float.set_value(2.5);
    string.set_value("hello".to_string());
    flag.set_value(true);
    data.set_value(vec![0xde, 0xad]);
    link.set_value(url.clone());
    small.set_value(65535);

    assert_eq!(integer.value(), -12);
    assert_eq!(float.value(), 2.5);
    assert_eq!(string.value(), "hello");
    assert!(flag.value());
    assert_eq!(data.value(), vec![0xde, 0xad]);
    assert_eq!(link.value(), url);
    assert_eq!(small.value(), 65535);
}

#[test]
fn test_deleted_key_reads_fallback() {
    let store = memory();
    let direct = TypedPreference::direct("count", 3_i32, store.clone());
    let nullable = TypedPreference::<Option<i32>>::nullable("count", store.clone());

    direct.set_value(10);
    assert_eq!(nullable.value(), Some(10));

    store.delete("count");
    assert_eq!(direct.value(), 3);
    assert_eq!(nullable.value(), None);
}

#[test]
fn test_every_wrong_shape_falls_back() {
    let store = memory();
    let shapes = [
        StoredValue::Integer(1),
        StoredValue::Float(1.0),
        StoredValue::String("1".to_string()),
        StoredValue::Bool(true),
        StoredValue::Data(vec![1]),
        StoredValue::Url(Url::parse("https://example.com").unwrap()),
    ];

    let flag = TypedPreference::direct("key", false, store.clone());
    let theme = TypedPreference::raw("key", Theme::Light, store.clone());

    for shape in shapes {
        let expected_flag = shape == StoredValue::Bool(true);
        let expected_theme = if shape == StoredValue::Integer(1) {
            Theme::Dark
        } else {
            Theme::Light
        };
        store.write("key", shape);

        assert_eq!(flag.value(), expected_flag);
        assert_eq!(theme.value(), expected_theme);
    }
}

#[test]
fn test_idempotent_reads_and_writes() {
    let store = memory();
    let theme = TypedPreference::raw("theme", Theme::Light, store.clone());

    theme.set_value(Theme::Dark);
    theme.set_value(Theme::Dark);
    assert_eq!(theme.value(), Theme::Dark);
    assert_eq!(theme.value(), Theme::Dark);
    assert_eq!(store.read("theme"), Some(StoredValue::Integer(1)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_preferences_share_store() {
    let store = memory();
    let writer = TypedPreference::direct("volume", 0.5_f64, store.clone());
    let reader = TypedPreference::<Option<f64>>::nullable("volume", store.clone());

    assert_eq!(reader.value(), None);
    writer.set_value(0.8);
    assert_eq!(reader.value(), Some(0.8));
}

#[test]
fn test_standard_store() {
    let first = TypedPreference::direct("scenarios_standard", 0_i64, prefwrap::standard());
    let second = TypedPreference::direct("scenarios_standard", 0_i64, prefwrap::standard());

    first.set_value(4);
    assert_eq!(second.value(), 4);
    prefwrap::standard().delete("scenarios_standard");
    assert_eq!(second.value(), 0);
}
