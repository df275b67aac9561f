use std::collections::{BTreeMap, HashMap};

use presence::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct TestData {
    data: &'static str,
}

fn test_data(data: &'static str) -> TestData {
    TestData { data }
}

type Item = HashMap<&'static str, Nullish<&'static str>>;

fn items() -> Vec<Item> {
    vec![
        HashMap::new(),
        HashMap::from([("data", Nullish::Undefined)]),
        HashMap::from([("data", Nullish::Null)]),
        HashMap::from([("data", Nullish::Present(""))]),
        HashMap::from([("data", Nullish::Present("hello"))]),
    ]
}

#[test]
fn test_is_present_filters_absent_values() {
    let results = vec![
        Nullish::Present(test_data("hello")),
        Nullish::Null,
        Nullish::Present(test_data("world")),
        Nullish::Undefined,
        Nullish::Present(test_data("wow")),
    ];

    let present: Vec<TestData> = results.into_iter().filter_map(Nullish::present).collect();

    assert_eq!(
        present,
        vec![test_data("hello"), test_data("world"), test_data("wow")]
    );
}

#[test]
fn test_is_present_on_void_result() {
    fn log_only() {}

    assert!(!is_present(&log_only()));
}

#[test]
fn test_is_defined_keeps_null() {
    let results = vec![
        Nullish::Present(test_data("hello")),
        Nullish::Null,
        Nullish::Undefined,
    ];

    let defined: Vec<&Nullish<TestData>> = results.iter().filter(|v| is_defined(*v)).collect();
    assert_eq!(defined, vec![&results[0], &results[1]]);
}

#[test]
fn test_is_filled_keeps_undefined() {
    let results = vec![
        Nullish::Present(test_data("hello")),
        Nullish::Null,
        Nullish::Undefined,
    ];

    let filled: Vec<&Nullish<TestData>> = results.iter().filter(|v| is_filled(*v)).collect();
    assert_eq!(filled, vec![&results[0], &results[2]]);
}

#[test]
fn test_has_key_keeps_every_existing_key() {
    let items = items();
    let result: Vec<&Item> = items.iter().filter(has_key("data").into_fn()).collect();
    assert_eq!(result, vec![&items[1], &items[2], &items[3], &items[4]]);
}

#[test]
fn test_has_present_key_keeps_values() {
    let items = items();
    let result: Vec<&str> = items
        .iter()
        .filter(has_present_key("data").into_fn())
        .filter_map(|item| item.present_at("data").copied())
        .collect();
    assert_eq!(result, vec!["", "hello"]);
}

#[test]
fn test_has_defined_key_keeps_null() {
    let items = items();
    let result: Vec<&Item> = items
        .iter()
        .filter(has_defined_key("data").into_fn())
        .collect();
    assert_eq!(result, vec![&items[2], &items[3], &items[4]]);
}

#[test]
fn test_has_present_keys() {
    let both: Item = HashMap::from([("data", Nullish::Present("")), ("fruit", Nullish::Present(""))]);
    let null_data: Item =
        HashMap::from([("data", Nullish::Null), ("fruit", Nullish::Present("banana"))]);

    assert!(has_present_keys(["data", "fruit"]).check(&both));
    assert!(!has_present_keys(["data", "fruit"]).check(&null_data));
    assert!(has_present_keys(Vec::<&str>::new()).check(&null_data));
}

#[test]
fn test_has_value_at_key_selects_variant() {
    let fruits: Vec<BTreeMap<&str, Nullish<&str>>> = vec![
        BTreeMap::from([("type", Nullish::Present("apple")), ("isApple", Nullish::Present("true"))]),
        BTreeMap::from([("type", Nullish::Present("banana")), ("isBanana", Nullish::Present("true"))]),
    ];

    let apples: Vec<_> = fruits
        .iter()
        .filter(has_value_at_key("type", "apple").into_fn())
        .collect();
    assert_eq!(apples, vec![&fruits[0]]);
}

#[test]
fn test_has_value_at_key_with_absent_slots() {
    let items: Vec<Item> = vec![
        HashMap::from([("data", Nullish::Undefined)]),
        HashMap::from([("data", Nullish::Null)]),
        HashMap::from([("data", Nullish::Present("a"))]),
        HashMap::from([("data", Nullish::Present("b"))]),
    ];

    let result: Vec<&Item> = items
        .iter()
        .filter(has_value_at_key("data", "a").into_fn())
        .collect();
    assert_eq!(result, vec![&items[2]]);
}

#[test]
fn test_predicates_shared_across_threads() {
    let predicate = std::sync::Arc::new(has_present_keys(["data"]));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let predicate = predicate.clone();
            std::thread::spawn(move || {
                let item: Item = if i % 2 == 0 {
                    HashMap::from([("data", Nullish::Present("x"))])
                } else {
                    HashMap::new()
                };
                predicate.check(&item)
            })
        })
        .collect();

    let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, vec![true, false, true, false]);
}

#[cfg(feature = "json")]
mod json {
    use presence::prelude::*;
    use serde_json::{json, Value};

    #[test]
    fn test_filters_parsed_json() {
        let files: Vec<Value> = serde_json::from_str(
            r#"[
                {"type": "image", "url": "a.png"},
                {"type": "image", "url": null},
                {"type": "pdf"}
            ]"#,
        )
        .unwrap();

        let images_with_url: Vec<&Value> = files
            .iter()
            .filter(has_value_at_key("type", "image").and(has_present_key("url")).into_fn())
            .collect();

        assert_eq!(images_with_url, vec![&json!({"type": "image", "url": "a.png"})]);
    }
}
