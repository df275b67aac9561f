//! Filtering example
//!
//! Demonstrates presence predicates over plain values, maps, and parsed JSON.
//!
//! Run with: cargo run --example filtering --features json,tracing

use std::collections::HashMap;

use presence::prelude::*;
use serde_json::Value;

// ==================== Value predicates ====================

fn example_values() {
    println!("\n=== Value predicates ===");

    let results = vec![
        Nullish::Present("hello"),
        Nullish::Null,
        Nullish::Present("world"),
        Nullish::Undefined,
    ];

    let present: Vec<&str> = results.iter().copied().filter_map(Nullish::present).collect();
    let defined = results.iter().filter(|v| is_defined(*v)).count();
    let filled = results.iter().filter(|v| is_filled(*v)).count();

    println!("present: {:?}", present);
    println!("defined: {} of {}", defined, results.len());
    println!("filled:  {} of {}", filled, results.len());
}

// ==================== Key predicates ====================

fn example_records() {
    println!("\n=== Key predicates ===");

    let files: Vec<HashMap<&str, Nullish<&str>>> = vec![
        HashMap::from([("url", Nullish::Present("a.png")), ("name", Nullish::Present("a"))]),
        HashMap::from([("url", Nullish::Null), ("name", Nullish::Present("b"))]),
        HashMap::from([("name", Nullish::Present("c"))]),
    ];

    for (label, count) in [
        ("has url key", files.iter().filter(has_key("url").into_fn()).count()),
        ("defined url", files.iter().filter(has_defined_key("url").into_fn()).count()),
        ("present url", files.iter().filter(has_present_key("url").into_fn()).count()),
        (
            "url and name",
            files
                .iter()
                .filter(has_present_keys(["url", "name"]).into_fn())
                .count(),
        ),
    ] {
        println!("{:<13} {}", label, count);
    }
}

// ==================== JSON ====================

fn example_json() -> Result<(), serde_json::Error> {
    println!("\n=== JSON records ===");

    let fruits: Vec<Value> = serde_json::from_str(
        r#"[
            {"type": "apple", "isApple": true},
            {"type": "banana", "isBanana": true},
            {"type": "apple", "isApple": null}
        ]"#,
    )?;

    let ripe_apples: Vec<&Value> = fruits
        .iter()
        .filter(
            has_value_at_key("type", "apple")
                .and(has_present_key("isApple"))
                .into_fn(),
        )
        .collect();

    println!("ripe apples: {}", serde_json::to_string(&ripe_apples)?);
    Ok(())
}

fn main() -> Result<(), serde_json::Error> {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("Presence Predicates Examples");
    println!("============================");

    example_values();
    example_records();
    example_json()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}
