//! Building expected values with the lua! macro.
//!
//! Run with: cargo run --example macro

use serde_luatable::{load, lua, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let nil = lua!(nil);
    let flag = lua!(true);
    let number = lua!(42);
    let text = lua!("Hello, Azeroth!");

    println!("Scalars:");
    for value in [&nil, &flag, &number, &text] {
        println!("  {:<8} {:?}", value.type_name(), value);
    }
    println!();

    let layout = lua!(["TOPLEFT", "CENTER", "BOTTOMRIGHT"]);
    println!("Array:\n  {}\n", serde_json::to_string(&layout)?);

    let profile = lua!({
        "minimap" => { "hide" => false, "minimapPos" => 212.5 },
        "bars" => [12, 12, 6],
        "scale" => 1.25,
    });
    println!("Table:\n{}\n", serde_json::to_string_pretty(&profile)?);

    // Same tree, read from settings text
    let decoded = load(
        r#"{
        ["minimap"] = { ["hide"] = false, ["minimapPos"] = 212.5 },
        ["bars"] = { 12, 12, 6 },
        ["scale"] = 1.25,
    }"#,
    )?;
    assert_eq!(decoded, profile);
    println!("✓ lua! matches the decoded literal");

    let size = profile.get("bars").and_then(Value::len).unwrap_or(0);
    println!("  bars has {} entries", size);

    Ok(())
}
