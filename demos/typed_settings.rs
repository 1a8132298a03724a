//! Deserializing a settings file straight into Rust types.
//!
//! Run with: cargo run --example typed_settings

use serde::Deserialize;
use serde_luatable::{from_str_with_options, DecodeOptions};
use std::collections::BTreeMap;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Anchor {
    point: String,
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Frame {
    anchor: Anchor,
    locked: bool,
    font_size: Option<u8>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UnitFramesDB {
    frames: BTreeMap<String, Frame>,
    disabled_modules: Vec<String>,
    db_version: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let text = r#"
UnitFramesDB = {
	["frames"] = {
		["player"] = {
			["anchor"] = { point = "CENTER", x = -260, y = -120.5 },
			["locked"] = true,
			["fontSize"] = 12,
		},
		["target"] = {
			["anchor"] = { point = "CENTER", x = 260, y = -120.5 },
			["locked"] = false,
		},
	},
	["disabledModules"] = {},
	["dbVersion"] = 3,
}
"#;

    let db: UnitFramesDB = from_str_with_options(text, &DecodeOptions::saved_variables())?;

    println!("Schema version {}", db.db_version);
    for (unit, frame) in &db.frames {
        println!(
            "  {:<8} {} ({:+}, {:+}) locked={} font={}",
            unit,
            frame.anchor.point,
            frame.anchor.x,
            frame.anchor.y,
            frame.locked,
            frame
                .font_size
                .map_or_else(|| "default".to_string(), |s| s.to_string())
        );
    }
    println!("Disabled modules: {:?}", db.disabled_modules);

    // Errors carry a position
    let broken = "UnitFramesDB = { frames = { player = -x } }";
    let options = DecodeOptions::saved_variables();
    if let Err(err) = from_str_with_options::<UnitFramesDB>(broken, &options) {
        println!("\nBroken file: {}", err);
    }

    Ok(())
}
