//! Reading a whole SavedVariables file and walking the result.
//!
//! Run with: cargo run --example saved_variables

use serde_luatable::{load_assignments, LuaTable, Value};
use std::error::Error;

const SAVED: &str = r#"
BagTrackerDB = {
	["profileKeys"] = {
		["Thrall - Durotan"] = "Default",
		["Jaina - Proudmoore"] = "Default",
	},
	["profiles"] = {
		["Default"] = {
			["columns"] = 10,
			["sortOrder"] = { "quality", "type", "name" },
			["ignored"] = {
				[6948] = true, -- Hearthstone
				[19019] = true,
			},
		},
	},
	["version"] = "2.4.1",
}
BagTrackerCharDB = nil
"#;

fn describe(table: &LuaTable, indent: usize) {
    for (key, value) in table {
        let label = match key {
            Value::String(s) => s.clone(),
            other => format!("[{:?}]", other),
        };
        match value {
            Value::Table(inner) => {
                println!("{:indent$}{} (table, {} entries)", "", label, inner.len());
                describe(inner, indent + 2);
            }
            Value::Array(items) => {
                println!("{:indent$}{} (array, {} items)", "", label, items.len());
            }
            scalar => println!("{:indent$}{} = {:?}", "", label, scalar),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let vars = load_assignments(SAVED)?;

    println!("Globals: {}", vars.len());
    describe(&vars, 0);

    let db = vars
        .get(&Value::from("BagTrackerDB"))
        .ok_or("BagTrackerDB missing")?;

    let version = db.get("version").and_then(Value::as_str).unwrap_or("?");
    let ignored: Vec<i64> = db
        .get("profiles")
        .and_then(|p| p.get("Default"))
        .and_then(|d| d.get("ignored"))
        .and_then(Value::as_table)
        .map(|t| t.keys().filter_map(Value::as_i64).collect())
        .unwrap_or_default();

    println!("\nversion {} ignores item ids {:?}", version, ignored);

    Ok(())
}
