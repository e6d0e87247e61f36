//! Serializing Rust structs to TOML and reading them back.
//!
//! Run with: cargo run --example serde_roundtrip

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use toml_tree::{from_str, to_element, to_string, TomlElement};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Package {
    name: String,
    version: String,
    edition: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Target {
    name: String,
    path: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Manifest {
    package: Package,
    dependencies: BTreeMap<String, String>,
    bin: Vec<Target>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut dependencies = BTreeMap::new();
    dependencies.insert("serde".to_string(), "1.0".to_string());
    dependencies.insert("log".to_string(), "0.4".to_string());

    let manifest = Manifest {
        package: Package {
            name: "tool".to_string(),
            version: "0.1.0".to_string(),
            edition: Some("2021".to_string()),
        },
        dependencies,
        bin: vec![
            Target {
                name: "tool".to_string(),
                path: "src/main.rs".to_string(),
            },
            Target {
                name: "helper".to_string(),
                path: "src/bin/helper.rs".to_string(),
            },
        ],
    };

    // Serialize to TOML
    let text = to_string(&manifest)?;
    println!("TOML output:\n{}", text);

    // Deserialize back to struct
    let back: Manifest = from_str(&text)?;
    assert_eq!(manifest, back);
    println!("✓ Round-trip successful");

    // The same value as a document tree
    let element = to_element(&manifest)?;
    println!(
        "bin entries: {:?}",
        element
            .pointer(&["bin"])
            .and_then(TomlElement::as_array)
            .map(|array| array.len())
    );

    Ok(())
}
