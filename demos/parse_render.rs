//! Parsing TOML text into a document tree and rendering it back.
//!
//! Run with: cargo run --example parse_render

use std::error::Error;
use toml_tree::{
    parse_document, render_document, render_with_options, IntegerBase, IntegerFormat, Metadata,
    TomlElement, TomlOptions, TomlTable,
};

const CONFIG: &str = r#"# Service configuration
title = "demo"

[server]
host = "localhost"
ports = [ 8080, 8081 ]
limits = { connections = 512, timeout = 30 }

[[worker]]
name = "alpha"

[[worker]]
name = "beta"
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let document = parse_document(CONFIG)?;

    let root = TomlElement::Table(document.clone());
    println!(
        "server.host = {:?}",
        root.pointer(&["server", "host"]).and_then(TomlElement::as_str)
    );

    // Comments are not kept by the parser, the writer picks the layout
    let rendered = render_document(&document)?;
    println!("Rendered:\n{}", rendered);
    assert_eq!(parse_document(&rendered)?, document);

    // Layout hints travel with each entry
    let mut settings = TomlTable::new();
    settings.insert_with_meta(
        "mask",
        255,
        Metadata::new()
            .with_comment("permission bits")
            .with_integer_format(IntegerFormat::new(IntegerBase::Hex)),
    );
    settings.insert_with_meta(
        "primes",
        vec![TomlElement::from(2), 3.into(), 5.into(), 7.into(), 11.into()],
        Metadata::new().with_block_array(2),
    );

    let pretty = render_with_options(&settings, TomlOptions::pretty())?;
    println!("With hints:\n{}", pretty);

    let back = parse_document(&pretty)?;
    assert_eq!(back.get("mask").and_then(TomlElement::as_integer), Some(255));
    println!("✓ Round-trip successful");

    Ok(())
}
