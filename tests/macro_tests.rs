use toml_tree::{parse_document, render_document, toml, TomlArray, TomlElement, TomlTable};

#[test]
fn test_toml_macro_empty() {
    let table = toml!({});
    assert_eq!(table, TomlTable::new());
    assert_eq!(render_document(&table).unwrap(), "");
}

#[test]
fn test_toml_macro_scalars() {
    let table = toml!({
        "null": null,
        "yes": true,
        "no": false,
        "int": 42,
        "negative": (-123),
        "float": 3.5,
        "string": "hello world",
        "empty_string": "",
    });

    assert_eq!(table.len(), 8);
    assert_eq!(table.get("null"), Some(&TomlElement::Null));
    assert_eq!(table.get("yes").and_then(TomlElement::as_bool), Some(true));
    assert_eq!(table.get("no").and_then(TomlElement::as_bool), Some(false));
    assert_eq!(table.get("int").and_then(TomlElement::as_integer), Some(42));
    assert_eq!(table.get("negative").and_then(TomlElement::as_integer), Some(-123));
    assert_eq!(table.get("float").and_then(TomlElement::as_float), Some(3.5));
    assert_eq!(table.get("string").and_then(TomlElement::as_str), Some("hello world"));
    assert_eq!(table.get("empty_string").and_then(TomlElement::as_str), Some(""));
}

#[test]
fn test_toml_macro_arrays() {
    let table = toml!({
        "empty": [],
        "numbers": [1, 2, 3],
        "mixed": [1, "hello", true, null],
    });

    assert_eq!(table.get("empty"), Some(&TomlElement::Array(TomlArray::new())));

    let mixed = table.get("mixed").and_then(TomlElement::as_array).unwrap();
    assert_eq!(mixed.len(), 4);
    assert_eq!(mixed.get(1).and_then(TomlElement::as_str), Some("hello"));
    assert_eq!(mixed.get(3), Some(&TomlElement::Null));
}

#[test]
fn test_toml_macro_nested_tables() {
    let table = toml!({
        "title": "example",
        "owner": {
            "name": "Tom",
            "address": { "city": "Paris" }
        },
    });

    let owner = TomlElement::Table(table.clone());
    assert_eq!(
        owner.pointer(&["owner", "address", "city"]).and_then(TomlElement::as_str),
        Some("Paris")
    );
    assert_eq!(
        render_document(&table).unwrap(),
        "title = \"example\"\n\n[owner]\nname = \"Tom\"\n\n[owner.address]\ncity = \"Paris\"\n"
    );
}

#[test]
fn test_toml_macro_matches_parsed_document() {
    let built = toml!({
        "server": { "host": "localhost", "ports": [8080, 8081] },
        "fruit": [{ "name": "apple" }, { "name": "banana" }],
    });
    let parsed = parse_document(
        "[server]\nhost = \"localhost\"\nports = [8080, 8081]\n\n[[fruit]]\nname = \"apple\"\n\n[[fruit]]\nname = \"banana\"\n",
    )
    .unwrap();
    assert_eq!(built, parsed);
}

#[test]
fn test_toml_macro_expression_leaves() {
    let name = String::from("dynamic");
    let count: i64 = 7;
    let table = toml!({ "name": name, "count": count });
    assert_eq!(table.get("name").and_then(TomlElement::as_str), Some("dynamic"));
    assert_eq!(table.get("count").and_then(TomlElement::as_integer), Some(7));
}
