/// Builds a [`TomlTable`](crate::TomlTable) from a JSON-like literal.
///
/// The outer braces produce the table itself; nested values produce
/// [`TomlElement`](crate::TomlElement)s. Any expression with a `From`
/// conversion into `TomlElement` is accepted as a leaf. Negative numbers and
/// other multi-token expressions need parentheses.
///
/// # Examples
///
/// ```rust
/// use toml_tree::{toml, TomlElement};
///
/// let table = toml!({
///     "name": "Alice",
///     "age": 30,
///     "offset": (-2),
///     "tags": ["rust", "toml"],
///     "address": { "city": "Paris", "zip": null },
/// });
///
/// assert_eq!(table.get("age").and_then(TomlElement::as_integer), Some(30));
/// assert!(table.get("address").and_then(|a| a.pointer(&["zip"])).is_some_and(TomlElement::is_null));
/// ```
#[macro_export]
macro_rules! toml {
    ({}) => {
        $crate::TomlTable::new()
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut table = $crate::TomlTable::new();
        $(
            table.insert($key, $crate::toml!(@element $value));
        )*
        table
    }};

    (@element null) => {
        $crate::TomlElement::Null
    };

    (@element []) => {
        $crate::TomlElement::Array($crate::TomlArray::new())
    };

    (@element [ $($elem:tt),* $(,)? ]) => {
        $crate::TomlElement::from(vec![$($crate::toml!(@element $elem)),*])
    };

    (@element { $($body:tt)* }) => {
        $crate::TomlElement::Table($crate::toml!({ $($body)* }))
    };

    (@element $other:expr) => {
        $crate::TomlElement::from($other)
    };
}

#[cfg(test)]
mod tests {
    use crate::{TomlArray, TomlElement, TomlTable};

    #[test]
    fn test_toml_macro_leaves() {
        let table = toml!({
            "n": null,
            "t": true,
            "i": 42,
            "f": 3.5,
            "s": "hello",
            "neg": (-7),
        });
        assert_eq!(table.get("n"), Some(&TomlElement::Null));
        assert_eq!(table.get("t"), Some(&TomlElement::from(true)));
        assert_eq!(table.get("i"), Some(&TomlElement::from(42)));
        assert_eq!(table.get("f"), Some(&TomlElement::from(3.5)));
        assert_eq!(table.get("s"), Some(&TomlElement::from("hello")));
        assert_eq!(table.get("neg").and_then(TomlElement::as_integer), Some(-7));
    }

    #[test]
    fn test_toml_macro_arrays() {
        let table = toml!({ "empty": [], "nums": [1, 2, 3], "nested": [[1], ["a"]] });
        assert_eq!(table.get("empty"), Some(&TomlElement::Array(TomlArray::new())));
        let nums: Vec<_> = table
            .get("nums")
            .and_then(TomlElement::as_array)
            .unwrap()
            .iter()
            .filter_map(TomlElement::as_integer)
            .collect();
        assert_eq!(nums, vec![1, 2, 3]);
        assert_eq!(
            table.get("nested").and_then(TomlElement::as_array).map(TomlArray::len),
            Some(2)
        );
    }

    #[test]
    fn test_toml_macro_tables() {
        assert_eq!(toml!({}), TomlTable::new());

        let table = toml!({
            "owner": { "name": "Tom", "inner": {} },
        });
        let owner = table.get("owner").and_then(TomlElement::as_table).unwrap();
        assert_eq!(owner.len(), 2);
        assert_eq!(owner.get("name").and_then(TomlElement::as_str), Some("Tom"));
        assert!(owner.get("inner").and_then(TomlElement::as_table).unwrap().is_empty());
    }
}
