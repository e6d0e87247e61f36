//! Configuration options for TOML rendering.
//!
//! This module provides types to customize writer output:
//!
//! - [`TomlOptions`]: Main configuration struct
//! - [`Indentation`]: Indent used for the items of block arrays
//!
//! Per-entry hints live in [`crate::Metadata`]; these options apply to the whole
//! document.
//!
//! ## Examples
//!
//! ```rust
//! use toml_tree::{render_with_options, Indentation, TomlOptions, TomlTable};
//!
//! let mut table = TomlTable::new();
//! table.insert("ports", vec![80.into(), 443.into()]);
//!
//! let options = TomlOptions::new()
//!     .with_block_arrays(true)
//!     .with_indentation(Indentation::Space2);
//! let toml = render_with_options(&table, options).unwrap();
//! assert_eq!(toml, "ports = [\n  80,\n  443,\n]\n");
//! ```

/// Indentation choice for block array items.
///
/// # Examples
///
/// ```rust
/// use toml_tree::Indentation;
///
/// assert_eq!(Indentation::Space4.as_str(), "    ");
/// assert_eq!(Indentation::Tab.as_str(), "\t");
/// assert_eq!(Indentation::None.as_str(), "");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Indentation {
    None,
    Space2,
    #[default]
    Space4,
    Tab,
}

impl Indentation {
    /// Returns the string written once per indent level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Indentation::None => "",
            Indentation::Space2 => "  ",
            Indentation::Space4 => "    ",
            Indentation::Tab => "\t",
        }
    }
}

/// Configuration options for TOML rendering.
///
/// # Examples
///
/// ```rust
/// use toml_tree::{TomlOptions, Indentation};
///
/// // Default: flow arrays, explicit nulls, 4-space indent
/// let options = TomlOptions::new();
///
/// // Every non-inline array as a block, one item per line
/// let options = TomlOptions::pretty();
///
/// // Custom configuration
/// let options = TomlOptions::new()
///     .with_items_per_line(4)
///     .with_explicit_nulls(false)
///     .with_indentation(Indentation::Tab);
/// ```
#[derive(Clone, Debug)]
pub struct TomlOptions {
    pub indentation: Indentation,
    pub items_per_line: usize,
    pub block_arrays: bool,
    pub explicit_nulls: bool,
}

impl Default for TomlOptions {
    fn default() -> Self {
        TomlOptions {
            indentation: Indentation::default(),
            items_per_line: 1,
            block_arrays: false,
            explicit_nulls: true,
        }
    }
}

impl TomlOptions {
    /// Creates default options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_tree::TomlOptions;
    ///
    /// let options = TomlOptions::new();
    /// assert_eq!(options.items_per_line, 1);
    /// assert!(options.explicit_nulls);
    /// assert!(!options.block_arrays);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that write every non-inline array as a block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toml_tree::TomlOptions;
    ///
    /// assert!(TomlOptions::pretty().block_arrays);
    /// ```
    #[must_use]
    pub fn pretty() -> Self {
        TomlOptions {
            block_arrays: true,
            ..Default::default()
        }
    }

    /// Creates options for the smallest output: flow arrays and no null entries.
    #[must_use]
    pub fn compact() -> Self {
        TomlOptions {
            explicit_nulls: false,
            ..Default::default()
        }
    }

    /// Sets the indent written before block array items.
    #[must_use]
    pub fn with_indentation(mut self, indentation: Indentation) -> Self {
        self.indentation = indentation;
        self
    }

    /// Sets how many items a block array puts on one line when the entry does not say.
    ///
    /// Zero is treated as one.
    #[must_use]
    pub fn with_items_per_line(mut self, items_per_line: usize) -> Self {
        self.items_per_line = items_per_line;
        self
    }

    #[must_use]
    pub fn with_block_arrays(mut self, block_arrays: bool) -> Self {
        self.block_arrays = block_arrays;
        self
    }

    /// Controls whether null table entries are written as `key = null` or skipped.
    #[must_use]
    pub fn with_explicit_nulls(mut self, explicit_nulls: bool) -> Self {
        self.explicit_nulls = explicit_nulls;
        self
    }
}
