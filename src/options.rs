//! Configuration options for rendering and parsing.
//!
//! ## Examples
//!
//! ```rust
//! use jsondoc::{json, to_string_with_options, JsonOptions};
//!
//! let value = json!({"a": [1, 2]});
//!
//! let options = JsonOptions::pretty().with_indent(4);
//! let text = to_string_with_options(&value, &options);
//! assert_eq!(text, "{\n    \"a\": [\n        1,\n        2\n    ]\n}");
//! ```

/// Default nesting limit for parsing.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Configuration options for JSON text.
///
/// Controls indentation and escaping on output and the nesting limit on
/// input.
///
/// # Examples
///
/// ```rust
/// use jsondoc::JsonOptions;
///
/// // Default minified options
/// let options = JsonOptions::new();
///
/// // Pretty-printed with 2-space indentation
/// let options = JsonOptions::pretty();
///
/// // Custom configuration
/// let options = JsonOptions::new()
///     .with_ascii_only(true)
///     .with_max_depth(16);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JsonOptions {
    pub indent: usize,
    pub pretty: bool,
    pub max_depth: usize,
    pub ascii_only: bool,
}

impl Default for JsonOptions {
    fn default() -> Self {
        JsonOptions {
            indent: 2,
            pretty: false,
            max_depth: DEFAULT_MAX_DEPTH,
            ascii_only: false,
        }
    }
}

impl JsonOptions {
    /// Creates default options (minified, 2-space indent when pretty, depth
    /// limit 128).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsondoc::JsonOptions;
    ///
    /// let options = JsonOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert!(!options.pretty);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for indented output.
    #[must_use]
    pub fn pretty() -> Self {
        JsonOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the indentation size (number of spaces per level).
    ///
    /// Only affects pretty-printed output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets how deeply arrays and objects may nest in parsed input.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Escapes every non-ASCII character as `\uXXXX` on output.
    #[must_use]
    pub fn with_ascii_only(mut self, ascii_only: bool) -> Self {
        self.ascii_only = ascii_only;
        self
    }
}
