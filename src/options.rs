//! Configuration for document rendering.
//!
//! [`XmlOptions`] carries everything the renderer needs besides the data:
//! the root element name and attributes and the declaration fields.
//!
//! ## Examples
//!
//! ```rust
//! use serde_dictxml::{dict, to_string_with_options, XmlOptions};
//!
//! let data = dict!({ "id": 7 });
//!
//! let options = XmlOptions::new("record")
//!     .with_attribute("source", "import")
//!     .with_encoding("ISO-8859-1");
//! let xml = to_string_with_options(&data, options).unwrap();
//! assert_eq!(
//!     xml,
//!     r#"<?xml version="1.0" encoding="ISO-8859-1"?><record source="import"><id>7</id></record>"#
//! );
//! ```

use indexmap::IndexMap;

pub const DEFAULT_XML_VERSION: &str = "1.0";
pub const DEFAULT_ENCODING: &str = "utf-8";

/// Configuration options for rendering a document.
///
/// Every `XmlOptions` owns its own attribute map, so options built from the
/// same defaults never share state.
///
/// # Examples
///
/// ```rust
/// use serde_dictxml::XmlOptions;
///
/// let options = XmlOptions::new("root");
/// assert_eq!(options.xml_version, "1.0");
/// assert_eq!(options.encoding, "utf-8");
/// assert!(options.root_attributes.is_empty());
/// assert!(options.include_prolog);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct XmlOptions {
    pub root_name: String,
    pub root_attributes: IndexMap<String, String>,
    pub xml_version: String,
    pub encoding: String,
    pub include_prolog: bool,
    pub escape_attributes: bool,
}

impl XmlOptions {
    /// Creates default options for a document whose root element is `root_name`.
    #[must_use]
    pub fn new(root_name: impl Into<String>) -> Self {
        XmlOptions {
            root_name: root_name.into(),
            root_attributes: IndexMap::new(),
            xml_version: DEFAULT_XML_VERSION.to_string(),
            encoding: DEFAULT_ENCODING.to_string(),
            include_prolog: true,
            escape_attributes: true,
        }
    }

    /// Adds an attribute to the root element.
    ///
    /// Attributes render in insertion order. Setting a name twice replaces
    /// the value in place.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dictxml::XmlOptions;
    ///
    /// let options = XmlOptions::new("root")
    ///     .with_attribute("id", "1")
    ///     .with_attribute("lang", "en");
    /// assert_eq!(options.root_attributes.len(), 2);
    /// ```
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.root_attributes.insert(name.into(), value.into());
        self
    }

    /// Adds every `(name, value)` pair as a root attribute.
    #[must_use]
    pub fn with_attributes<I, K, V>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.root_attributes.extend(
            attributes
                .into_iter()
                .map(|(name, value)| (name.into(), value.into())),
        );
        self
    }

    /// Sets the `version` written in the declaration. Used verbatim.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.xml_version = version.into();
        self
    }

    /// Sets the `encoding` written in the declaration. Used verbatim.
    ///
    /// Only the declaration changes; output is always a Rust `String`.
    #[must_use]
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Controls whether the crate-level `to_string` functions emit the
    /// `<?xml ...?>` declaration.
    #[must_use]
    pub fn with_prolog(mut self, include: bool) -> Self {
        self.include_prolog = include;
        self
    }

    /// Controls escaping of root attribute values. On by default.
    ///
    /// With escaping off, values are written verbatim and a `"` in a value
    /// produces a malformed document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dictxml::{dict, to_string_with_options, XmlOptions};
    ///
    /// let data = dict!({});
    /// let options = XmlOptions::new("r")
    ///     .with_attribute("q", "a&b")
    ///     .with_prolog(false);
    ///
    /// let escaped = to_string_with_options(&data, options.clone()).unwrap();
    /// assert_eq!(escaped, r#"<r q="a&amp;b"></r>"#);
    ///
    /// let raw = to_string_with_options(&data, options.with_attribute_escaping(false)).unwrap();
    /// assert_eq!(raw, r#"<r q="a&b"></r>"#);
    /// ```
    #[must_use]
    pub fn with_attribute_escaping(mut self, escape: bool) -> Self {
        self.escape_attributes = escape;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = XmlOptions::new("doc");
        assert_eq!(options.root_name, "doc");
        assert_eq!(options.xml_version, DEFAULT_XML_VERSION);
        assert_eq!(options.encoding, DEFAULT_ENCODING);
        assert!(options.escape_attributes);
    }

    #[test]
    fn test_fresh_attribute_map_per_instance() {
        let a = XmlOptions::new("a").with_attribute("k", "v");
        let b = XmlOptions::new("b");
        assert_eq!(a.root_attributes.len(), 1);
        assert!(b.root_attributes.is_empty());
    }

    #[test]
    fn test_with_attributes_keeps_order() {
        let options = XmlOptions::new("root").with_attributes([("z", "1"), ("a", "2")]);
        let names: Vec<_> = options.root_attributes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
