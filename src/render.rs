//! Rendering of value trees into XML documents.
//!
//! The [`Renderer`] walks a mapping depth-first and writes every entry as an
//! element named after its key:
//!
//! - **Mappings** become an element wrapping their rendered entries
//! - **Sequences** become one sibling element per item, all sharing the key;
//!   there is no wrapper element, and nested sequences flatten into the
//!   same run of siblings
//! - **Scalars** become an element with escaped text; null is empty
//!
//! The body is wrapped in the root element and, optionally, preceded by the
//! `<?xml ...?>` declaration. Output is compact: no whitespace is inserted
//! between elements and there is no trailing newline.
//!
//! ## Usage
//!
//! ```rust
//! use serde_dictxml::{dict, Renderer, XmlOptions};
//!
//! let data = dict!({ "items": ["x", "y"] });
//! let renderer = Renderer::new(&data, XmlOptions::new("list")).unwrap();
//!
//! assert_eq!(renderer.body(), "<items>x</items><items>y</items>");
//! assert_eq!(
//!     renderer.xml(false),
//!     "<list ><items>x</items><items>y</items></list>"
//! );
//! ```

use crate::escape::sanitize_to;
use crate::{Error, Result, Value, XmlMap, XmlOptions};
use std::fmt::Write as _;
use std::io;

/// Renders one borrowed mapping with a fixed configuration.
///
/// A renderer never mutates its input and keeps no state between calls, so
/// calling [`Renderer::xml`] repeatedly returns the same string.
#[derive(Debug, Clone)]
pub struct Renderer<'a> {
    data: &'a XmlMap,
    options: XmlOptions,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer for `data`, which must be a [`Value::Object`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `data` is not a mapping, and
    /// [`Error::InvalidRootName`] if the configured root name is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dictxml::{Renderer, Value, XmlOptions};
    ///
    /// let list = Value::Array(vec![Value::from(1)]);
    /// assert!(Renderer::new(&list, XmlOptions::new("root")).is_err());
    /// ```
    pub fn new(data: &'a Value, options: XmlOptions) -> Result<Self> {
        match data {
            Value::Object(map) => Self::from_map(map, options),
            other => Err(Error::invalid_input("mapping", other.kind())),
        }
    }

    /// Creates a renderer directly from a mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRootName`] if the configured root name is empty.
    pub fn from_map(data: &'a XmlMap, options: XmlOptions) -> Result<Self> {
        if options.root_name.is_empty() {
            return Err(Error::invalid_root_name("root element name must not be empty"));
        }
        Ok(Renderer { data, options })
    }

    /// Returns the configuration this renderer was built with.
    #[must_use]
    pub fn options(&self) -> &XmlOptions {
        &self.options
    }

    /// Builds the XML declaration from the configured version and encoding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dictxml::{dict, Renderer, XmlOptions};
    ///
    /// let data = dict!({});
    /// let renderer = Renderer::new(&data, XmlOptions::new("root")).unwrap();
    /// assert_eq!(renderer.prolog(), r#"<?xml version="1.0" encoding="utf-8"?>"#);
    /// ```
    #[must_use]
    pub fn prolog(&self) -> String {
        let mut output = String::with_capacity(
            30 + self.options.xml_version.len() + self.options.encoding.len(),
        );
        self.write_prolog(&mut output);
        output
    }

    /// Renders the entries of the mapping without the root element.
    #[must_use]
    pub fn body(&self) -> String {
        let mut output = String::with_capacity(256);
        write_mapping(&mut output, self.data);
        output
    }

    /// Renders the full document.
    ///
    /// With `include_prolog` set to `false` the output starts directly with
    /// the root element's opening tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dictxml::{dict, Renderer, XmlOptions};
    ///
    /// let data = dict!({ "a": { "b": "c" } });
    /// let renderer = Renderer::new(&data, XmlOptions::new("root")).unwrap();
    ///
    /// assert_eq!(
    ///     renderer.xml(true),
    ///     r#"<?xml version="1.0" encoding="utf-8"?><root ><a><b>c</b></a></root>"#
    /// );
    /// assert!(renderer.xml(false).starts_with("<root"));
    /// ```
    #[must_use]
    pub fn xml(&self, include_prolog: bool) -> String {
        // Pre-allocate with reasonable capacity to reduce reallocations
        let mut output = String::with_capacity(256);
        if include_prolog {
            self.write_prolog(&mut output);
        }
        self.write_root(&mut output);
        output
    }

    /// Renders the document, including the declaration when
    /// [`XmlOptions::include_prolog`] is set.
    #[must_use]
    pub fn document(&self) -> String {
        self.xml(self.options.include_prolog)
    }

    /// Renders the document and writes it to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing fails.
    pub fn write_to<W>(&self, mut writer: W, include_prolog: bool) -> Result<()>
    where
        W: io::Write,
    {
        writer
            .write_all(self.xml(include_prolog).as_bytes())
            .map_err(|e| Error::io(&e.to_string()))
    }

    fn write_prolog(&self, output: &mut String) {
        output.push_str("<?xml version=\"");
        output.push_str(&self.options.xml_version);
        output.push_str("\" encoding=\"");
        output.push_str(&self.options.encoding);
        output.push_str("\"?>");
    }

    fn write_root(&self, output: &mut String) {
        let name = &self.options.root_name;

        output.push('<');
        output.push_str(name);
        if self.options.root_attributes.is_empty() {
            // an attribute-less root keeps the space before `>`
            output.push(' ');
        }
        for (attr, value) in &self.options.root_attributes {
            output.push(' ');
            output.push_str(attr);
            output.push_str("=\"");
            if self.options.escape_attributes {
                sanitize_to(value, output);
            } else {
                output.push_str(value);
            }
            output.push('"');
        }
        output.push('>');

        write_mapping(output, self.data);

        output.push_str("</");
        output.push_str(name);
        output.push('>');
    }
}

fn write_mapping(output: &mut String, map: &XmlMap) {
    for (key, value) in map.iter() {
        write_entry(output, key, value);
    }
}

/// Writes `value` as element(s) named `key`.
fn write_entry(output: &mut String, key: &str, value: &Value) {
    match value {
        Value::Object(map) => element(output, key, |out| write_mapping(out, map)),
        Value::Array(items) => {
            // each item is rendered as if it were the mapping {key: item}
            for item in items {
                write_entry(output, key, item);
            }
        }
        Value::Null => element(output, key, |_| {}),
        Value::Bool(b) => element(output, key, |out| {
            out.push_str(if *b { "true" } else { "false" })
        }),
        // writing to a String cannot fail
        Value::Number(n) => element(output, key, |out| {
            let _ = write!(out, "{}", n);
        }),
        Value::String(s) => element(output, key, |out| sanitize_to(s, out)),
        Value::Date(dt) => element(output, key, |out| sanitize_to(&dt.to_rfc3339(), out)),
        Value::BigInt(bi) => element(output, key, |out| {
            let _ = write!(out, "{}", bi);
        }),
    }
}

#[inline]
fn element<F>(output: &mut String, key: &str, content: F)
where
    F: FnOnce(&mut String),
{
    output.push('<');
    output.push_str(key);
    output.push('>');
    content(output);
    output.push_str("</");
    output.push_str(key);
    output.push('>');
}
