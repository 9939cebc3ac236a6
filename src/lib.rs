//! # serde_dictxml
//!
//! Render nested maps, sequences and scalars into a single-root XML document.
//!
//! ## What does it produce?
//!
//! Every key of the input mapping becomes an element. Mappings nest, sequences
//! repeat their key once per item, and scalars become escaped element text:
//!
//! ```text
//! {"user": {"name": "Alice", "tags": ["a", "b"], "manager": null}}
//!
//! <?xml version="1.0" encoding="utf-8"?><root ><user><name>Alice</name><tags>a</tags><tags>b</tags><manager></manager></user></root>
//! ```
//!
//! ## Key Features
//!
//! - **Ordered output**: elements appear in the insertion order of their keys
//! - **Serde Compatible**: any `#[derive(Serialize)]` type with named fields can be rendered
//! - **Configurable root**: root name, root attributes, declaration version and encoding
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! Output is compact: no indentation, no newlines, no trailing newline.
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_dictxml::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     tags: Vec<String>,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice & Bob".to_string(),
//!     tags: vec!["admin".to_string(), "ops".to_string()],
//! };
//!
//! let xml = to_string(&user, "user").unwrap();
//! assert_eq!(
//!     xml,
//!     "<?xml version=\"1.0\" encoding=\"utf-8\"?><user ><id>123</id>\
//!      <name>Alice &amp; Bob</name><tags>admin</tags><tags>ops</tags></user>"
//! );
//! ```
//!
//! ### Dynamic Values with dict! Macro
//!
//! ```rust
//! use serde_dictxml::{dict, Renderer, XmlOptions};
//!
//! let data = dict!({ "items": ["x", "y"] });
//!
//! let renderer = Renderer::new(&data, XmlOptions::new("list").with_attribute("n", "2")).unwrap();
//! assert_eq!(
//!     renderer.xml(false),
//!     r#"<list n="2"><items>x</items><items>y</items></list>"#
//! );
//! ```
//!
//! ## Behavior Notes
//!
//! - Keys are written as tag names verbatim; they are not escaped or validated.
//! - Nested sequences flatten: `{"k": [[1, 2], [3]]}` renders `<k>1</k><k>2</k><k>3</k>`.
//! - Empty sequences render nothing; null renders an empty element.
//! - Root attribute values are escaped unless disabled with
//!   [`XmlOptions::with_attribute_escaping`].
//! - A root without attributes is written `<root >`.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - rendering a derived struct
//! - **`macro.rs`** - building values with the dict! macro
//! - **`repeated_elements.rs`** - how sequences become sibling elements
//! - **`dynamic_values.rs`** - rendering data loaded from JSON
//! - **`custom_options.rs`** - root attributes and declaration fields
//!
//! Run any example with: `cargo run --example <name>`

pub mod error;
pub mod escape;
pub mod macros;
pub mod map;
pub mod options;
pub mod render;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use escape::{sanitize, sanitize_to};
pub use map::XmlMap;
pub use options::XmlOptions;
pub use render::Renderer;
pub use ser::ValueSerializer;
pub use value::{Number, Value};

use serde::Serialize;
use std::io;

/// Render any `T: Serialize` as a document with root element `root_name`.
///
/// `T` must serialize to a mapping (a struct with named fields, a map, or
/// a [`Value::Object`]).
///
/// # Examples
///
/// ```rust
/// use serde_dictxml::to_string;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let xml = to_string(&Point { x: 1, y: 2 }, "point").unwrap();
/// assert!(xml.ends_with("<point ><x>1</x><y>2</y></point>"));
/// ```
///
/// # Errors
///
/// Returns an error if the value does not serialize to a mapping, has a
/// map key with no string form, or `root_name` is empty.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T, root_name: &str) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, XmlOptions::new(root_name))
}

/// Render any `T: Serialize` with custom options.
///
/// The declaration is included when [`XmlOptions::include_prolog`] is set.
///
/// # Examples
///
/// ```rust
/// use serde_dictxml::{to_string_with_options, XmlOptions};
/// use std::collections::BTreeMap;
///
/// let mut data = BTreeMap::new();
/// data.insert("a", 1);
///
/// let options = XmlOptions::new("root").with_attribute("id", "1").with_prolog(false);
/// let xml = to_string_with_options(&data, options).unwrap();
/// assert_eq!(xml, r#"<root id="1"><a>1</a></root>"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be rendered.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: XmlOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    let renderer = Renderer::new(&value, options)?;
    Ok(renderer.document())
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use serde_dictxml::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value: Value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert!(value.is_object());
/// ```
///
/// # Errors
///
/// Returns an error if a map key has no string form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Render any `T: Serialize` and write the document to `writer`.
///
/// # Examples
///
/// ```rust
/// use serde_dictxml::{dict, to_writer};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &dict!({ "a": 1 }), "root").unwrap();
/// assert!(String::from_utf8(buffer).unwrap().ends_with("<root ><a>1</a></root>"));
/// ```
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T, root_name: &str) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, XmlOptions::new(root_name))
}

/// Render any `T: Serialize` with custom options and write it to `writer`.
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: XmlOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let value = to_value(value)?;
    let renderer = Renderer::new(&value, options)?;
    renderer.write_to(writer, renderer.options().include_prolog)
}
