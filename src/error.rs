//! Error types for XML rendering.
//!
//! Rendering itself cannot fail once a [`Renderer`](crate::Renderer) exists.
//! Errors come from the edges: building a renderer from unsuitable input,
//! converting arbitrary `Serialize` types into a [`Value`](crate::Value), and
//! writing the finished document to an I/O sink.
//!
//! ## Error Categories
//!
//! - **Invalid input**: the top-level value is not a mapping
//! - **Invalid keys**: a serde map key has no string form
//! - **Invalid root name**: the root element name is empty
//! - **I/O errors**: writing the document failed
//!
//! ## Examples
//!
//! ```rust
//! use serde_dictxml::{Error, Renderer, Value, XmlOptions};
//!
//! let bare = Value::from("bare");
//! let result = Renderer::new(&bare, XmlOptions::new("root"));
//! assert!(matches!(result, Err(Error::InvalidInput { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while producing XML.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// IO error during writing
    #[error("IO error: {0}")]
    Io(String),

    /// The document body was not a mapping
    #[error("Invalid input: expected {expected}, found {found}\nHelp: the root element needs a mapping as its body")]
    InvalidInput { expected: String, found: String },

    /// A map key with no string form
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The root element name is unusable
    #[error("Invalid root name: {0}")]
    InvalidRootName(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid input error for a top-level value that is not a mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dictxml::Error;
    ///
    /// let err = Error::invalid_input("mapping", "array");
    /// assert!(err.to_string().contains("found array"));
    /// ```
    pub fn invalid_input(expected: &str, found: &str) -> Self {
        Error::InvalidInput {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an invalid key error for map keys that cannot become tag names.
    pub fn invalid_key(msg: &str) -> Self {
        Error::InvalidKey(msg.to_string())
    }

    /// Creates an invalid root name error.
    pub fn invalid_root_name(msg: &str) -> Self {
        Error::InvalidRootName(msg.to_string())
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_dictxml::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
