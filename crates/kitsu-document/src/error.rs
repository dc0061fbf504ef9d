//! Error types for the kitsu-document crate.
//!
//! Every fallible operation in this crate returns [`Error`] through the
//! crate-level [`Result`] alias. Errors are returned to the immediate caller
//! and never retried internally; malformed input fails fast.
//!
//! # Example
//!
//! ```
//! use kitsu_document::{codec, types::Anime, Error};
//!
//! let doc = r#"{"data":{"type":"manga","id":"1"}}"#;
//! match codec::decode::<_, Anime>(doc.as_bytes()) {
//!     Err(Error::TargetType { expected, found }) => {
//!         assert_eq!(expected, "anime");
//!         assert_eq!(found, "manga");
//!     }
//!     other => panic!("expected a type mismatch, got {:?}", other),
//! }
//! ```

use thiserror::Error;

/// The error type for document encoding, decoding and link parsing.
#[derive(Debug, Error)]
pub enum Error {
    /// The input was not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The value passed to encode or decode does not declare a resource
    /// mapping.
    ///
    /// Raised when a [`Resource`](crate::Resource) implementation declares an
    /// empty `KIND`. Values that implement no mapping at all are rejected at
    /// compile time by the `Resource` bound.
    #[error("cannot encode or decode {type_name}: type declares no resource kind")]
    UnsupportedType {
        /// Name of the offending Rust type.
        type_name: &'static str,
    },

    /// An attribute value could not be represented in JSON.
    #[error("cannot encode attribute {name:?} of {kind:?}: {reason}")]
    Encode {
        /// Resource kind being encoded.
        kind: &'static str,
        /// JSON key of the attribute that failed.
        name: &'static str,
        /// Why serialization failed.
        reason: String,
    },

    /// The document is structurally invalid for the requested target shape.
    ///
    /// Covers a `data` member that is neither object, array nor null, a
    /// collection document decoded into a single-entity target (and the
    /// reverse), attribute values of the wrong JSON type, and relationship
    /// linkage whose shape contradicts the declared cardinality.
    #[error("cannot decode {path}: {reason}")]
    Decode {
        /// Path of the offending member, e.g. `data.attributes.slug`.
        path: String,
        /// Why decoding failed.
        reason: String,
    },

    /// A resource object's `type` does not match the target entity's
    /// declared kind.
    #[error("resource type mismatch: expected {expected:?}, found {found:?}")]
    TargetType {
        /// Kind declared by the target entity.
        expected: &'static str,
        /// Type string found in the document.
        found: String,
    },

    /// A pagination link is present but cannot be parsed.
    ///
    /// Raised for link values that are not strings, URLs that do not parse,
    /// and `page[offset]` parameters that are not base-10 integers. Links
    /// that are absent entirely are not an error.
    #[error("failed to parse {name:?} link: {reason}")]
    MalformedLinks {
        /// Link key, one of `first`, `last`, `prev`, `next`.
        name: String,
        /// Why parsing failed.
        reason: String,
    },
}

impl Error {
    pub(crate) fn decode(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Decode {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn malformed_links(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::MalformedLinks {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for document operations.
pub type Result<T> = std::result::Result<T, Error>;
