//! Wire-level JSON:API document types.
//!
//! These structs mirror the `{data, included, relationships, links, meta}`
//! conventions used by the Kitsu API. They are plain serde types; the
//! decoding logic that turns them into entities lives in [`crate::codec`].
//!
//! JSON API docs: <https://jsonapi.org/format/#document-structure>

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The links object of a document.
///
/// Values are kept as raw JSON so that non-string link values, which are
/// malformed per the Kitsu API convention, can be rejected by the offset
/// parser instead of failing the whole document parse.
pub type Links = BTreeMap<String, Value>;

/// A minimal `{type, id}` reference used inside relationships and as the
/// lookup key for side-loaded resources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceIdentifier {
    /// The resource type, e.g. `anime` or `castings`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The resource id.
    pub id: String,
}

impl ResourceIdentifier {
    /// Build the identifier of an entity from its declared mapping.
    pub fn of<T: crate::Resource>(entity: &T) -> Self {
        ResourceIdentifier {
            kind: T::KIND.to_string(),
            id: entity.id().to_string(),
        }
    }
}

/// Resource linkage inside a relationship: a single identifier (or null)
/// for to-one relationships, an identifier array for to-many.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    /// `"data": null` or `"data": {"type": ..., "id": ...}`.
    ToOne(Option<ResourceIdentifier>),
    /// `"data": [{"type": ..., "id": ...}, ...]`.
    ToMany(Vec<ResourceIdentifier>),
}

impl Linkage {
    /// Short description of the linkage shape, used in error messages.
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            Linkage::ToOne(_) => "a single identifier",
            Linkage::ToMany(_) => "an identifier array",
        }
    }
}

/// A relationship object. Kitsu relationship objects may carry `links`
/// and `meta` members alongside `data`; only `data` is meaningful to the
/// codec and the rest is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// The resource linkage, absent when the server sent only links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Linkage>,
}

impl Relationship {
    pub(crate) fn new(linkage: Linkage) -> Self {
        Relationship {
            data: Some(linkage),
        }
    }
}

/// A JSON:API resource object: one entity on the wire.
///
/// `type` is always present; `id` may be empty when encoding an entity
/// that has not been created yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceObject {
    /// The resource type.
    #[serde(rename = "type")]
    pub kind: String,
    /// The resource id, omitted on output when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Attribute values keyed by their JSON names.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
    /// Relationship objects keyed by relationship name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub relationships: BTreeMap<String, Relationship>,
}

/// The outer document, with `data` left raw so its shape (object, array or
/// null) can be inspected before structural decode.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct Document {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub included: Vec<ResourceObject>,
    #[serde(default)]
    pub links: Links,
}

/// A single error in an [`ErrorDocument`].
///
/// JSON API docs: <https://jsonapi.org/format/#error-objects>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// Short, human-readable summary.
    #[serde(default)]
    pub title: String,
    /// Human-readable explanation specific to this occurrence.
    #[serde(default)]
    pub detail: String,
    /// Application-specific error code.
    #[serde(default)]
    pub code: String,
    /// HTTP status code as a string.
    #[serde(default)]
    pub status: String,
}

impl fmt::Display for ErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: error {}: {}({})",
            self.status, self.code, self.title, self.detail
        )
    }
}

/// The error document shape returned by the Kitsu API for failed requests.
///
/// The codec itself never produces this; it is provided for transports
/// that need to report API failures to their callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorDocument {
    /// The errors reported by the API.
    pub errors: Vec<ErrorObject>,
}
