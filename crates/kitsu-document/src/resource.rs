//! The entity mapping contract.
//!
//! The Go predecessor of this library mapped struct fields to JSON:API
//! members with reflection over `jsonapi:"..."` tags. Here the mapping is a
//! trait: each entity declares its resource kind, identifier and the
//! attribute/relationship pairs it knows about, and the codec drives those
//! declarations with static dispatch. See [`crate::types`] for the stock
//! Kitsu entities and [`crate::codec`] for the driver.

use serde_json::{Map, Value};

use crate::codec::Resolver;
use crate::document::Linkage;
use crate::error::Result;

/// Declares the JSON:API mapping of an entity.
///
/// Implementations are deliberately mechanical: `attributes` and
/// `set_attribute` enumerate attribute-field/JSON-key pairs, while
/// `relationships` and `set_relationship` enumerate relationship names with
/// their cardinality. Unknown keys on the decode side are ignored, which
/// keeps entities forward compatible with new API attributes.
///
/// # Example
///
/// ```
/// use kitsu_document::{attr, Resource, Result};
/// use serde_json::{Map, Value};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Review {
///     id: String,
///     content: String,
/// }
///
/// impl Resource for Review {
///     const KIND: &'static str = "reviews";
///
///     fn id(&self) -> &str {
///         &self.id
///     }
///
///     fn set_id(&mut self, id: &str) {
///         self.id = id.to_string();
///     }
///
///     fn attributes(&self) -> Result<Map<String, Value>> {
///         let mut attrs = Map::new();
///         if !self.content.is_empty() {
///             attrs.insert("content".to_string(), Value::from(self.content.clone()));
///         }
///         Ok(attrs)
///     }
///
///     fn set_attribute(&mut self, name: &str, value: &Value) -> Result<()> {
///         if name == "content" {
///             self.content = attr::string(name, value)?;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Resource: Default {
    /// The primary resource type, e.g. `"anime"` or `"libraryEntries"`.
    const KIND: &'static str;

    /// The resource id. Empty for entities that have not been created yet.
    fn id(&self) -> &str;

    /// Assign the resource id decoded from a document.
    fn set_id(&mut self, id: &str);

    /// Attribute values keyed by their JSON names, for encoding.
    ///
    /// Fields marked omit-if-empty in the mapping are skipped when they hold
    /// their zero value.
    fn attributes(&self) -> Result<Map<String, Value>>;

    /// Assign one attribute decoded from a document. Unknown names are
    /// ignored.
    fn set_attribute(&mut self, name: &str, value: &Value) -> Result<()>;

    /// Relationship linkage keyed by relationship name, for encoding.
    /// Empty relationships are omitted.
    fn relationships(&self) -> Vec<(&'static str, Linkage)> {
        Vec::new()
    }

    /// Resolve one relationship decoded from a document, using `resolver`
    /// to materialize side-loaded resources. Unknown names are ignored.
    fn set_relationship(
        &mut self,
        name: &str,
        linkage: &Linkage,
        resolver: &Resolver<'_>,
    ) -> Result<()> {
        let _ = (name, linkage, resolver);
        Ok(())
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Guarded attribute conversions used by [`Resource::set_attribute`]
/// implementations.
///
/// A JSON `null` maps to the field's zero value in every conversion; any
/// other shape mismatch is an [`Error::Decode`](crate::Error::Decode)
/// carrying the attribute name.
pub mod attr {
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use serde_json::Value;

    use super::json_kind;
    use crate::error::{Error, Result};

    fn mismatch(name: &str, expected: &str, value: &Value) -> Error {
        Error::decode(
            format!("data.attributes.{name}"),
            format!("expected {expected}, found {}", json_kind(value)),
        )
    }

    /// Decode a string attribute.
    pub fn string(name: &str, value: &Value) -> Result<String> {
        match value {
            Value::Null => Ok(String::new()),
            Value::String(s) => Ok(s.clone()),
            other => Err(mismatch(name, "a string", other)),
        }
    }

    /// Decode an integer attribute.
    pub fn integer(name: &str, value: &Value) -> Result<i64> {
        match value {
            Value::Null => Ok(0),
            Value::Number(n) => n
                .as_i64()
                .ok_or_else(|| mismatch(name, "an integer", value)),
            other => Err(mismatch(name, "an integer", other)),
        }
    }

    /// Decode a boolean attribute.
    pub fn boolean(name: &str, value: &Value) -> Result<bool> {
        match value {
            Value::Null => Ok(false),
            Value::Bool(b) => Ok(*b),
            other => Err(mismatch(name, "a boolean", other)),
        }
    }

    /// Decode a structured attribute, e.g. a nested image object.
    pub fn object<T>(name: &str, value: &Value) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match value {
            Value::Null => Ok(T::default()),
            other => serde_json::from_value(other.clone()).map_err(|e| {
                Error::decode(format!("data.attributes.{name}"), e.to_string())
            }),
        }
    }

    /// Encode a structured attribute value, converting serialization
    /// failures (e.g. a map with non-string keys) into
    /// [`Error::Encode`](crate::Error::Encode).
    pub fn value<T: Serialize>(kind: &'static str, name: &'static str, v: &T) -> Result<Value> {
        serde_json::to_value(v).map_err(|e| Error::Encode {
            kind,
            name,
            reason: e.to_string(),
        })
    }
}
