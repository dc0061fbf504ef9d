//! Encoding and decoding of JSON:API documents.
//!
//! The codec translates between typed entities and wire documents. Encoding
//! emits `{"data": ...}` with a single resource object or an array of them;
//! decoding inspects the shape of the raw `data` member (object, array or
//! null) before structural decode, resolves relationships against the
//! side-loaded `included` array, and extracts pagination offsets from the
//! `links` object of collection documents.
//!
//! Each call is a self-contained, stateless transformation: the input is
//! fully buffered, nothing is retained between calls, and concurrent calls
//! on independent readers and writers need no locking.
//!
//! # Example
//!
//! ```
//! use kitsu_document::{codec, types::Anime};
//!
//! let anime = Anime {
//!     id: "7442".to_string(),
//!     slug: "attack-on-titan".to_string(),
//!     ..Default::default()
//! };
//!
//! let mut buf = Vec::new();
//! codec::encode(&mut buf, &anime)?;
//!
//! let decoded: Anime = codec::decode(buf.as_slice())?;
//! assert_eq!(decoded, anime);
//! # Ok::<(), kitsu_document::Error>(())
//! ```

use std::any::type_name;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::io::{Read, Write};

use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::document::{
    Document, Linkage, Relationship, ResourceIdentifier, ResourceObject,
};
use crate::error::{Error, Result};
use crate::offset::{self, PageOffset};
use crate::resource::{Resource, json_kind};

#[derive(Serialize)]
struct Outgoing<T: Serialize> {
    data: T,
}

/// Encode one entity as a single-resource document.
///
/// The output is `{"data": {"type": ..., "id": ..., "attributes": ...,
/// "relationships": ...}}` with empty members omitted. The encoder never
/// writes an `included` section.
pub fn encode<W, T>(mut writer: W, entity: &T) -> Result<()>
where
    W: Write,
    T: Resource,
{
    let data = resource_object(entity)?;
    serde_json::to_writer(&mut writer, &Outgoing { data })?;
    Ok(())
}

/// Encode a sequence of entities as a collection document.
pub fn encode_many<W, T>(mut writer: W, entities: &[T]) -> Result<()>
where
    W: Write,
    T: Resource,
{
    let data = entities
        .iter()
        .map(resource_object)
        .collect::<Result<Vec<_>>>()?;
    serde_json::to_writer(&mut writer, &Outgoing { data })?;
    Ok(())
}

/// Decode a single-resource document into an entity.
///
/// A document whose `data` is `null` yields the entity's zero value with no
/// error. Offsets are definitionally zero for single-resource documents, so
/// none is returned; see [`decode_many`] for collections.
pub fn decode<R, T>(reader: R) -> Result<T>
where
    R: Read,
    T: Resource,
{
    let Document { data, included, .. } = parse_document::<R, T>(reader)?;
    let resolver = Resolver::new(&included);
    match data {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value @ Value::Object(_)) => {
            let object: ResourceObject = serde_json::from_value(value)
                .map_err(|e| Error::decode("data", e.to_string()))?;
            trace!(kind = T::KIND, id = %object.id, "decoding single resource document");
            decode_resource(&object, &resolver)
        }
        Some(Value::Array(_)) => Err(Error::decode(
            "data",
            "expected a single resource object, found an array",
        )),
        Some(other) => Err(Error::decode(
            "data",
            format!("expected an object, array or null, found {}", json_kind(&other)),
        )),
    }
}

/// Decode a collection document into entities plus the pagination offsets
/// extracted from its `links` object.
///
/// A document whose `data` is `null` or absent yields an empty vector with
/// no error. Links that are absent yield a zero [`PageOffset`]; links that
/// are present but unparseable fail the whole decode with
/// [`Error::MalformedLinks`].
pub fn decode_many<R, T>(reader: R) -> Result<(Vec<T>, PageOffset)>
where
    R: Read,
    T: Resource,
{
    let Document { data, included, links } = parse_document::<R, T>(reader)?;
    let resolver = Resolver::new(&included);
    let entities = match data {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.into_iter().enumerate() {
                let object: ResourceObject = serde_json::from_value(item)
                    .map_err(|e| Error::decode(format!("data[{i}]"), e.to_string()))?;
                out.push(decode_resource(&object, &resolver)?);
            }
            out
        }
        Some(Value::Object(_)) => {
            return Err(Error::decode(
                "data",
                "expected a resource collection, found a single object",
            ));
        }
        Some(other) => {
            return Err(Error::decode(
                "data",
                format!("expected an object, array or null, found {}", json_kind(&other)),
            ));
        }
    };
    let page_offset = if links.is_empty() {
        PageOffset::default()
    } else {
        offset::parse_offset(&links)?
    };
    trace!(kind = T::KIND, count = entities.len(), "decoded collection document");
    Ok((entities, page_offset))
}

fn parse_document<R, T>(reader: R) -> Result<Document>
where
    R: Read,
    T: Resource,
{
    if T::KIND.is_empty() {
        return Err(Error::UnsupportedType {
            type_name: type_name::<T>(),
        });
    }
    Ok(serde_json::from_reader(reader)?)
}

fn resource_object<T: Resource>(entity: &T) -> Result<ResourceObject> {
    if T::KIND.is_empty() {
        return Err(Error::UnsupportedType {
            type_name: type_name::<T>(),
        });
    }
    let mut relationships = BTreeMap::new();
    for (name, linkage) in entity.relationships() {
        relationships.insert(name.to_string(), Relationship::new(linkage));
    }
    Ok(ResourceObject {
        kind: T::KIND.to_string(),
        id: entity.id().to_string(),
        attributes: entity.attributes()?,
        relationships,
    })
}

fn decode_resource<T: Resource>(object: &ResourceObject, resolver: &Resolver<'_>) -> Result<T> {
    if object.kind != T::KIND {
        return Err(Error::TargetType {
            expected: T::KIND,
            found: object.kind.clone(),
        });
    }
    let mut entity = T::default();
    entity.set_id(&object.id);
    for (name, value) in &object.attributes {
        entity.set_attribute(name, value)?;
    }
    for (name, relationship) in &object.relationships {
        if let Some(linkage) = &relationship.data {
            entity.set_relationship(name, linkage, resolver)?;
        }
    }
    Ok(entity)
}

/// Materializes related entities from a document's `included` array.
///
/// A resolver is built once per decode call, indexing the side-loaded
/// resources by their `(type, id)` composite key. Entities receive it in
/// [`Resource::set_relationship`] and call [`Resolver::one`] or
/// [`Resolver::many`] according to the declared cardinality of each
/// relationship.
pub struct Resolver<'a> {
    included: HashMap<(&'a str, &'a str), &'a ResourceObject>,
    in_flight: RefCell<HashSet<ResourceIdentifier>>,
}

impl<'a> Resolver<'a> {
    fn new(included: &'a [ResourceObject]) -> Self {
        let mut index = HashMap::with_capacity(included.len());
        for object in included {
            index.insert((object.kind.as_str(), object.id.as_str()), object);
        }
        Resolver {
            included: index,
            in_flight: RefCell::new(HashSet::new()),
        }
    }

    /// Resolve a to-one relationship.
    ///
    /// Returns `None` for null linkage and an [`Error::Decode`] when the
    /// document carries an identifier array instead.
    pub fn one<T: Resource>(&self, name: &str, linkage: &Linkage) -> Result<Option<T>> {
        match linkage {
            Linkage::ToOne(None) => Ok(None),
            Linkage::ToOne(Some(identifier)) => Ok(Some(self.materialize(identifier)?)),
            Linkage::ToMany(_) => Err(cardinality_mismatch(name, "a single identifier", linkage)),
        }
    }

    /// Resolve a to-many relationship.
    ///
    /// Returns an [`Error::Decode`] when the document carries a single
    /// identifier instead of an array.
    pub fn many<T: Resource>(&self, name: &str, linkage: &Linkage) -> Result<Vec<T>> {
        match linkage {
            Linkage::ToMany(identifiers) => identifiers
                .iter()
                .map(|identifier| self.materialize(identifier))
                .collect(),
            Linkage::ToOne(_) => Err(cardinality_mismatch(name, "an identifier array", linkage)),
        }
    }

    fn materialize<T: Resource>(&self, identifier: &ResourceIdentifier) -> Result<T> {
        if identifier.kind != T::KIND {
            return Err(Error::TargetType {
                expected: T::KIND,
                found: identifier.kind.clone(),
            });
        }
        let mut stub = T::default();
        stub.set_id(&identifier.id);
        let key = (identifier.kind.as_str(), identifier.id.as_str());
        let Some(object) = self.included.get(&key).copied() else {
            // Not side-loaded; keep the {type, id} stub.
            return Ok(stub);
        };
        if !self.in_flight.borrow_mut().insert(identifier.clone()) {
            // Already materializing this resource further up the chain.
            // Cyclic included graphs degrade to stubs instead of recursing.
            return Ok(stub);
        }
        let resolved = decode_resource(object, self);
        self.in_flight.borrow_mut().remove(identifier);
        resolved
    }
}

fn cardinality_mismatch(name: &str, expected: &'static str, linkage: &Linkage) -> Error {
    Error::decode(
        format!("data.relationships.{name}"),
        format!("expected {expected}, found {}", linkage.shape()),
    )
}
