//! A typed JSON:API document codec for the Kitsu.io media catalog API.
//!
//! This crate translates between the wire-level JSON:API document format
//! (resources, relationships, side-loaded `included` resources, pagination
//! links) and typed in-memory entities. It is transport agnostic: callers
//! bring their own HTTP layer and hand the codec a reader or writer plus a
//! target entity type.
//!
//! # Quick Start
//!
//! ```
//! use kitsu_document::{codec, types::Anime};
//!
//! let body = r#"{"data":{"type":"anime","id":"7442","attributes":{"slug":"attack-on-titan"}}}"#;
//!
//! let anime: Anime = codec::decode(body.as_bytes())?;
//! assert_eq!(anime.id, "7442");
//! assert_eq!(anime.slug, "attack-on-titan");
//! # Ok::<(), kitsu_document::Error>(())
//! ```
//!
//! # Collections and pagination
//!
//! Collection documents decode into a vector plus the [`PageOffset`]
//! extracted from the document's `links` object:
//!
//! ```
//! use kitsu_document::{codec, types::Anime};
//!
//! let body = r#"{
//!     "data": [{"type": "anime", "id": "1"}, {"type": "anime", "id": "2"}],
//!     "links": {"next": "https://kitsu.io/api/edge/anime?page[limit]=10&page[offset]=10"}
//! }"#;
//!
//! let (anime, offset) = codec::decode_many::<_, Anime>(body.as_bytes())?;
//! assert_eq!(anime.len(), 2);
//! assert_eq!(offset.next, 10);
//! # Ok::<(), kitsu_document::Error>(())
//! ```
//!
//! # Relationships
//!
//! Relationships referenced in a document's `included` array are resolved
//! into fully populated entities, one flat lookup at a time; identifiers
//! without a side-loaded counterpart become stubs carrying only the id.
//! Custom entities declare their mapping by implementing [`Resource`].
//!
//! # Scope
//!
//! HTTP transport, authentication, retries, rate limiting and query-string
//! building are deliberately out of scope. The codec is synchronous and
//! stateless; concurrent calls on independent readers and writers are safe
//! without locking.

pub mod codec;
pub mod document;
pub mod error;
pub mod offset;
pub mod resource;
pub mod types;

pub use codec::Resolver;
pub use document::{
    ErrorDocument, ErrorObject, Linkage, Links, Relationship, ResourceIdentifier, ResourceObject,
};
pub use error::{Error, Result};
pub use offset::PageOffset;
pub use resource::{Resource, attr};
