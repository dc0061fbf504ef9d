//! Tests for decoding JSON:API documents into typed entities.

mod common;

use kitsu_document::types::{Anime, Genre, LibraryEntry, LibraryEntryStatus, User};
use kitsu_document::{Error, PageOffset, codec};

#[test]
fn test_decode_single() {
    let body = r#"{"data":{"type":"anime","id":"7442","attributes":{"slug":"attack-on-titan"}}}"#;

    let anime: Anime = codec::decode(body.as_bytes()).unwrap();

    assert_eq!(
        anime,
        Anime {
            id: "7442".to_string(),
            slug: "attack-on-titan".to_string(),
            ..Default::default()
        }
    );
}

#[test]
fn test_decode_single_null_data() {
    let body = r#"{"data":null}"#;

    let anime: Anime = codec::decode(body.as_bytes()).unwrap();

    assert_eq!(anime, Anime::default());
}

#[test]
fn test_decode_many() {
    let body = r#"{
        "data": [
            {"type": "anime", "id": "1", "attributes": {"slug": "foo"}},
            {"type": "anime", "id": "2", "attributes": {"slug": "bar"}}
        ]
    }"#;

    let (anime, offset) = codec::decode_many::<_, Anime>(body.as_bytes()).unwrap();

    assert_eq!(anime.len(), 2);
    assert_eq!(anime[0].id, "1");
    assert_eq!(anime[0].slug, "foo");
    assert_eq!(anime[1].id, "2");
    assert_eq!(anime[1].slug, "bar");
    assert_eq!(offset, PageOffset::default());
}

#[test]
fn test_decode_many_with_links() {
    let body = r#"{
        "data": [{"type": "anime", "id": "1"}, {"type": "anime", "id": "2"}],
        "links": {
            "first": "http://somesite.com/movies?page[limit]=50&page[offset]=50",
            "prev": "http://somesite.com/movies?page[limit]=50&page[offset]=0",
            "next": "http://somesite.com/movies?page[limit]=50&page[offset]=100",
            "last": "http://somesite.com/movies?page[limit]=50&page[offset]=500"
        }
    }"#;

    let (anime, offset) = codec::decode_many::<_, Anime>(body.as_bytes()).unwrap();

    assert_eq!(anime.len(), 2);
    assert_eq!(
        offset,
        PageOffset {
            first: 50,
            last: 500,
            prev: 0,
            next: 100
        }
    );
}

#[test]
fn test_decode_many_null_data() {
    let body = r#"{"data":null}"#;

    let (anime, offset) = codec::decode_many::<_, Anime>(body.as_bytes()).unwrap();

    assert!(anime.is_empty());
    assert_eq!(offset, PageOffset::default());
}

#[test]
fn test_decode_many_bad_links() {
    let body = r#"{"data":[],"links":{"first":":"}}"#;

    let err = codec::decode_many::<_, Anime>(body.as_bytes()).unwrap_err();

    assert!(matches!(&err, Error::MalformedLinks { name, .. } if name == "first"));
}

#[test]
fn test_decode_single_into_collection() {
    let body = r#"{"data":{"type":"anime","id":"1"}}"#;

    let err = codec::decode_many::<_, Anime>(body.as_bytes()).unwrap_err();

    assert!(matches!(&err, Error::Decode { path, .. } if path == "data"));
}

#[test]
fn test_decode_collection_into_single() {
    let body = r#"{"data":[{"type":"anime","id":"1"}]}"#;

    let err = codec::decode::<_, Anime>(body.as_bytes()).unwrap_err();

    assert!(matches!(&err, Error::Decode { path, .. } if path == "data"));
}

#[test]
fn test_decode_scalar_data() {
    let body = r#"{"data":42}"#;

    let err = codec::decode::<_, Anime>(body.as_bytes()).unwrap_err();

    assert!(matches!(&err, Error::Decode { path, .. } if path == "data"));
}

#[test]
fn test_decode_invalid_json() {
    let body = r#"{"data""#;

    let err = codec::decode::<_, Anime>(body.as_bytes()).unwrap_err();

    assert!(matches!(err, Error::Json(_)));
}

#[test]
fn test_decode_type_mismatch() {
    let body = r#"{"data":{"type":"manga","id":"1"}}"#;

    let err = codec::decode::<_, Anime>(body.as_bytes()).unwrap_err();

    match err {
        Error::TargetType { expected, found } => {
            assert_eq!(expected, "anime");
            assert_eq!(found, "manga");
        }
        other => panic!("expected TargetType, got {other:?}"),
    }
}

#[test]
fn test_decode_attribute_type_mismatch() {
    let body = r#"{"data":{"type":"anime","id":"1","attributes":{"slug":42}}}"#;

    let err = codec::decode::<_, Anime>(body.as_bytes()).unwrap_err();

    assert!(matches!(&err, Error::Decode { path, .. } if path == "data.attributes.slug"));
}

#[test]
fn test_decode_castings_through_included() {
    let (anime, offset) =
        codec::decode_many::<_, Anime>(common::anime_with_castings().as_bytes()).unwrap();

    assert_eq!(anime.len(), 1);
    assert_eq!(anime[0].slug, "attack-on-titan");
    assert_eq!(
        offset,
        PageOffset {
            first: 0,
            last: 498,
            prev: 0,
            next: 50
        }
    );

    let castings = &anime[0].castings;
    assert_eq!(castings.len(), 1);
    assert_eq!(castings[0].id, "47");
    assert_eq!(castings[0].role, "Voice Actor");
    assert!(castings[0].voice_actor);
    assert_eq!(castings[0].language, "Japanese");

    // Two levels of relationship resolution through included.
    let character = castings[0].character.as_ref().unwrap();
    assert_eq!(character.name, "Eren Jaeger");
    assert_eq!(character.mal_id, 40882);
    assert_eq!(
        character.image.original,
        "https://media.kitsu.io/characters/images/2/original.jpg"
    );
    let person = castings[0].person.as_ref().unwrap();
    assert_eq!(person.name, "Yuki Kaji");
}

#[test]
fn test_decode_unresolved_relationship_is_stub() {
    let body = r#"{
        "data": {
            "type": "anime",
            "id": "7442",
            "relationships": {
                "genres": {"data": [{"type": "genres", "id": "99"}]}
            }
        }
    }"#;

    let anime: Anime = codec::decode(body.as_bytes()).unwrap();

    assert_eq!(
        anime.genres,
        vec![Genre {
            id: "99".to_string(),
            ..Default::default()
        }]
    );
}

#[test]
fn test_decode_library_entry_with_included_user() {
    let entry: LibraryEntry =
        codec::decode(common::library_entry_with_user().as_bytes()).unwrap();

    assert_eq!(
        entry,
        LibraryEntry {
            id: "5269457".to_string(),
            status: LibraryEntryStatus::Dropped.as_str().to_string(),
            progress: 3,
            updated_at: "2014-05-14T11:54:26.310Z".to_string(),
            rating: "0.0".to_string(),
            user: Some(User {
                id: "43133".to_string(),
                name: "predator914".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        }
    );
}

#[test]
fn test_decode_cardinality_mismatch() {
    // castings is declared to-many but the document carries a single
    // identifier
    let body = r#"{
        "data": {
            "type": "anime",
            "id": "1",
            "relationships": {
                "castings": {"data": {"type": "castings", "id": "47"}}
            }
        }
    }"#;

    let err = codec::decode::<_, Anime>(body.as_bytes()).unwrap_err();

    assert!(
        matches!(&err, Error::Decode { path, .. } if path == "data.relationships.castings")
    );
}

#[test]
fn test_decode_relationship_without_data() {
    // Relationship objects that carry only links are ignored.
    let body = r#"{
        "data": {
            "type": "anime",
            "id": "1",
            "relationships": {
                "genres": {
                    "links": {"related": "https://kitsu.io/api/edge/anime/1/genres"}
                }
            }
        }
    }"#;

    let anime: Anime = codec::decode(body.as_bytes()).unwrap();

    assert!(anime.genres.is_empty());
}

#[test]
fn test_decode_cyclic_included_degrades_to_stub() {
    // users/1 and libraryEntries/2 reference each other through included;
    // resolution must terminate with a stub instead of recursing forever.
    let body = r#"{
        "data": {
            "type": "users",
            "id": "1",
            "attributes": {"name": "predator914"},
            "relationships": {
                "libraryEntries": {"data": [{"type": "libraryEntries", "id": "2"}]}
            }
        },
        "included": [
            {
                "type": "libraryEntries",
                "id": "2",
                "attributes": {"status": "current"},
                "relationships": {
                    "user": {"data": {"type": "users", "id": "1"}}
                }
            },
            {
                "type": "users",
                "id": "1",
                "attributes": {"name": "predator914"},
                "relationships": {
                    "libraryEntries": {"data": [{"type": "libraryEntries", "id": "2"}]}
                }
            }
        ]
    }"#;

    let user: User = codec::decode(body.as_bytes()).unwrap();

    assert_eq!(user.library_entries.len(), 1);
    let entry = &user.library_entries[0];
    assert_eq!(entry.status, "current");
    let inner_user = entry.user.as_ref().unwrap();
    assert_eq!(inner_user.name, "predator914");
    // The chain bottoms out in a stub for the entry already being resolved.
    assert_eq!(inner_user.library_entries[0].id, "2");
    assert_eq!(inner_user.library_entries[0].status, "");
}
