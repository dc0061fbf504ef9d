//! Shared document fixtures for codec tests.
//!
//! The resource-type strings and attribute names match the live Kitsu API;
//! pagination links carry the percent-encoded `page%5Boffset%5D` form the
//! API actually returns.

/// A collection of anime where the first entry's castings are side-loaded,
/// and the casting's own character and person are side-loaded too.
#[allow(dead_code)] // Not all test files use this
pub fn anime_with_castings() -> &'static str {
    r#"{
        "data": [{
            "type": "anime",
            "id": "7442",
            "attributes": {"slug": "attack-on-titan"},
            "relationships": {
                "castings": {"data": [{"type": "castings", "id": "47"}]}
            }
        }],
        "included": [
            {
                "type": "castings",
                "id": "47",
                "attributes": {
                    "role": "Voice Actor",
                    "voiceActor": true,
                    "featured": true,
                    "language": "Japanese"
                },
                "relationships": {
                    "character": {"data": {"type": "characters", "id": "2"}},
                    "person": {"data": {"type": "people", "id": "47"}}
                }
            },
            {
                "type": "characters",
                "id": "2",
                "attributes": {
                    "slug": "eren-jaeger",
                    "name": "Eren Jaeger",
                    "malId": 40882,
                    "image": {"original": "https://media.kitsu.io/characters/images/2/original.jpg"}
                }
            },
            {
                "type": "people",
                "id": "47",
                "attributes": {"name": "Yuki Kaji", "malId": 12811}
            }
        ],
        "links": {
            "first": "https://kitsu.io/api/edge/anime?page%5Blimit%5D=50&page%5Boffset%5D=0",
            "next": "https://kitsu.io/api/edge/anime?page%5Blimit%5D=50&page%5Boffset%5D=50",
            "last": "https://kitsu.io/api/edge/anime?page%5Blimit%5D=50&page%5Boffset%5D=498"
        }
    }"#
}

/// A single library entry with null-valued attributes and a side-loaded
/// user, as returned by `GET /library-entries/{id}?include=user`.
#[allow(dead_code)] // Not all test files use this
pub fn library_entry_with_user() -> &'static str {
    r#"{
        "data": {
            "id": "5269457",
            "type": "libraryEntries",
            "attributes": {
                "status": "dropped",
                "progress": 3,
                "volumesOwned": 0,
                "reconsuming": false,
                "reconsumeCount": 0,
                "notes": null,
                "private": false,
                "updatedAt": "2014-05-14T11:54:26.310Z",
                "startedAt": null,
                "finishedAt": null,
                "rating": "0.0",
                "ratingTwenty": null
            },
            "relationships": {
                "user": {
                    "links": {
                        "self": "https://kitsu.io/api/edge/library-entries/5269457/relationships/user",
                        "related": "https://kitsu.io/api/edge/library-entries/5269457/user"
                    },
                    "data": {"type": "users", "id": "43133"}
                }
            }
        },
        "included": [
            {
                "id": "43133",
                "type": "users",
                "attributes": {"name": "predator914"}
            }
        ]
    }"#
}
