//! Typed entities of the Kitsu media catalog.
//!
//! Each entity implements [`Resource`](crate::Resource), which is the
//! schema the codec consults: the declared resource type, the identifier
//! field and the attribute/relationship mappings. The resource-type strings
//! (`anime`, `genres`, `castings`, `characters`, `people`, `manga`,
//! `users`, `libraryEntries`) match the live API.

mod anime;
mod library;
mod manga;
mod user;

pub use anime::{Anime, AnimeType, Casting, Character, CharacterImage, Genre, Person};
pub use library::{LibraryEntry, LibraryEntryStatus};
pub use manga::{Manga, MangaType};
pub use user::User;
