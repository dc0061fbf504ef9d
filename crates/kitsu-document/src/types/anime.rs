//! Anime-related entities.
//!
//! [`Anime`] is the primary media resource; [`Genre`], [`Casting`],
//! [`Character`] and [`Person`] are the resources it links to. Castings in
//! turn link to a character and a person, which is the deepest relationship
//! chain the API side-loads (`castings → character/person`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::codec::Resolver;
use crate::document::{Linkage, ResourceIdentifier};
use crate::error::Result;
use crate::resource::{Resource, attr};

/// The possible anime show types, convenient for comparisons with
/// [`Anime::show_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimeType {
    /// Televised series.
    Tv,
    /// Special episode.
    Special,
    /// Original video animation.
    Ova,
    /// Original net animation.
    Ona,
    /// Feature film.
    Movie,
    /// Music video.
    Music,
}

impl AnimeType {
    /// The attribute value used by the API for this show type.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimeType::Tv => "TV",
            AnimeType::Special => "special",
            AnimeType::Ova => "OVA",
            AnimeType::Ona => "ONA",
            AnimeType::Movie => "movie",
            AnimeType::Music => "music",
        }
    }
}

/// An anime entry of the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Anime {
    /// The resource id, e.g. `7442`.
    pub id: String,
    /// Unique slug used for page URLs, e.g. `attack-on-titan`.
    pub slug: String,
    /// Show type; can be compared with [`AnimeType`] values.
    pub show_type: String,
    /// Genres this anime belongs to.
    pub genres: Vec<Genre>,
    /// Character castings of this anime.
    pub castings: Vec<Casting>,
}

impl Resource for Anime {
    const KIND: &'static str = "anime";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn attributes(&self) -> Result<Map<String, Value>> {
        let mut attrs = Map::new();
        if !self.slug.is_empty() {
            attrs.insert("slug".to_string(), Value::from(self.slug.clone()));
        }
        if !self.show_type.is_empty() {
            attrs.insert("showType".to_string(), Value::from(self.show_type.clone()));
        }
        Ok(attrs)
    }

    fn set_attribute(&mut self, name: &str, value: &Value) -> Result<()> {
        match name {
            "slug" => self.slug = attr::string(name, value)?,
            "showType" => self.show_type = attr::string(name, value)?,
            _ => {}
        }
        Ok(())
    }

    fn relationships(&self) -> Vec<(&'static str, Linkage)> {
        let mut rels = Vec::new();
        if !self.genres.is_empty() {
            rels.push((
                "genres",
                Linkage::ToMany(self.genres.iter().map(ResourceIdentifier::of).collect()),
            ));
        }
        if !self.castings.is_empty() {
            rels.push((
                "castings",
                Linkage::ToMany(self.castings.iter().map(ResourceIdentifier::of).collect()),
            ));
        }
        rels
    }

    fn set_relationship(
        &mut self,
        name: &str,
        linkage: &Linkage,
        resolver: &Resolver<'_>,
    ) -> Result<()> {
        match name {
            "genres" => self.genres = resolver.many(name, linkage)?,
            "castings" => self.castings = resolver.many(name, linkage)?,
            _ => {}
        }
        Ok(())
    }
}

/// A genre, e.g. sports or sci-fi.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Genre {
    /// The resource id.
    pub id: String,
    /// Genre name, e.g. `Action`.
    pub name: String,
    /// Unique slug, e.g. `action`.
    pub slug: String,
    /// Genre description.
    pub description: String,
}

impl Resource for Genre {
    const KIND: &'static str = "genres";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn attributes(&self) -> Result<Map<String, Value>> {
        let mut attrs = Map::new();
        if !self.name.is_empty() {
            attrs.insert("name".to_string(), Value::from(self.name.clone()));
        }
        if !self.slug.is_empty() {
            attrs.insert("slug".to_string(), Value::from(self.slug.clone()));
        }
        if !self.description.is_empty() {
            attrs.insert(
                "description".to_string(),
                Value::from(self.description.clone()),
            );
        }
        Ok(attrs)
    }

    fn set_attribute(&mut self, name: &str, value: &Value) -> Result<()> {
        match name {
            "name" => self.name = attr::string(name, value)?,
            "slug" => self.slug = attr::string(name, value)?,
            "description" => self.description = attr::string(name, value)?,
            _ => {}
        }
        Ok(())
    }
}

/// The casting of a person for a character of an anime.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Casting {
    /// The resource id.
    pub id: String,
    /// Casting role, e.g. `Director`.
    pub role: String,
    /// Whether this is a voice acting casting.
    pub voice_actor: bool,
    /// Whether the casting is featured.
    pub featured: bool,
    /// Language of the casting, e.g. `Japanese`.
    pub language: String,
    /// The character being cast.
    pub character: Option<Character>,
    /// The person cast for the character.
    pub person: Option<Person>,
}

impl Resource for Casting {
    const KIND: &'static str = "castings";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn attributes(&self) -> Result<Map<String, Value>> {
        let mut attrs = Map::new();
        if !self.role.is_empty() {
            attrs.insert("role".to_string(), Value::from(self.role.clone()));
        }
        if self.voice_actor {
            attrs.insert("voiceActor".to_string(), Value::from(self.voice_actor));
        }
        if self.featured {
            attrs.insert("featured".to_string(), Value::from(self.featured));
        }
        if !self.language.is_empty() {
            attrs.insert("language".to_string(), Value::from(self.language.clone()));
        }
        Ok(attrs)
    }

    fn set_attribute(&mut self, name: &str, value: &Value) -> Result<()> {
        match name {
            "role" => self.role = attr::string(name, value)?,
            "voiceActor" => self.voice_actor = attr::boolean(name, value)?,
            "featured" => self.featured = attr::boolean(name, value)?,
            "language" => self.language = attr::string(name, value)?,
            _ => {}
        }
        Ok(())
    }

    fn relationships(&self) -> Vec<(&'static str, Linkage)> {
        let mut rels = Vec::new();
        if let Some(character) = &self.character {
            rels.push((
                "character",
                Linkage::ToOne(Some(ResourceIdentifier::of(character))),
            ));
        }
        if let Some(person) = &self.person {
            rels.push(("person", Linkage::ToOne(Some(ResourceIdentifier::of(person)))));
        }
        rels
    }

    fn set_relationship(
        &mut self,
        name: &str,
        linkage: &Linkage,
        resolver: &Resolver<'_>,
    ) -> Result<()> {
        match name {
            "character" => self.character = resolver.one(name, linkage)?,
            "person" => self.person = resolver.one(name, linkage)?,
            _ => {}
        }
        Ok(())
    }
}

/// Character images keyed by size.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterImage {
    /// URL of the original image.
    #[serde(default)]
    pub original: String,
}

/// A character appearing in an anime or manga.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Character {
    /// The resource id.
    pub id: String,
    /// Unique slug, e.g. `eren-jaeger`.
    pub slug: String,
    /// Canonical name, e.g. `Eren Jaeger`.
    pub name: String,
    /// MyAnimeList id of the same character.
    pub mal_id: i64,
    /// Character description.
    pub description: String,
    /// Character images.
    pub image: CharacterImage,
}

impl Resource for Character {
    const KIND: &'static str = "characters";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn attributes(&self) -> Result<Map<String, Value>> {
        let mut attrs = Map::new();
        if !self.slug.is_empty() {
            attrs.insert("slug".to_string(), Value::from(self.slug.clone()));
        }
        if !self.name.is_empty() {
            attrs.insert("name".to_string(), Value::from(self.name.clone()));
        }
        if self.mal_id != 0 {
            attrs.insert("malId".to_string(), Value::from(self.mal_id));
        }
        if !self.description.is_empty() {
            attrs.insert(
                "description".to_string(),
                Value::from(self.description.clone()),
            );
        }
        if self.image != CharacterImage::default() {
            attrs.insert(
                "image".to_string(),
                attr::value(Self::KIND, "image", &self.image)?,
            );
        }
        Ok(attrs)
    }

    fn set_attribute(&mut self, name: &str, value: &Value) -> Result<()> {
        match name {
            "slug" => self.slug = attr::string(name, value)?,
            "name" => self.name = attr::string(name, value)?,
            "malId" => self.mal_id = attr::integer(name, value)?,
            "description" => self.description = attr::string(name, value)?,
            "image" => self.image = attr::object(name, value)?,
            _ => {}
        }
        Ok(())
    }
}

/// A person participating in the production of an anime, e.g. a voice
/// actor or a director.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Person {
    /// The resource id.
    pub id: String,
    /// The person's name.
    pub name: String,
    /// MyAnimeList id of the same person.
    pub mal_id: i64,
    /// URL of the person's image.
    pub image: String,
}

impl Resource for Person {
    const KIND: &'static str = "people";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn attributes(&self) -> Result<Map<String, Value>> {
        let mut attrs = Map::new();
        if !self.name.is_empty() {
            attrs.insert("name".to_string(), Value::from(self.name.clone()));
        }
        if self.mal_id != 0 {
            attrs.insert("malId".to_string(), Value::from(self.mal_id));
        }
        if !self.image.is_empty() {
            attrs.insert("image".to_string(), Value::from(self.image.clone()));
        }
        Ok(attrs)
    }

    fn set_attribute(&mut self, name: &str, value: &Value) -> Result<()> {
        match name {
            "name" => self.name = attr::string(name, value)?,
            "malId" => self.mal_id = attr::integer(name, value)?,
            "image" => self.image = attr::string(name, value)?,
            _ => {}
        }
        Ok(())
    }
}
