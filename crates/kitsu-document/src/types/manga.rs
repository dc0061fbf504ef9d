//! Manga-related entities.

use serde_json::{Map, Value};

use crate::error::Result;
use crate::resource::{Resource, attr};

/// The possible manga types, convenient for comparisons with
/// [`Manga::manga_type`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MangaType {
    Drama,
    Novel,
    Manhua,
    Oneshot,
    Doujin,
}

impl MangaType {
    /// The attribute value used by the API for this manga type.
    pub fn as_str(self) -> &'static str {
        match self {
            MangaType::Drama => "drama",
            MangaType::Novel => "novel",
            MangaType::Manhua => "manhua",
            MangaType::Oneshot => "oneshot",
            MangaType::Doujin => "doujin",
        }
    }
}

/// A manga entry of the catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manga {
    /// The resource id.
    pub id: String,
    /// Unique slug used for page URLs.
    pub slug: String,
    /// Manga type; can be compared with [`MangaType`] values.
    pub manga_type: String,
}

impl Resource for Manga {
    const KIND: &'static str = "manga";

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
        if !self.manga_type.is_empty() {
            attrs.insert("mangaType".to_string(), Value::from(self.manga_type.clone()));
        }
        Ok(attrs)
    }

    fn set_attribute(&mut self, name: &str, value: &Value) -> Result<()> {
        match name {
            "slug" => self.slug = attr::string(name, value)?,
            "mangaType" => self.manga_type = attr::string(name, value)?,
            _ => {}
        }
        Ok(())
    }
}
