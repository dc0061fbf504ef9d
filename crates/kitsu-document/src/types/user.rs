//! User entities.

use serde_json::{Map, Value};

use crate::codec::Resolver;
use crate::document::{Linkage, ResourceIdentifier};
use crate::error::Result;
use crate::resource::{Resource, attr};
use crate::types::Character;
use crate::types::LibraryEntry;

/// A Kitsu user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct User {
    /// The resource id, e.g. `29745`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short self description.
    pub about: String,
    /// Seconds of anime watched.
    pub life_spent_on_anime: i64,
    /// The user's declared favorite character.
    pub waifu: Option<Character>,
    /// The user's library entries.
    pub library_entries: Vec<LibraryEntry>,
}

impl Resource for User {
    const KIND: &'static str = "users";

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
        if !self.about.is_empty() {
            attrs.insert("about".to_string(), Value::from(self.about.clone()));
        }
        if self.life_spent_on_anime != 0 {
            attrs.insert(
                "lifeSpentOnAnime".to_string(),
                Value::from(self.life_spent_on_anime),
            );
        }
        Ok(attrs)
    }

    fn set_attribute(&mut self, name: &str, value: &Value) -> Result<()> {
        match name {
            "name" => self.name = attr::string(name, value)?,
            "about" => self.about = attr::string(name, value)?,
            "lifeSpentOnAnime" => self.life_spent_on_anime = attr::integer(name, value)?,
            _ => {}
        }
        Ok(())
    }

    fn relationships(&self) -> Vec<(&'static str, Linkage)> {
        let mut rels = Vec::new();
        if let Some(waifu) = &self.waifu {
            rels.push(("waifu", Linkage::ToOne(Some(ResourceIdentifier::of(waifu)))));
        }
        if !self.library_entries.is_empty() {
            rels.push((
                "libraryEntries",
                Linkage::ToMany(
                    self.library_entries
                        .iter()
                        .map(ResourceIdentifier::of)
                        .collect(),
                ),
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
            "waifu" => self.waifu = resolver.one(name, linkage)?,
            "libraryEntries" => self.library_entries = resolver.many(name, linkage)?,
            _ => {}
        }
        Ok(())
    }
}
