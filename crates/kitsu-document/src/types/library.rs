//! Library entry entities.

use serde_json::{Map, Value};

use crate::codec::Resolver;
use crate::document::{Linkage, ResourceIdentifier};
use crate::error::Result;
use crate::resource::{Resource, attr};
use crate::types::Anime;
use crate::types::User;

/// The possible library entry statuses, convenient for comparisons with
/// [`LibraryEntry::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryEntryStatus {
    /// Currently being watched or read.
    Current,
    /// Planned for later.
    Planned,
    /// Finished.
    Completed,
    /// Paused.
    OnHold,
    /// Abandoned.
    Dropped,
}

impl LibraryEntryStatus {
    /// The attribute value used by the API for this status.
    pub fn as_str(self) -> &'static str {
        match self {
            LibraryEntryStatus::Current => "current",
            LibraryEntryStatus::Planned => "planned",
            LibraryEntryStatus::Completed => "completed",
            LibraryEntryStatus::OnHold => "on_hold",
            LibraryEntryStatus::Dropped => "dropped",
        }
    }
}

/// An entry of a user's media library.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryEntry {
    /// The resource id.
    pub id: String,
    /// Status for the related media; can be compared with
    /// [`LibraryEntryStatus`] values.
    pub status: String,
    /// How many episodes or chapters have been consumed, e.g. 22.
    pub progress: i64,
    /// Whether the media is being reconsumed.
    pub reconsuming: bool,
    /// How many times the media has been reconsumed.
    pub reconsume_count: i64,
    /// Note attached to this entry, e.g. `Very Interesting!`.
    pub notes: String,
    /// Whether this entry is hidden from the public.
    pub private: bool,
    /// User rating out of 5.0, e.g. `3.5`.
    pub rating: String,
    /// When the entry was last updated, e.g. `2016-11-12T03:35:00.064Z`.
    pub updated_at: String,
    /// The user owning this entry.
    pub user: Option<User>,
    /// The media this entry tracks.
    pub media: Option<Anime>,
}

impl Resource for LibraryEntry {
    const KIND: &'static str = "libraryEntries";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    fn attributes(&self) -> Result<Map<String, Value>> {
        let mut attrs = Map::new();
        if !self.status.is_empty() {
            attrs.insert("status".to_string(), Value::from(self.status.clone()));
        }
        if self.progress != 0 {
            attrs.insert("progress".to_string(), Value::from(self.progress));
        }
        if self.reconsuming {
            attrs.insert("reconsuming".to_string(), Value::from(self.reconsuming));
        }
        if self.reconsume_count != 0 {
            attrs.insert(
                "reconsumeCount".to_string(),
                Value::from(self.reconsume_count),
            );
        }
        if !self.notes.is_empty() {
            attrs.insert("notes".to_string(), Value::from(self.notes.clone()));
        }
        if self.private {
            attrs.insert("private".to_string(), Value::from(self.private));
        }
        if !self.rating.is_empty() {
            attrs.insert("rating".to_string(), Value::from(self.rating.clone()));
        }
        if !self.updated_at.is_empty() {
            attrs.insert("updatedAt".to_string(), Value::from(self.updated_at.clone()));
        }
        Ok(attrs)
    }

    fn set_attribute(&mut self, name: &str, value: &Value) -> Result<()> {
        match name {
            "status" => self.status = attr::string(name, value)?,
            "progress" => self.progress = attr::integer(name, value)?,
            "reconsuming" => self.reconsuming = attr::boolean(name, value)?,
            "reconsumeCount" => self.reconsume_count = attr::integer(name, value)?,
            "notes" => self.notes = attr::string(name, value)?,
            "private" => self.private = attr::boolean(name, value)?,
            "rating" => self.rating = attr::string(name, value)?,
            "updatedAt" => self.updated_at = attr::string(name, value)?,
            _ => {}
        }
        Ok(())
    }

    fn relationships(&self) -> Vec<(&'static str, Linkage)> {
        let mut rels = Vec::new();
        if let Some(user) = &self.user {
            rels.push(("user", Linkage::ToOne(Some(ResourceIdentifier::of(user)))));
        }
        if let Some(media) = &self.media {
            rels.push(("media", Linkage::ToOne(Some(ResourceIdentifier::of(media)))));
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
            "user" => self.user = resolver.one(name, linkage)?,
            "media" => self.media = resolver.one(name, linkage)?,
            _ => {}
        }
        Ok(())
    }
}
