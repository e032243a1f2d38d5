//! Library items: named, reusable bundles of elements.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::element::Element;

/// Identifier of a saved library item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LibraryItemId(String);

impl LibraryItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibraryItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LibraryItemId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for LibraryItemId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Whether an item lives only in the user's library or was published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryItemStatus {
    Unpublished,
    Published,
}

impl Default for LibraryItemStatus {
    fn default() -> Self {
        Self::Unpublished
    }
}

impl fmt::Display for LibraryItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unpublished => write!(f, "unpublished"),
            Self::Published => write!(f, "published"),
        }
    }
}

/// A saved library item.
///
/// `id` never changes after creation and `elements` is an immutable snapshot
/// as far as the panel is concerned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryItem {
    pub id: LibraryItemId,
    #[serde(default)]
    pub status: LibraryItemStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "Utc::now")]
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl LibraryItem {
    pub fn new(
        id: impl Into<LibraryItemId>,
        status: LibraryItemStatus,
        elements: Vec<Element>,
    ) -> Self {
        Self {
            id: id.into(),
            status,
            name: None,
            created: Utc::now(),
            elements,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_published(&self) -> bool {
        self.status == LibraryItemStatus::Published
    }
}

/// Reference to an entry shown in the panel.
///
/// The pending entry stands for canvas elements not yet saved to the
/// catalog; it has no stable identity and can never be selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemRef {
    Pending,
    Item(LibraryItemId),
}

impl ItemRef {
    pub fn item_id(&self) -> Option<&LibraryItemId> {
        match self {
            Self::Pending => None,
            Self::Item(id) => Some(id),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

impl From<LibraryItemId> for ItemRef {
    fn from(id: LibraryItemId) -> Self {
        Self::Item(id)
    }
}

impl From<&str> for ItemRef {
    fn from(id: &str) -> Self {
        Self::Item(LibraryItemId::from(id))
    }
}

impl From<Option<LibraryItemId>> for ItemRef {
    fn from(id: Option<LibraryItemId>) -> Self {
        id.map_or(Self::Pending, Self::Item)
    }
}
