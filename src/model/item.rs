// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};

// --- RAW RECORDS (source-shaped) ---

/// Dated-event record as served by the local listing.
/// Field names are bit-exact with the source payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    pub details: String,
    pub location: String,
    pub start_time: String,
    pub end_time: String,
    /// Present in the payload but never consulted: response order wins.
    #[serde(default)]
    pub order: Option<i64>,
}

/// One `collection.items[]` entry from the image-search API.
/// Both arrays default to empty when the item omits them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageItem {
    #[serde(default)]
    pub links: Vec<ImageLink>,
    #[serde(default)]
    pub data: Vec<ImageData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageLink {
    pub href: String,
}

/// Embedded metadata entry. Some feeds name the creator field
/// `secondary_creator`, others `photographer`; both land in the same slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageData {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "photographer")]
    pub secondary_creator: Option<String>,
}

/// Top-level search envelope: `{ collection: { items: [...] } }`.
/// A body without these fields is an invalid-shape failure, not an empty hit.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    pub collection: SearchCollection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchCollection {
    pub items: Vec<ImageItem>,
}

/// Record as received from a data source, pre-normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawRecord {
    Event(RawEvent),
    Image(ImageItem),
}

// --- DISPLAY RECORDS (normalized) ---

/// Normalized dated-event card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCard {
    pub name: String,
    pub location: String,
    /// Time-of-day strings, offset suffix already stripped.
    pub start: String,
    pub end: String,
    /// Locale short month name, e.g. "Jan".
    pub month: String,
    /// Locale short weekday name, e.g. "Mon".
    pub day: String,
    /// Day of month.
    pub date: u32,
}

/// Normalized image card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageCard {
    pub href: String,
    pub title: String,
    pub description: String,
    /// Empty when the metadata entry carried neither creator field.
    pub creator: String,
}

/// Normalized record consumed by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayRecord {
    Event(EventCard),
    Image(ImageCard),
}

impl DisplayRecord {
    /// Primary label a renderer would show for this card.
    pub fn label(&self) -> &str {
        match self {
            DisplayRecord::Event(card) => &card.name,
            DisplayRecord::Image(card) => &card.title,
        }
    }

    /// Place or link the card points at.
    pub fn reference(&self) -> &str {
        match self {
            DisplayRecord::Event(card) => &card.location,
            DisplayRecord::Image(card) => &card.href,
        }
    }
}
