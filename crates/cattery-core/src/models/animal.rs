//! Catalogue animal records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Availability status of a catalogue animal.
///
/// Catalogue records carry the status as a lower-case string. Anything other
/// than the three known values is kept verbatim in [`AnimalStatus::Other`]
/// so it can still be displayed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum AnimalStatus {
    /// Open for inquiries
    Available,
    /// Held for another family
    Reserved,
    /// Already homed
    Sold,
    /// Unrecognized status string
    Other(String),
}

impl AnimalStatus {
    /// Parse a raw status string. Never fails.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "available" => AnimalStatus::Available,
            "reserved" => AnimalStatus::Reserved,
            "sold" => AnimalStatus::Sold,
            other => AnimalStatus::Other(other.to_string()),
        }
    }

    /// The raw catalogue string for this status.
    pub fn as_str(&self) -> &str {
        match self {
            AnimalStatus::Available => "available",
            AnimalStatus::Reserved => "reserved",
            AnimalStatus::Sold => "sold",
            AnimalStatus::Other(raw) => raw,
        }
    }

    /// Only available animals accept inquiries.
    pub fn is_available(&self) -> bool {
        matches!(self, AnimalStatus::Available)
    }

    /// Badge text shown next to the animal's name.
    pub fn label(&self) -> &str {
        match self {
            AnimalStatus::Available => "Available Now",
            AnimalStatus::Reserved => "Reserved",
            AnimalStatus::Sold => "Sold",
            AnimalStatus::Other(raw) => raw,
        }
    }

    /// Emphasis tone used to color the status badge.
    pub fn tone(&self) -> StatusTone {
        match self {
            AnimalStatus::Available => StatusTone::Success,
            AnimalStatus::Reserved => StatusTone::Warning,
            AnimalStatus::Sold | AnimalStatus::Other(_) => StatusTone::Muted,
        }
    }
}

impl From<String> for AnimalStatus {
    fn from(raw: String) -> Self {
        AnimalStatus::parse(&raw)
    }
}

impl From<&str> for AnimalStatus {
    fn from(raw: &str) -> Self {
        AnimalStatus::parse(raw)
    }
}

impl From<AnimalStatus> for String {
    fn from(status: AnimalStatus) -> Self {
        match status {
            AnimalStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AnimalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme color token for a status badge. The host maps tokens to colors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum StatusTone {
    Success,
    Warning,
    Muted,
}

impl StatusTone {
    /// Theme token name.
    pub fn token(&self) -> &'static str {
        match self {
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Muted => "muted",
        }
    }
}

/// A catalogue entry for one adoptable animal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Animal {
    /// Unique catalogue identity
    pub id: u32,
    pub name: String,
    pub breed: String,
    /// Display age (e.g., "12 weeks")
    pub age: String,
    pub gender: String,
    pub color: String,
    /// Pre-formatted display price (e.g., "$2,500")
    pub price: String,
    pub status: AnimalStatus,
    /// Primary image, used as fallback media
    pub image: String,
    pub description: String,
    /// Highlight bullets shown on the catalogue card
    #[serde(default)]
    pub features: Vec<String>,
}

impl Animal {
    /// Create an animal with the required identity fields; display fields start empty.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        status: AnimalStatus,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            breed: String::new(),
            age: String::new(),
            gender: String::new(),
            color: String::new(),
            price: String::new(),
            status,
            image: image.into(),
            description: String::new(),
            features: Vec::new(),
        }
    }
}
