//! Per-identity profile overrides.
//!
//! The table maps an animal id to a [`ProfilePatch`]. The built-in table
//! holds the cattery's current litter; additional tables can be loaded from
//! JSON and layered on top:
//!
//! ```json
//! [
//!   { "id": 6, "patch": { "birth_date": "April 2, 2024", "purchase_price": "$2,900" } }
//! ]
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::template::strings;
use super::{ProfileError, ProfileResult};
use crate::models::{MediaItem, ProfilePatch};

/// One entry in a serialized override table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverrideEntry {
    pub id: u32,
    pub patch: ProfilePatch,
}

/// Mapping from animal identity to profile patch. Lookup is by exact id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverrideTable {
    patches: HashMap<u32, ProfilePatch>,
}

impl OverrideTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cattery's built-in overrides.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        table.insert(1, Self::simba());
        table.insert(2, Self::elvis());
        table.insert(3, Self::kiara());
        table.insert(4, Self::eva());
        table.insert(5, Self::hanna());
        table
    }

    /// Load a table from a JSON array of `{ id, patch }` entries.
    pub fn from_json(json: &str) -> ProfileResult<Self> {
        let entries: Vec<OverrideEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    /// Build a table from entries, rejecting repeated ids and empty galleries.
    pub fn from_entries(entries: Vec<OverrideEntry>) -> ProfileResult<Self> {
        let mut seen = HashSet::new();
        let mut table = Self::new();
        for entry in entries {
            if !seen.insert(entry.id) {
                return Err(ProfileError::DuplicateIdentity(entry.id));
            }
            if matches!(&entry.patch.media, Some(media) if media.is_empty()) {
                return Err(ProfileError::EmptyMedia(entry.id));
            }
            table.insert(entry.id, entry.patch);
        }
        Ok(table)
    }

    /// Serialize as a JSON array of entries, ordered by id.
    pub fn to_json(&self) -> ProfileResult<String> {
        let entries: Vec<OverrideEntry> = self
            .ids()
            .into_iter()
            .filter_map(|id| {
                self.patches.get(&id).map(|patch| OverrideEntry {
                    id,
                    patch: patch.clone(),
                })
            })
            .collect();
        Ok(serde_json::to_string_pretty(&entries)?)
    }

    /// Layer another table over this one. Entries in `other` win per id.
    pub fn merge(&mut self, other: OverrideTable) {
        self.patches.extend(other.patches);
    }

    /// Add or replace the patch for an identity.
    pub fn insert(&mut self, id: u32, patch: ProfilePatch) {
        self.patches.insert(id, patch);
    }

    pub fn get(&self, id: u32) -> Option<&ProfilePatch> {
        self.patches.get(&id)
    }

    /// Known identities, ascending.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.patches.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    fn simba() -> ProfilePatch {
        ProfilePatch {
            media: Some(vec![
                MediaItem::image("/simba.jpg", "Simba main photo"),
                MediaItem::image("/simba2.jpg", "Simba portrait"),
                MediaItem::video("/simbavideo.mp4", "/simba3.jpg", "Simba playing video"),
                MediaItem::image("/simba3.jpg", "Simba close-up"),
                MediaItem::image("/simba4.jpg", "Simba relaxing"),
            ]),
            birth_date: Some("March 15, 2024".into()),
            weight: Some("2.3 lbs".into()),
            personality_traits: Some(strings(&[
                "Confident",
                "Playful",
                "Leader",
                "Affectionate",
                "Brave",
            ])),
            special_note: Some(
                "Simba is named after the lion king for his confident and regal personality. \
                 He loves to be the center of attention and is excellent with children."
                    .into(),
            ),
            parentage: Some("Golden Champion Sire x Cream Champion Dam".into()),
            purchase_price: Some("$2,800".into()),
            rental_price: Some("$180/week".into()),
            ..Default::default()
        }
    }

    fn elvis() -> ProfilePatch {
        ProfilePatch {
            birth_date: Some("February 28, 2024".into()),
            weight: Some("2.0 lbs".into()),
            personality_traits: Some(strings(&[
                "Charming",
                "Musical",
                "Social",
                "Gentle",
                "Curious",
            ])),
            special_note: Some(
                "Elvis has a unique blue point coloration and seems to 'sing' when he's happy, \
                 just like his namesake! He's very social and loves meeting new people."
                    .into(),
            ),
            parentage: Some("Blue Point Champion Sire x Seal Point Dam".into()),
            purchase_price: Some("$2,600".into()),
            rental_price: Some("$160/week".into()),
            ..Default::default()
        }
    }

    fn kiara() -> ProfilePatch {
        ProfilePatch {
            birth_date: Some("March 8, 2024".into()),
            weight: Some("1.9 lbs".into()),
            personality_traits: Some(strings(&[
                "Elegant",
                "Independent",
                "Intelligent",
                "Graceful",
                "Observant",
            ])),
            special_note: Some(
                "Kiara is a beautiful silver tabby with perfect fold ears. She's intelligent and \
                 observant, often watching everything with keen interest before joining in."
                    .into(),
            ),
            parentage: Some("Silver Tabby Champion Sire x Scottish Fold Dam".into()),
            purchase_price: Some("$3,200".into()),
            rental_price: Some("$200/week".into()),
            ..Default::default()
        }
    }

    fn eva() -> ProfilePatch {
        ProfilePatch {
            birth_date: Some("February 20, 2024".into()),
            weight: Some("2.2 lbs".into()),
            personality_traits: Some(strings(&[
                "Calm",
                "Nurturing",
                "Gentle",
                "Patient",
                "Loving",
            ])),
            special_note: Some(
                "Eva is a classic blue British Shorthair with the breed's signature round features \
                 and plush coat. She's very calm and patient, perfect for families."
                    .into(),
            ),
            parentage: Some("Blue British Shorthair Champion Sire x British Shorthair Dam".into()),
            purchase_price: Some("$2,400".into()),
            rental_price: Some("$140/week".into()),
            ..Default::default()
        }
    }

    fn hanna() -> ProfilePatch {
        ProfilePatch {
            birth_date: Some("March 12, 2024".into()),
            weight: Some("2.1 lbs".into()),
            personality_traits: Some(strings(&[
                "Sweet",
                "Cuddly",
                "Gentle",
                "Peaceful",
                "Loving",
            ])),
            special_note: Some(
                "Hanna has a beautiful cream coat and the sweetest disposition. She loves to \
                 cuddle and is incredibly gentle, making her perfect for any home."
                    .into(),
            ),
            parentage: Some("Cream Scottish Fold Sire x Golden Scottish Fold Dam".into()),
            purchase_price: Some("$2,700".into()),
            rental_price: Some("$170/week".into()),
            ..Default::default()
        }
    }
}
