//! Derived animal profiles and per-identity patches.

use serde::{Deserialize, Serialize};

use super::media::MediaItem;

/// Full display profile for an animal (template merged with overrides).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnimalProfile {
    /// Gallery in display order, never empty
    pub media: Vec<MediaItem>,
    pub birth_date: String,
    pub weight: String,
    pub location: String,
    pub microchip_status: String,
    pub registration: String,
    /// Sire and dam description
    pub parentage: String,
    /// Genetic screening results, duplicate-free in display order
    pub health_tests: Vec<String>,
    pub vaccinations: Vec<String>,
    pub personality_traits: Vec<String>,
    pub care_notes: Vec<String>,
    pub special_note: Option<String>,
    pub purchase_price: String,
    pub rental_price: String,
    pub deposit_amount: String,
    /// What comes home with the animal
    pub included_items: Vec<String>,
}

/// Partial profile keyed to one identity.
///
/// Every field that is set replaces the corresponding profile field
/// wholesale. Lists are never merged element-wise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<MediaItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub microchip_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_tests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vaccinations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality_traits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_notes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deposit_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub included_items: Option<Vec<String>>,
}

impl ProfilePatch {
    /// Check if this patch overrides nothing.
    pub fn is_empty(&self) -> bool {
        *self == ProfilePatch::default()
    }

    /// Apply this patch over a base profile.
    pub fn apply(&self, base: &mut AnimalProfile) {
        if let Some(media) = &self.media {
            // Keep the non-empty gallery invariant even for hand-built patches
            if !media.is_empty() {
                base.media = media.clone();
            }
        }
        replace(&mut base.birth_date, &self.birth_date);
        replace(&mut base.weight, &self.weight);
        replace(&mut base.location, &self.location);
        replace(&mut base.microchip_status, &self.microchip_status);
        replace(&mut base.registration, &self.registration);
        replace(&mut base.parentage, &self.parentage);
        if let Some(tests) = &self.health_tests {
            base.health_tests = dedup_in_order(tests);
        }
        replace(&mut base.vaccinations, &self.vaccinations);
        replace(&mut base.personality_traits, &self.personality_traits);
        replace(&mut base.care_notes, &self.care_notes);
        if let Some(note) = &self.special_note {
            base.special_note = Some(note.clone());
        }
        replace(&mut base.purchase_price, &self.purchase_price);
        replace(&mut base.rental_price, &self.rental_price);
        replace(&mut base.deposit_amount, &self.deposit_amount);
        replace(&mut base.included_items, &self.included_items);
    }
}

fn replace<T: Clone>(field: &mut T, value: &Option<T>) {
    if let Some(v) = value {
        *field = v.clone();
    }
}

fn dedup_in_order(values: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(v) {
            out.push(v.clone());
        }
    }
    out
}
