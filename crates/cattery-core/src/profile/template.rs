//! Shared profile template.

use crate::models::{AnimalProfile, MediaItem};

/// Placeholder gallery labels used when an animal has no gallery of its own.
const PLACEHOLDER_MEDIA_LABELS: [&str; 3] = ["main photo", "close-up", "playing"];

/// Build the default profile every animal starts from.
///
/// The gallery repeats the primary image once per placeholder label.
pub fn template_profile(animal_name: &str, primary_image: &str) -> AnimalProfile {
    AnimalProfile {
        media: PLACEHOLDER_MEDIA_LABELS
            .iter()
            .map(|label| MediaItem::image(primary_image, format!("{} {}", animal_name, label)))
            .collect(),
        birth_date: "2024".into(),
        weight: "2.1 lbs".into(),
        location: "SnowBrisco Cattery, Ontario, Canada".into(),
        microchip_status: "Yes".into(),
        registration: "CFA Registered".into(),
        parentage: "Champion Sire & Dam".into(),
        health_tests: strings(&["PKD Clear", "HCM Clear", "PRA Clear"]),
        vaccinations: strings(&["FVRCP", "Rabies (age appropriate)"]),
        personality_traits: strings(&["Playful", "Affectionate", "Gentle", "Social", "Curious"]),
        care_notes: strings(&[
            "Regular vet checkups recommended",
            "High-quality kitten food required",
            "Indoor living preferred",
            "Daily play and interaction needed",
        ]),
        special_note: None,
        purchase_price: "$2,500".into(),
        rental_price: "$150/week".into(),
        deposit_amount: "$500".into(),
        included_items: strings(&[
            "Health certificate",
            "Vaccination records",
            "Registration papers",
            "Starter food package",
            "Favorite toy",
            "Care instructions",
        ]),
    }
}

pub(crate) fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
