//! Profile resolution for catalogue animals.
//!
//! Pipeline: Animal identity → shared template → identity patch → AnimalProfile

mod overrides;
mod template;

pub use overrides::*;
pub use template::*;

use crate::models::{Animal, AnimalProfile};
use thiserror::Error;

/// Errors raised while loading override tables. Resolution itself never fails.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate override for animal {0}")]
    DuplicateIdentity(u32),

    #[error("Override for animal {0} has an empty media list")]
    EmptyMedia(u32),
}

pub type ProfileResult<T> = Result<T, ProfileError>;

/// Resolves an animal identity to its full display profile.
#[derive(Debug, Clone)]
pub struct ProfileResolver {
    overrides: OverrideTable,
}

impl Default for ProfileResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileResolver {
    /// Create a resolver over the built-in cattery overrides.
    pub fn new() -> Self {
        Self {
            overrides: OverrideTable::builtin(),
        }
    }

    /// Create a resolver over a custom override table.
    pub fn with_overrides(overrides: OverrideTable) -> Self {
        Self { overrides }
    }

    /// Resolve a profile from identity, name and primary image.
    ///
    /// Unknown identities get the shared template with the primary image
    /// repeated as placeholder media.
    pub fn resolve(&self, animal_id: u32, animal_name: &str, primary_image: &str) -> AnimalProfile {
        let mut profile = template_profile(animal_name, primary_image);
        if let Some(patch) = self.overrides.get(animal_id) {
            patch.apply(&mut profile);
        }
        profile
    }

    /// Resolve a profile for a catalogue record.
    pub fn resolve_animal(&self, animal: &Animal) -> AnimalProfile {
        self.resolve(animal.id, &animal.name, &animal.image)
    }

    /// Get the override table for direct access.
    pub fn overrides(&self) -> &OverrideTable {
        &self.overrides
    }
}
