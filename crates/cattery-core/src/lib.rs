//! Cattery Core Library
//!
//! Headless state for the adoptable-animal detail view of the cattery site.
//!
//! # Architecture
//!
//! ```text
//!   Catalogue ──► Animal ──► ProfileResolver (template + identity patch)
//!                                   │
//!                                   ▼
//!                        DetailViewController  ◄── user intents
//!                        ┌──────────┴──────────┐
//!                        ▼                     ▼
//!                  MediaCarousel         ScreenNavigator
//!                  (circular)        (Details ⇄ Inquiry)
//!                        └──────────┬──────────┘
//!                                   ▼
//!                          DetailView snapshot ──► host UI
//! ```
//!
//! # Core Principle
//!
//! **Every open starts fresh.** Opening the view, even for the same animal,
//! lands on the details screen at the first media item. Nothing is persisted.
//!
//! # Modules
//!
//! - [`models`]: Domain types (Animal, MediaItem, AnimalProfile, ProfilePatch)
//! - [`profile`]: Profile resolver and identity override table
//! - [`view`]: Carousel, screen navigator, session and controller

pub mod models;
pub mod profile;
pub mod view;

// Re-export commonly used types
pub use models::{
    Animal, AnimalProfile, AnimalStatus, MediaItem, MediaKind, ProfilePatch, StatusTone,
};
pub use profile::{OverrideTable, ProfileResolver};
pub use view::{
    DetailView, DetailViewController, DetailViewSession, MediaCarousel, Screen, ScreenNavigator,
};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum CatteryError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Detail view is not open")]
    NotOpen,

    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Lock error: {0}")]
    LockError(String),
}

impl From<view::ViewError> for CatteryError {
    fn from(e: view::ViewError) -> Self {
        match e {
            view::ViewError::NotOpen => CatteryError::NotOpen,
            other => CatteryError::InvalidInput(other.to_string()),
        }
    }
}

impl From<profile::ProfileError> for CatteryError {
    fn from(e: profile::ProfileError) -> Self {
        CatteryError::ConfigurationError(e.to_string())
    }
}

impl From<serde_json::Error> for CatteryError {
    fn from(e: serde_json::Error) -> Self {
        CatteryError::SerializationError(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for CatteryError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        CatteryError::LockError(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Create a detail view using the built-in animal overrides.
#[uniffi::export]
pub fn new_detail_view() -> Arc<DetailViewHandle> {
    Arc::new(DetailViewHandle {
        controller: Mutex::new(DetailViewController::new()),
        close_listener: Mutex::new(None),
    })
}

/// Create a detail view with extra overrides (JSON) layered over the built-ins.
#[uniffi::export]
pub fn new_detail_view_with_overrides(
    overrides_json: String,
) -> Result<Arc<DetailViewHandle>, CatteryError> {
    let mut table = OverrideTable::builtin();
    table.merge(OverrideTable::from_json(&overrides_json)?);
    Ok(Arc::new(DetailViewHandle {
        controller: Mutex::new(DetailViewController::with_resolver(
            ProfileResolver::with_overrides(table),
        )),
        close_listener: Mutex::new(None),
    }))
}

// =========================================================================
// Callback Interface
// =========================================================================

/// Host callback fired when the visitor dismisses the view.
#[uniffi::export(callback_interface)]
pub trait FfiCloseListener: Send + Sync {
    fn on_close(&self, animal_id: u32);
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe detail view wrapper for FFI.
#[derive(uniffi::Object)]
pub struct DetailViewHandle {
    controller: Mutex<DetailViewController>,
    close_listener: Mutex<Option<Arc<dyn FfiCloseListener>>>,
}

#[uniffi::export]
impl DetailViewHandle {
    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Open the view for an animal.
    pub fn open(&self, animal: FfiAnimal) -> Result<(), CatteryError> {
        let mut controller = self.controller.lock()?;
        controller.open(animal.into());
        Ok(())
    }

    /// Open the view for an animal given as a catalogue JSON record.
    pub fn open_json(&self, animal_json: String) -> Result<(), CatteryError> {
        let animal: Animal = serde_json::from_str(&animal_json)?;
        let mut controller = self.controller.lock()?;
        controller.open(animal);
        Ok(())
    }

    /// Close the view and notify the close listener.
    ///
    /// The listener runs with no lock held, so it may call back into this
    /// handle.
    pub fn close(&self) -> Result<(), CatteryError> {
        let closed = self.controller.lock()?.close();
        let Some(animal_id) = closed else {
            return Ok(());
        };
        let listener = self.close_listener.lock()?.clone();
        if let Some(listener) = listener {
            listener.on_close(animal_id);
        }
        Ok(())
    }

    /// Register the dismissal callback, replacing any previous one.
    pub fn set_close_listener(
        &self,
        listener: Box<dyn FfiCloseListener>,
    ) -> Result<(), CatteryError> {
        *self.close_listener.lock()? = Some(Arc::from(listener));
        Ok(())
    }

    pub fn is_open(&self) -> Result<bool, CatteryError> {
        Ok(self.controller.lock()?.is_open())
    }

    // =========================================================================
    // Intents
    // =========================================================================

    /// Flip the favorite flag and return the new value.
    pub fn toggle_favorite(&self) -> Result<bool, CatteryError> {
        self.controller
            .lock()?
            .toggle_favorite()
            .ok_or(CatteryError::NotOpen)
    }

    /// Move to the inquiry screen. Returns false if the animal is not available.
    pub fn inquire(&self) -> Result<bool, CatteryError> {
        Ok(self.controller.lock()?.inquire())
    }

    /// Return to the details screen.
    pub fn back(&self) -> Result<bool, CatteryError> {
        Ok(self.controller.lock()?.back())
    }

    pub fn select_media(&self, index: u32) -> Result<(), CatteryError> {
        Ok(self.controller.lock()?.select_media(index as usize)?)
    }

    pub fn next_media(&self) -> Result<(), CatteryError> {
        self.controller.lock()?.next_media();
        Ok(())
    }

    pub fn prev_media(&self) -> Result<(), CatteryError> {
        self.controller.lock()?.prev_media();
        Ok(())
    }

    /// Report play/pause from the native video controls.
    pub fn set_video_playing(&self, playing: bool) -> Result<bool, CatteryError> {
        Ok(self.controller.lock()?.set_video_playing(playing))
    }

    // =========================================================================
    // Read Model
    // =========================================================================

    /// Current view, or None when closed.
    pub fn view(&self) -> Result<Option<FfiDetailView>, CatteryError> {
        Ok(self.controller.lock()?.view().map(|v| v.into()))
    }

    /// Current view as JSON, or None when closed.
    pub fn view_json(&self) -> Result<Option<String>, CatteryError> {
        let view = self.controller.lock()?.view();
        Ok(view.map(|v| serde_json::to_string(&v)).transpose()?)
    }

    /// Resolve a profile without opening the view.
    pub fn resolve_profile(
        &self,
        animal_id: u32,
        animal_name: String,
        primary_image: String,
    ) -> Result<FfiAnimalProfile, CatteryError> {
        let controller = self.controller.lock()?;
        let profile = controller
            .resolver()
            .resolve(animal_id, &animal_name, &primary_image);
        Ok(profile.into())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe catalogue animal.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAnimal {
    pub id: u32,
    pub name: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub color: String,
    pub price: String,
    /// Raw catalogue status ("available", "reserved", "sold", ...)
    pub status: String,
    pub image: String,
    pub description: String,
    pub features: Vec<String>,
}

impl From<FfiAnimal> for Animal {
    fn from(animal: FfiAnimal) -> Self {
        Animal {
            id: animal.id,
            name: animal.name,
            breed: animal.breed,
            age: animal.age,
            gender: animal.gender,
            color: animal.color,
            price: animal.price,
            status: AnimalStatus::from(animal.status),
            image: animal.image,
            description: animal.description,
            features: animal.features,
        }
    }
}

impl From<Animal> for FfiAnimal {
    fn from(animal: Animal) -> Self {
        Self {
            id: animal.id,
            name: animal.name,
            breed: animal.breed,
            age: animal.age,
            gender: animal.gender,
            color: animal.color,
            price: animal.price,
            status: animal.status.into(),
            image: animal.image,
            description: animal.description,
            features: animal.features,
        }
    }
}

/// FFI-safe media kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiMediaKind {
    Image,
    Video,
}

impl From<MediaKind> for FfiMediaKind {
    fn from(kind: MediaKind) -> Self {
        match kind {
            MediaKind::Image => FfiMediaKind::Image,
            MediaKind::Video => FfiMediaKind::Video,
        }
    }
}

/// FFI-safe media item.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMediaItem {
    pub kind: FfiMediaKind,
    pub src: String,
    /// Already resolved: falls back to `src`
    pub thumbnail: String,
    pub alt: String,
}

impl From<MediaItem> for FfiMediaItem {
    fn from(item: MediaItem) -> Self {
        Self {
            kind: item.kind.into(),
            thumbnail: item.thumbnail_src().to_string(),
            src: item.src,
            alt: item.alt,
        }
    }
}

/// FFI-safe animal profile.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAnimalProfile {
    pub media: Vec<FfiMediaItem>,
    pub birth_date: String,
    pub weight: String,
    pub location: String,
    pub microchip_status: String,
    pub registration: String,
    pub parentage: String,
    pub health_tests: Vec<String>,
    pub vaccinations: Vec<String>,
    pub personality_traits: Vec<String>,
    pub care_notes: Vec<String>,
    pub special_note: Option<String>,
    pub purchase_price: String,
    pub rental_price: String,
    pub deposit_amount: String,
    pub included_items: Vec<String>,
}

impl From<AnimalProfile> for FfiAnimalProfile {
    fn from(profile: AnimalProfile) -> Self {
        Self {
            media: profile.media.into_iter().map(|m| m.into()).collect(),
            birth_date: profile.birth_date,
            weight: profile.weight,
            location: profile.location,
            microchip_status: profile.microchip_status,
            registration: profile.registration,
            parentage: profile.parentage,
            health_tests: profile.health_tests,
            vaccinations: profile.vaccinations,
            personality_traits: profile.personality_traits,
            care_notes: profile.care_notes,
            special_note: profile.special_note,
            purchase_price: profile.purchase_price,
            rental_price: profile.rental_price,
            deposit_amount: profile.deposit_amount,
            included_items: profile.included_items,
        }
    }
}

/// FFI-safe screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum FfiScreen {
    Details,
    Inquiry,
}

impl From<Screen> for FfiScreen {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Details => FfiScreen::Details,
            Screen::Inquiry => FfiScreen::Inquiry,
        }
    }
}

/// FFI-safe thumbnail.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiThumbnail {
    pub index: u32,
    pub src: String,
    pub alt: String,
    pub is_video: bool,
    pub is_selected: bool,
}

impl From<view::Thumbnail> for FfiThumbnail {
    fn from(thumb: view::Thumbnail) -> Self {
        Self {
            index: thumb.index as u32,
            src: thumb.src,
            alt: thumb.alt,
            is_video: thumb.is_video,
            is_selected: thumb.is_selected,
        }
    }
}

/// FFI-safe inquiry option.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiInquiryOption {
    /// "purchase" or "rental"
    pub kind: String,
    pub title: String,
    pub price: String,
    pub description: String,
    pub action_label: String,
}

impl From<view::InquiryOption> for FfiInquiryOption {
    fn from(option: view::InquiryOption) -> Self {
        let kind = match option.kind {
            view::InquiryKind::Purchase => "purchase",
            view::InquiryKind::Rental => "rental",
        };
        Self {
            kind: kind.to_string(),
            title: option.title,
            price: option.price,
            description: option.description,
            action_label: option.action_label,
        }
    }
}

/// FFI-safe inquiry sheet.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiInquirySheet {
    pub title: String,
    pub subtitle: String,
    pub options: Vec<FfiInquiryOption>,
    pub deposit_amount: String,
    pub deposit_note: String,
    pub included_items: Vec<String>,
}

impl From<view::InquirySheet> for FfiInquirySheet {
    fn from(sheet: view::InquirySheet) -> Self {
        Self {
            title: sheet.title,
            subtitle: sheet.subtitle,
            options: sheet.options.into_iter().map(|o| o.into()).collect(),
            deposit_amount: sheet.deposit_amount,
            deposit_note: sheet.deposit_note,
            included_items: sheet.included_items,
        }
    }
}

/// FFI-safe detail view snapshot.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiDetailView {
    pub session_id: String,
    /// RFC 3339 open time
    pub opened_at: String,
    pub animal: FfiAnimal,
    pub profile: FfiAnimalProfile,
    pub title: String,
    pub status_label: String,
    /// Theme token: "success", "warning" or "muted"
    pub status_tone: String,
    pub screen: FfiScreen,
    pub selected_media_index: u32,
    pub media_count: u32,
    pub counter_label: String,
    pub show_navigation: bool,
    pub current_media: FfiMediaItem,
    /// Natural-height framing (video) instead of the fixed image frame
    pub natural_frame: bool,
    pub thumbnails: Vec<FfiThumbnail>,
    pub is_favorited: bool,
    pub is_video_playing: bool,
    pub inquire_enabled: bool,
    pub inquire_label: String,
    pub inquiry: Option<FfiInquirySheet>,
}

impl From<DetailView> for FfiDetailView {
    fn from(snapshot: DetailView) -> Self {
        Self {
            session_id: snapshot.session_id,
            opened_at: snapshot.opened_at,
            animal: snapshot.animal.into(),
            profile: snapshot.profile.into(),
            title: snapshot.title,
            status_label: snapshot.status_label,
            status_tone: snapshot.status_tone.token().to_string(),
            screen: snapshot.screen.into(),
            selected_media_index: snapshot.selected_media_index as u32,
            media_count: snapshot.media_count as u32,
            counter_label: snapshot.counter_label,
            show_navigation: snapshot.show_navigation,
            current_media: snapshot.current_media.into(),
            natural_frame: matches!(snapshot.frame, view::MediaFrame::Natural { .. }),
            thumbnails: snapshot.thumbnails.into_iter().map(|t| t.into()).collect(),
            is_favorited: snapshot.is_favorited,
            is_video_playing: snapshot.is_video_playing,
            inquire_enabled: snapshot.inquire_action.enabled,
            inquire_label: snapshot.inquire_action.label,
            inquiry: snapshot.inquiry.map(|s| s.into()),
        }
    }
}
