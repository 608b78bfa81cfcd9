//! Read model handed to the rendering layer.

use serde::{Deserialize, Serialize};

use super::{DetailViewSession, MediaFrame, Screen};
use crate::models::{Animal, AnimalProfile, AnimalStatus, MediaItem, StatusTone};

/// Everything the host needs to render an open detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailView {
    pub session_id: String,
    /// RFC 3339 time the view was opened
    pub opened_at: String,
    pub animal: Animal,
    pub profile: AnimalProfile,
    /// Header title, e.g. "Meet Simba"
    pub title: String,
    pub status_label: String,
    pub status_tone: StatusTone,
    pub screen: Screen,
    pub selected_media_index: usize,
    pub media_count: usize,
    /// One-based position, e.g. "2 / 5"
    pub counter_label: String,
    /// Show previous/next arrows
    pub show_navigation: bool,
    pub current_media: MediaItem,
    pub frame: MediaFrame,
    pub thumbnails: Vec<Thumbnail>,
    pub is_favorited: bool,
    pub is_video_playing: bool,
    pub inquire_action: InquireAction,
    /// Present only on the inquiry screen
    pub inquiry: Option<InquirySheet>,
}

impl DetailView {
    /// Assemble the read model from an open session.
    pub fn build(animal: &Animal, profile: &AnimalProfile, session: &DetailViewSession) -> Self {
        let carousel = session.carousel();
        let selected = carousel.selected_index();
        let current = carousel.current().clone();
        let screen = session.current_screen();

        Self {
            session_id: session.session_id.clone(),
            opened_at: session.opened_at.clone(),
            animal: animal.clone(),
            profile: profile.clone(),
            title: format!("Meet {}", animal.name),
            status_label: animal.status.label().to_string(),
            status_tone: animal.status.tone(),
            screen,
            selected_media_index: selected,
            media_count: carousel.len(),
            counter_label: carousel.counter_label(),
            show_navigation: carousel.has_navigation(),
            frame: MediaFrame::for_item(&current),
            current_media: current,
            thumbnails: carousel
                .items()
                .iter()
                .enumerate()
                .map(|(index, item)| Thumbnail {
                    index,
                    src: item.thumbnail_src().to_string(),
                    alt: item.alt.clone(),
                    is_video: item.is_video(),
                    is_selected: index == selected,
                })
                .collect(),
            is_favorited: session.is_favorited(),
            is_video_playing: session.is_video_playing(),
            inquire_action: InquireAction::for_animal(animal),
            inquiry: match screen {
                Screen::Inquiry => Some(InquirySheet::new(animal, profile)),
                Screen::Details => None,
            },
        }
    }
}

/// One entry of the thumbnail strip; indices map 1:1 onto the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thumbnail {
    pub index: usize,
    pub src: String,
    pub alt: String,
    /// Draw a play marker over the thumbnail
    pub is_video: bool,
    pub is_selected: bool,
}

/// The primary call-to-action under the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquireAction {
    pub enabled: bool,
    pub label: String,
}

impl InquireAction {
    pub fn for_animal(animal: &Animal) -> Self {
        let label = match animal.status {
            AnimalStatus::Available => format!("Inquire About {}", animal.name),
            AnimalStatus::Reserved => "Reserved".to_string(),
            AnimalStatus::Sold | AnimalStatus::Other(_) => "Sold".to_string(),
        };
        Self {
            enabled: animal.status.is_available(),
            label,
        }
    }
}

/// Purchase or rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryKind {
    Purchase,
    Rental,
}

/// One option card on the inquiry screen. Choosing it has no transactional effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryOption {
    pub kind: InquiryKind,
    pub title: String,
    pub price: String,
    pub description: String,
    pub action_label: String,
}

/// Content of the inquiry screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquirySheet {
    pub title: String,
    pub subtitle: String,
    pub options: Vec<InquiryOption>,
    pub deposit_amount: String,
    pub deposit_note: String,
    pub included_items: Vec<String>,
}

impl InquirySheet {
    pub fn new(animal: &Animal, profile: &AnimalProfile) -> Self {
        let name = &animal.name;
        let rental_description =
            "Perfect for short-term companionship! Minimum 2 weeks, includes all supplies.";
        Self {
            title: format!("Inquire About {}", name),
            subtitle: "Choose your preferred option".to_string(),
            options: vec![
                InquiryOption {
                    kind: InquiryKind::Purchase,
                    title: format!("Purchase {}", name),
                    price: profile.purchase_price.clone(),
                    description: format!(
                        "Take {} home forever! Includes lifetime support and all paperwork.",
                        name
                    ),
                    action_label: "Choose Purchase".to_string(),
                },
                InquiryOption {
                    kind: InquiryKind::Rental,
                    title: format!("Rent {}", name),
                    price: profile.rental_price.clone(),
                    description: rental_description.to_string(),
                    action_label: "Choose Rental".to_string(),
                },
            ],
            deposit_amount: profile.deposit_amount.clone(),
            deposit_note: "Refundable security deposit".to_string(),
            included_items: profile.included_items.clone(),
        }
    }

    pub fn option(&self, kind: InquiryKind) -> Option<&InquiryOption> {
        self.options.iter().find(|o| o.kind == kind)
    }
}
