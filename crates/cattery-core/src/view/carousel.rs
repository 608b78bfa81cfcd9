//! Circular cursor over an animal's gallery.

use serde::{Deserialize, Serialize};

use super::{ViewError, ViewResult};
use crate::models::{MediaItem, MediaKind};

/// How the host should frame the selected item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "frame", rename_all = "snake_case")]
pub enum MediaFrame {
    /// Image in a fixed aspect frame
    Fixed,
    /// Video at natural height, with poster and native transport controls
    Natural {
        poster: Option<String>,
        muted: bool,
        controls: bool,
        autoplay: bool,
    },
}

impl MediaFrame {
    /// Frame for a gallery item.
    pub fn for_item(item: &MediaItem) -> Self {
        match item.kind {
            MediaKind::Image => MediaFrame::Fixed,
            // Muted so browsers allow autoplay
            MediaKind::Video => MediaFrame::Natural {
                poster: item.thumbnail.clone(),
                muted: true,
                controls: true,
                autoplay: true,
            },
        }
    }
}

/// Carousel over a fixed, non-empty media sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaCarousel {
    media: Vec<MediaItem>,
    selected: usize,
}

impl MediaCarousel {
    /// Create a carousel at the first item.
    ///
    /// Returns `None` for an empty sequence.
    pub fn new(media: Vec<MediaItem>) -> Option<Self> {
        if media.is_empty() {
            return None;
        }
        Some(Self { media, selected: 0 })
    }

    /// Create a carousel holding exactly one item.
    pub fn single(item: MediaItem) -> Self {
        Self {
            media: vec![item],
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.media.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.media.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn current(&self) -> &MediaItem {
        &self.media[self.selected]
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.media
    }

    /// Advance one item, wrapping to the start. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        self.move_to((self.selected + 1) % self.len())
    }

    /// Step back one item, wrapping to the end. Returns whether the index changed.
    pub fn prev(&mut self) -> bool {
        let len = self.len();
        self.move_to((self.selected + len - 1) % len)
    }

    /// Jump directly to an item.
    pub fn select(&mut self, index: usize) -> ViewResult<bool> {
        if index >= self.len() {
            return Err(ViewError::MediaIndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.move_to(index))
    }

    /// Arrows are only shown when there is somewhere to go.
    pub fn has_navigation(&self) -> bool {
        self.len() > 1
    }

    /// One-based position label, e.g. "2 / 5".
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.selected + 1, self.len())
    }

    fn move_to(&mut self, index: usize) -> bool {
        let changed = index != self.selected;
        self.selected = index;
        changed
    }
}
