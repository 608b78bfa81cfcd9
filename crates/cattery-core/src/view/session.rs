//! Ephemeral state of one open detail view.

use crate::models::MediaItem;

use super::{MediaCarousel, Screen, ScreenNavigator, ViewResult};

/// UI state that lives from open to close. Nothing here is persisted.
#[derive(Debug, Clone)]
pub struct DetailViewSession {
    /// Fresh per open; hosts key remounts on it
    pub session_id: String,
    /// RFC 3339 open time
    pub opened_at: String,
    carousel: MediaCarousel,
    navigator: ScreenNavigator,
    is_favorited: bool,
    is_video_playing: bool,
}

impl DetailViewSession {
    /// Start a session on the details screen at the first media item.
    pub fn new(carousel: MediaCarousel) -> Self {
        Self {
            session_id: uuid::Uuid::new_v4().to_string(),
            opened_at: chrono::Utc::now().to_rfc3339(),
            carousel,
            navigator: ScreenNavigator::new(),
            is_favorited: false,
            is_video_playing: false,
        }
    }

    pub fn carousel(&self) -> &MediaCarousel {
        &self.carousel
    }

    pub fn navigator(&self) -> &ScreenNavigator {
        &self.navigator
    }

    pub(crate) fn navigator_mut(&mut self) -> &mut ScreenNavigator {
        &mut self.navigator
    }

    pub fn selected_media_index(&self) -> usize {
        self.carousel.selected_index()
    }

    pub fn current_media(&self) -> &MediaItem {
        self.carousel.current()
    }

    pub fn current_screen(&self) -> Screen {
        self.navigator.screen()
    }

    pub fn is_favorited(&self) -> bool {
        self.is_favorited
    }

    pub fn is_video_playing(&self) -> bool {
        self.is_video_playing
    }

    /// Flip the favorite flag and return the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorited = !self.is_favorited;
        self.is_favorited
    }

    pub fn next_media(&mut self) {
        let changed = self.carousel.next();
        self.after_selection(changed);
    }

    pub fn prev_media(&mut self) {
        let changed = self.carousel.prev();
        self.after_selection(changed);
    }

    pub fn select_media(&mut self, index: usize) -> ViewResult<()> {
        let changed = self.carousel.select(index)?;
        self.after_selection(changed);
        Ok(())
    }

    /// Record play/pause from the host's transport controls.
    ///
    /// Ignored unless the selected item is a video. Returns whether it applied.
    pub fn set_video_playing(&mut self, playing: bool) -> bool {
        if !self.current_media().is_video() {
            return false;
        }
        self.is_video_playing = playing;
        true
    }

    /// A newly selected video autoplays; anything else stops playback.
    fn after_selection(&mut self, changed: bool) {
        if changed {
            self.is_video_playing = self.current_media().is_video();
        }
    }
}
