//! Detail view controller: one open slot, last open wins.

use log::{debug, warn};

use super::{DetailView, DetailViewSession, MediaCarousel, ViewError, ViewResult};
use crate::models::{Animal, AnimalProfile, MediaItem};
use crate::profile::ProfileResolver;

/// The animal, its resolved profile and the session for the open view.
struct OpenDetail {
    animal: Animal,
    profile: AnimalProfile,
    session: DetailViewSession,
}

/// Composes profile resolution, the media carousel and screen navigation
/// into the visible detail view.
pub struct DetailViewController {
    resolver: ProfileResolver,
    open: Option<OpenDetail>,
}

impl Default for DetailViewController {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailViewController {
    /// Create a closed controller using the built-in overrides.
    pub fn new() -> Self {
        Self::with_resolver(ProfileResolver::new())
    }

    /// Create a closed controller with a custom resolver.
    pub fn with_resolver(resolver: ProfileResolver) -> Self {
        Self {
            resolver,
            open: None,
        }
    }

    /// Open the view for an animal, replacing any open session.
    ///
    /// Always starts on the details screen at the first media item, even when
    /// re-opening the same animal.
    pub fn open(&mut self, animal: Animal) {
        let profile = self.resolver.resolve_animal(&animal);
        let carousel = MediaCarousel::new(profile.media.clone()).unwrap_or_else(|| {
            MediaCarousel::single(MediaItem::image(animal.image.clone(), animal.name.clone()))
        });
        let session = DetailViewSession::new(carousel);

        debug!(
            "detail-view: open animal={} status={} media={} session={}",
            animal.id,
            animal.status,
            session.carousel().len(),
            session.session_id
        );

        self.open = Some(OpenDetail {
            animal,
            profile,
            session,
        });
    }

    /// Discard the open session.
    ///
    /// Returns the closed animal's id, or `None` when nothing was open.
    pub fn close(&mut self) -> Option<u32> {
        let closed = self.open.take()?;
        debug!(
            "detail-view: close animal={} session={}",
            closed.animal.id, closed.session.session_id
        );
        Some(closed.animal.id)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn animal(&self) -> Option<&Animal> {
        self.open.as_ref().map(|o| &o.animal)
    }

    pub fn profile(&self) -> Option<&AnimalProfile> {
        self.open.as_ref().map(|o| &o.profile)
    }

    pub fn session(&self) -> Option<&DetailViewSession> {
        self.open.as_ref().map(|o| &o.session)
    }

    pub fn resolver(&self) -> &ProfileResolver {
        &self.resolver
    }

    /// Flip the favorite flag. Returns the new value, or `None` when closed.
    pub fn toggle_favorite(&mut self) -> Option<bool> {
        self.open.as_mut().map(|o| o.session.toggle_favorite())
    }

    /// Switch to the inquiry screen. Ignored unless the animal is available.
    pub fn inquire(&mut self) -> bool {
        let Some(open) = self.open.as_mut() else {
            return false;
        };
        let moved = open.session.navigator_mut().inquire(&open.animal.status);
        if moved {
            debug!("detail-view: inquiry animal={}", open.animal.id);
        } else {
            debug!(
                "detail-view: inquiry ignored animal={} status={}",
                open.animal.id, open.animal.status
            );
        }
        moved
    }

    /// Return to the details screen.
    pub fn back(&mut self) -> bool {
        self.open
            .as_mut()
            .map(|o| o.session.navigator_mut().back())
            .unwrap_or(false)
    }

    /// Jump to a media item. Out-of-range indices leave the selection unchanged.
    pub fn select_media(&mut self, index: usize) -> ViewResult<()> {
        let open = self.open.as_mut().ok_or(ViewError::NotOpen)?;
        open.session.select_media(index).map_err(|e| {
            warn!("detail-view: {} (animal={})", e, open.animal.id);
            e
        })
    }

    pub fn next_media(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.session.next_media();
        }
    }

    pub fn prev_media(&mut self) {
        if let Some(open) = self.open.as_mut() {
            open.session.prev_media();
        }
    }

    /// Record host play/pause. Ignored when closed or when an image is selected.
    pub fn set_video_playing(&mut self, playing: bool) -> bool {
        self.open
            .as_mut()
            .map(|o| o.session.set_video_playing(playing))
            .unwrap_or(false)
    }

    /// Current read model, or `None` when closed.
    pub fn view(&self) -> Option<DetailView> {
        self.open
            .as_ref()
            .map(|o| DetailView::build(&o.animal, &o.profile, &o.session))
    }
}
