//! Gallery media models.

use serde::{Deserialize, Serialize};

/// Kind of gallery entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Image,
    Video,
}

/// One image or video in an animal's gallery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaItem {
    pub kind: MediaKind,
    /// Resource locator, resolved by the host
    pub src: String,
    /// Thumbnail strip image; doubles as the poster frame for video
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Accessible description
    pub alt: String,
}

impl MediaItem {
    /// Create an image entry.
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            kind: MediaKind::Image,
            src: src.into(),
            thumbnail: None,
            alt: alt.into(),
        }
    }

    /// Create a video entry with a poster thumbnail.
    pub fn video(
        src: impl Into<String>,
        thumbnail: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self {
            kind: MediaKind::Video,
            src: src.into(),
            thumbnail: Some(thumbnail.into()),
            alt: alt.into(),
        }
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    /// Thumbnail to show in the strip, falling back to the source itself.
    pub fn thumbnail_src(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thumbnail_falls_back_to_src() {
        let item = MediaItem::image("/simba.jpg", "Simba main photo");
        assert_eq!(item.thumbnail_src(), "/simba.jpg");
        assert!(!item.is_video());
    }

    #[test]
    fn test_video_uses_poster_thumbnail() {
        let item = MediaItem::video("/simbavideo.mp4", "/simba3.jpg", "Simba playing video");
        assert_eq!(item.thumbnail_src(), "/simba3.jpg");
        assert!(item.is_video());
    }

    #[test]
    fn test_media_json_shape() {
        let item: MediaItem =
            serde_json::from_str(r#"{"kind":"video","src":"/a.mp4","alt":"clip"}"#).unwrap();
        assert_eq!(item.kind, MediaKind::Video);
        assert_eq!(item.thumbnail, None);
        assert_eq!(item.thumbnail_src(), "/a.mp4");
    }
}
