//! Two-screen flow: profile details and inquiry.

use serde::{Deserialize, Serialize};

use crate::models::AnimalStatus;

/// Screen shown inside an open detail view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Details,
    Inquiry,
}

/// State machine over [`Screen`].
///
/// `Details → Inquiry` is guarded by availability; `Inquiry → Details` is
/// always allowed. There is no way to start on `Inquiry`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenNavigator {
    screen: Screen,
}

impl ScreenNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Move to the inquiry screen if the animal is available.
    ///
    /// Returns whether the screen changed.
    pub fn inquire(&mut self, status: &AnimalStatus) -> bool {
        if self.screen != Screen::Details || !status.is_available() {
            return false;
        }
        self.screen = Screen::Inquiry;
        true
    }

    /// Return to the details screen. Returns whether the screen changed.
    pub fn back(&mut self) -> bool {
        let changed = self.screen != Screen::Details;
        self.screen = Screen::Details;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_details() {
        assert_eq!(ScreenNavigator::new().screen(), Screen::Details);
    }

    #[test]
    fn test_inquire_gated_by_status() {
        let cases = vec![
            (AnimalStatus::Available, Screen::Inquiry),
            (AnimalStatus::Reserved, Screen::Details),
            (AnimalStatus::Sold, Screen::Details),
            (AnimalStatus::parse("coming-soon"), Screen::Details),
        ];

        for (status, expected) in cases {
            let mut nav = ScreenNavigator::new();
            nav.inquire(&status);
            assert_eq!(nav.screen(), expected, "status {}", status);
        }
    }

    #[test]
    fn test_back_returns_to_details() {
        let mut nav = ScreenNavigator::new();
        assert!(!nav.back());
        assert!(nav.inquire(&AnimalStatus::Available));
        assert!(!nav.inquire(&AnimalStatus::Available));
        assert!(nav.back());
        assert_eq!(nav.screen(), Screen::Details);
    }
}
