use std::collections::HashMap;

use crate::sections::ImageItem;

/// One observation report for an element identified by its section id.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionUpdate {
    pub id: String,
    pub is_intersecting: bool,
}

impl IntersectionUpdate {
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self {
            id: id.into(),
            is_intersecting,
        }
    }
}

/// Which section currently straddles the viewport midline.
///
/// At most one section is active. A section stays active until another one
/// intersects; when several intersect in the same callback batch, the last
/// reported entry wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveSection {
    current: Option<String>,
}

impl ActiveSection {
    pub fn apply<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = IntersectionUpdate>,
    {
        for update in updates {
            if update.is_intersecting {
                self.current = Some(update.id);
            }
        }
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }
}

/// Per-image fade-in flags. Not sticky: an image hides again once it leaves
/// the viewport. Ids that were never observed read as hidden.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevealMap {
    visible: HashMap<String, bool>,
}

impl RevealMap {
    pub fn apply<I>(&mut self, updates: I)
    where
        I: IntoIterator<Item = IntersectionUpdate>,
    {
        for update in updates {
            self.visible.insert(update.id, update.is_intersecting);
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.get(id).copied().unwrap_or(false)
    }
}

/// The lightbox's open flag plus the image it shows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LightboxState {
    image: Option<ImageItem>,
    open: bool,
}

impl LightboxState {
    pub fn show(&mut self, image: ImageItem) {
        self.image = Some(image);
        self.open = true;
    }

    // The image is kept on dismiss so the overlay doesn't flash empty while
    // the close transition plays.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn image(&self) -> Option<&ImageItem> {
        self.image.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update(id: &str, is_intersecting: bool) -> IntersectionUpdate {
        IntersectionUpdate::new(id, is_intersecting)
    }

    fn image(src: &str, alt: &str) -> ImageItem {
        ImageItem {
            src: src.to_string(),
            alt: alt.to_string(),
        }
    }

    #[test]
    fn crossing_the_midline_activates_exactly_that_section() {
        let mut active = ActiveSection::default();
        assert_eq!(active.current(), None);

        active.apply([update("experience", true)]);
        assert_eq!(active.current(), Some("experience"));
    }

    #[test]
    fn last_intersecting_entry_wins() {
        let mut active = ActiveSection::default();
        active.apply([
            update("personal-introduction", true),
            update("profession-skills", true),
        ]);
        assert_eq!(active.current(), Some("profession-skills"));
    }

    #[test]
    fn leaving_the_midline_does_not_clear_the_active_section() {
        let mut active = ActiveSection::default();
        active.apply([update("experience", true)]);
        active.apply([update("experience", false)]);
        assert_eq!(active.current(), Some("experience"));
    }

    #[test]
    fn images_start_hidden_and_reveal_on_intersection() {
        let mut revealed = RevealMap::default();
        assert!(!revealed.is_visible("experience"));

        revealed.apply([update("experience", true)]);
        assert!(revealed.is_visible("experience"));
        assert!(!revealed.is_visible("involvement"));
    }

    #[test]
    fn reveal_is_not_sticky() {
        let mut revealed = RevealMap::default();
        revealed.apply([update("experience", true)]);
        revealed.apply([update("experience", false)]);
        assert!(!revealed.is_visible("experience"));
    }

    #[test]
    fn show_stores_the_clicked_image_and_opens() {
        let mut lightbox = LightboxState::default();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.image(), None);

        let clicked = image("https://picsum.photos/id/237/600/400", "Personal Introduction");
        lightbox.show(clicked.clone());
        assert!(lightbox.is_open());
        assert_eq!(lightbox.image(), Some(&clicked));
    }

    #[test]
    fn dismiss_closes_without_clearing_the_image() {
        let mut lightbox = LightboxState::default();
        let clicked = image("https://picsum.photos/id/237/600/400", "Personal Introduction");
        lightbox.show(clicked.clone());

        lightbox.dismiss();
        assert!(!lightbox.is_open());
        assert_eq!(lightbox.image(), Some(&clicked));
    }
}
