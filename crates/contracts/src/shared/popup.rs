//! Lightbox state and click-target resolution.

/// What a click on the host page landed on, as far as the lightbox cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupTrigger {
    /// A link inside a figure/feature block
    Anchor {
        href: Option<String>,
        nested_img_src: Option<String>,
    },
    /// An image inside a figure/feature block or gallery
    Image { src: Option<String> },
}

/// Anchors inside these blocks open the lightbox
pub const ANCHOR_SELECTOR: &str = ".mm-figure a, .mm-feature a";
/// Images inside these blocks open the lightbox
pub const IMAGE_SELECTOR: &str = ".mm-figure img, .mm-feature img, .gallery img";

impl PopupTrigger {
    /// Link target first, then the nested image; empty attributes count as absent.
    pub fn source(&self) -> Option<String> {
        let non_empty = |s: &Option<String>| s.clone().filter(|v| !v.is_empty());
        match self {
            PopupTrigger::Anchor {
                href,
                nested_img_src,
            } => non_empty(href).or_else(|| non_empty(nested_img_src)),
            PopupTrigger::Image { src } => non_empty(src),
        }
    }
}

/// Binary overlay state: either hidden or showing exactly one image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopupState {
    src: Option<String>,
}

impl PopupState {
    pub fn show(&mut self, src: impl Into<String>) {
        self.src = Some(src.into());
    }

    pub fn hide(&mut self) {
        self.src = None;
    }

    pub fn is_open(&self) -> bool {
        self.src.is_some()
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// Open for a trigger if it resolves to a source. Returns whether it opened.
    pub fn open_for(&mut self, trigger: &PopupTrigger) -> bool {
        match trigger.source() {
            Some(src) => {
                self.show(src);
                true
            }
            None => false,
        }
    }
}
