pub mod image_popup;

pub use image_popup::{ImagePopup, ImagePopupService};
