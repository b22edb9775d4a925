pub mod config;
pub mod debounce;
pub mod error;
pub mod popup;
pub mod text;
