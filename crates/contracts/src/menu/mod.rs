pub mod badge;
pub mod filter;
pub mod model;
pub mod price;
pub mod state;
pub mod tabs;
pub mod view;

pub use model::{Category, Item, MenuDocument, Price};
