pub mod list;
pub mod page;
pub mod search;
pub mod tabs;

pub use page::MenuPage;
