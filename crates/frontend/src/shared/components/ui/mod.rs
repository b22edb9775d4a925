pub mod badge;

pub use badge::MenuBadge;
