//! Shared, target-independent logic of the menu widget.
//!
//! Everything that makes a decision (filtering, badge classification, price
//! formatting, debouncing, popup state) lives here so it can be tested on the
//! host without a browser. The `frontend` crate only wires it to the DOM.

pub mod menu;
pub mod shared;
