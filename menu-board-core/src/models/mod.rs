//! Domain models for menu-board.
//!
//! # Core Concepts
//!
//! - [`Category`]: A fixed partition of the menu. The set is closed; categories
//!   are never created or destroyed at runtime.
//! - [`MenuItem`]: A single entry on a category's menu. Its [`MenuItemId`] is
//!   assigned by whichever backend created it and survives renames.
//! - [`MenuState`]: The full category → ordered item list mapping. Insertion
//!   order is display order.

mod category;
mod menu_item;

pub use category::*;
pub use menu_item::*;
