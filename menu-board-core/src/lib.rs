//! Core types and local persistence for menu-board.
//!
//! - [`models`]: categories and menu items as they travel over the wire.
//! - [`storage`]: SQLite-backed key/value storage for the local backend.

pub mod models;
pub mod storage;
