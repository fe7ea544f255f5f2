pub mod api;
pub mod backend;
pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod store;

pub use menu_board_core::{models, storage};
