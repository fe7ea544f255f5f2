//! HTTP access to the remote menu API.

mod client;

pub use client::*;
