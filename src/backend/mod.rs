//! Authoritative sources the menu store reads from and writes through.
//!
//! - [`RemoteBackend`]: the HTTP menu API.
//! - [`LocalBackend`]: an in-process menu that writes the full state to a
//!   [`StorageAdapter`](crate::storage::StorageAdapter) after every mutation.

mod local;
mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use async_trait::async_trait;

use crate::error::MenuResult;
use crate::models::{Category, MenuItem, MenuItemId};

/// Category-scoped CRUD operations against a menu source.
///
/// Operations on an unknown id return [`MenuError::NotFound`](crate::error::MenuError::NotFound).
#[async_trait]
pub trait MenuBackend: Send + Sync {
    async fn list(&self, category: Category) -> MenuResult<Vec<MenuItem>>;

    async fn create(&self, category: Category, name: &str) -> MenuResult<MenuItem>;

    async fn update(&self, category: Category, id: &MenuItemId, name: &str)
        -> MenuResult<MenuItem>;

    async fn toggle_sold_out(&self, category: Category, id: &MenuItemId) -> MenuResult<MenuItem>;

    async fn delete(&self, category: Category, id: &MenuItemId) -> MenuResult<()>;
}
