use std::sync::Mutex;

use async_trait::async_trait;

use super::MenuBackend;
use crate::error::{MenuError, MenuResult, ValidationError};
use crate::models::{Category, MenuItem, MenuItemId, MenuState};
use crate::storage::{StorageAdapter, MENU_KEY};

/// Backend holding the menu in process and persisting it through a
/// [`StorageAdapter`].
///
/// Every mutation writes the complete state under [`MENU_KEY`]. The stored
/// blob is never read back; a fresh backend starts with an empty menu.
pub struct LocalBackend<S> {
    storage: S,
    menu: Mutex<MenuState>,
}

impl<S: StorageAdapter> LocalBackend<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            menu: Mutex::new(MenuState::new()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Apply `f` to the menu and persist the result.
    ///
    /// The in-memory change is rolled back if the write fails, so a failed
    /// save never leaves the backend ahead of storage.
    fn mutate<T>(&self, f: impl FnOnce(&mut MenuState) -> MenuResult<T>) -> MenuResult<T> {
        let mut menu = self.menu.lock().expect("menu lock poisoned");
        let mut next = menu.clone();
        let out = f(&mut next)?;

        let json = serde_json::to_string(&next).map_err(anyhow::Error::from)?;
        self.storage.set(MENU_KEY, &json)?;

        *menu = next;
        Ok(out)
    }

    fn with_item<T>(
        &self,
        category: Category,
        id: &MenuItemId,
        f: impl FnOnce(&mut MenuItem) -> T,
    ) -> MenuResult<T> {
        self.mutate(|menu| {
            menu.items_mut(category)
                .iter_mut()
                .find(|item| &item.id == id)
                .map(f)
                .ok_or_else(|| MenuError::NotFound(id.clone()))
        })
    }
}

#[async_trait]
impl<S: StorageAdapter> MenuBackend for LocalBackend<S> {
    async fn list(&self, category: Category) -> MenuResult<Vec<MenuItem>> {
        let menu = self.menu.lock().expect("menu lock poisoned");
        Ok(menu.items(category).to_vec())
    }

    async fn create(&self, category: Category, name: &str) -> MenuResult<MenuItem> {
        self.mutate(|menu| {
            if menu.contains_name(category, name) {
                return Err(ValidationError::DuplicateName(name.to_string()).into());
            }
            let item = MenuItem::new(MenuItemId::generate(), name);
            menu.items_mut(category).push(item.clone());
            Ok(item)
        })
    }

    async fn update(
        &self,
        category: Category,
        id: &MenuItemId,
        name: &str,
    ) -> MenuResult<MenuItem> {
        self.with_item(category, id, |item| {
            item.name = name.to_string();
            item.clone()
        })
    }

    async fn toggle_sold_out(&self, category: Category, id: &MenuItemId) -> MenuResult<MenuItem> {
        self.with_item(category, id, |item| {
            item.is_sold_out = !item.is_sold_out;
            item.clone()
        })
    }

    async fn delete(&self, category: Category, id: &MenuItemId) -> MenuResult<()> {
        self.mutate(|menu| {
            let items = menu.items_mut(category);
            let before = items.len();
            items.retain(|item| &item.id != id);
            if items.len() == before {
                return Err(MenuError::NotFound(id.clone()));
            }
            Ok(())
        })
    }
}
