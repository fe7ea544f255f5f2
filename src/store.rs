//! Category-scoped menu state.
//!
//! [`MenuStore`] owns the in-memory menu and the current category. Every
//! mutation goes through the [`MenuBackend`] first and then re-reads the
//! category from it, so the cached list always mirrors the backend rather
//! than a local guess. A failed backend call leaves the cache untouched.
//!
//! Mutations on the same category are serialised: each category has an async
//! gate held from validation through refresh. A rename queued behind a delete
//! of the same item therefore sees the item gone and does nothing.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::Mutex as Gate;

use crate::backend::MenuBackend;
use crate::error::{MenuError, MenuResult, ValidationError};
use crate::models::{Category, MenuItem, MenuItemId, MenuState};

struct Inner {
    current: Category,
    menu: MenuState,
}

pub struct MenuStore<B> {
    backend: B,
    inner: Mutex<Inner>,
    gates: HashMap<Category, Gate<()>>,
}

impl<B: MenuBackend> MenuStore<B> {
    pub fn new(backend: B) -> Self {
        Self::with_category(backend, Category::default())
    }

    pub fn with_category(backend: B, current: Category) -> Self {
        Self {
            backend,
            inner: Mutex::new(Inner {
                current,
                menu: MenuState::new(),
            }),
            gates: Category::ALL.into_iter().map(|c| (c, Gate::new(()))).collect(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn current_category(&self) -> Category {
        self.lock().current
    }

    pub fn items(&self, category: Category) -> Vec<MenuItem> {
        self.lock().menu.items(category).to_vec()
    }

    pub fn current_items(&self) -> Vec<MenuItem> {
        let inner = self.lock();
        inner.menu.items(inner.current).to_vec()
    }

    /// Load `category` from the backend and make it current. If the load
    /// fails the previous category stays current.
    pub async fn set_current_category(&self, category: Category) -> MenuResult<Vec<MenuItem>> {
        let items = self.reload(category).await?;
        self.lock().current = category;
        tracing::debug!(%category, "switched category");
        Ok(items)
    }

    /// Re-read `category` from the backend.
    pub async fn reload(&self, category: Category) -> MenuResult<Vec<MenuItem>> {
        let _gate = self.gate(category).lock().await;
        self.refresh(category).await
    }

    /// Append `name` to the current category.
    pub async fn add(&self, name: &str) -> MenuResult<MenuItem> {
        let category = self.current_category();
        let _gate = self.gate(category).lock().await;

        let name = name.trim();
        if name.is_empty() {
            tracing::warn!(%category, "rejected empty menu name");
            return Err(ValidationError::EmptyName.into());
        }
        let duplicate = self.lock().menu.contains_name(category, name);
        if duplicate {
            tracing::warn!(%category, menu = name, "rejected duplicate menu name");
            return Err(ValidationError::DuplicateName(name.to_string()).into());
        }

        let item = self.backend.create(category, name).await?;
        tracing::info!(%category, id = %item.id, menu = name, "menu item added");
        if let Err(e) = self.refresh(category).await {
            // The item exists on the backend; keep it in the cache anyway.
            tracing::warn!(%category, error = %e, "refresh after add failed");
            self.lock().menu.items_mut(category).push(item.clone());
        }
        Ok(item)
    }

    /// Rename an item of the current category. Returns `false` if the item
    /// does not exist.
    pub async fn rename(&self, id: &MenuItemId, new_name: &str) -> MenuResult<bool> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        self.mutate_item(id, "renamed", |backend, category| async move {
            backend.update(category, id, new_name).await.map(|_| ())
        })
        .await
    }

    /// Delete an item of the current category. Returns `false` if the item
    /// does not exist.
    pub async fn remove(&self, id: &MenuItemId) -> MenuResult<bool> {
        self.mutate_item(id, "removed", |backend, category| async move {
            backend.delete(category, id).await
        })
        .await
    }

    /// Flip an item's sold-out flag. Returns `false` if the item does not
    /// exist.
    pub async fn toggle_sold_out(&self, id: &MenuItemId) -> MenuResult<bool> {
        self.mutate_item(id, "sold-out toggled", |backend, category| async move {
            backend.toggle_sold_out(category, id).await.map(|_| ())
        })
        .await
    }

    async fn mutate_item<'a, F, Fut>(
        &'a self,
        id: &MenuItemId,
        action: &str,
        call: F,
    ) -> MenuResult<bool>
    where
        F: FnOnce(&'a B, Category) -> Fut,
        Fut: std::future::Future<Output = MenuResult<()>>,
    {
        let category = self.current_category();
        let _gate = self.gate(category).lock().await;

        let known = self.lock().menu.find(category, id).is_some();
        if !known {
            tracing::warn!(%category, %id, "no such menu item, ignoring");
            return Ok(false);
        }

        match call(&self.backend, category).await {
            Ok(()) => {
                tracing::info!(%category, %id, "menu item {}", action);
                self.refresh(category).await?;
                Ok(true)
            }
            Err(MenuError::NotFound(_)) => {
                tracing::warn!(%category, %id, "menu item vanished from backend");
                self.refresh(category).await?;
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Replace the cached list with the backend's. Caller holds the gate.
    async fn refresh(&self, category: Category) -> MenuResult<Vec<MenuItem>> {
        let items = self.backend.list(category).await?;
        tracing::debug!(%category, count = items.len(), "refreshed menu");
        self.lock().menu.replace(category, items.clone());
        Ok(items)
    }

    fn gate(&self, category: Category) -> &Gate<()> {
        &self.gates[&category]
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().expect("menu state lock poisoned")
    }
}
