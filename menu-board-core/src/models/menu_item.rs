use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// Backend-assigned identifier of a menu item.
///
/// Opaque to clients: the remote API picks its own format, the local backend
/// uses UUID v4 strings. Either way the id does not change when the item is
/// renamed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(String);

impl MenuItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id, for backends that assign ids themselves.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An entry on a category's menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    #[serde(default)]
    pub is_sold_out: bool,
}

impl MenuItem {
    /// A new, available item.
    pub fn new(id: MenuItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            is_sold_out: false,
        }
    }
}

/// Request body for creating or renaming an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuNameInput {
    pub name: String,
}

/// Full menu: every category's ordered item list.
///
/// Serializes as `{"espresso": [...], "frappuccino": [...], ...}`, the layout
/// persisted under the `"menu"` storage key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuState(BTreeMap<Category, Vec<MenuItem>>);

impl MenuState {
    pub fn new() -> Self {
        Self(Category::ALL.into_iter().map(|c| (c, Vec::new())).collect())
    }

    pub fn items(&self, category: Category) -> &[MenuItem] {
        self.0.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn items_mut(&mut self, category: Category) -> &mut Vec<MenuItem> {
        self.0.entry(category).or_default()
    }

    /// Replace one category's list wholesale.
    pub fn replace(&mut self, category: Category, items: Vec<MenuItem>) {
        self.0.insert(category, items);
    }

    pub fn find(&self, category: Category, id: &MenuItemId) -> Option<&MenuItem> {
        self.items(category).iter().find(|item| &item.id == id)
    }

    pub fn contains_name(&self, category: Category, name: &str) -> bool {
        self.items(category).iter().any(|item| item.name == name)
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}
