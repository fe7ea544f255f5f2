//! Raw UI events and their translation into intents.
//!
//! Translation is pure: it looks only at the event, the rows of the last
//! render and the current contents of the name field.

use crate::models::{Category, MenuItem, MenuItemId};

/// Row control that was clicked, keyed by its CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    SoldOut,
    Edit,
    Remove,
}

impl Control {
    pub fn class(&self) -> &'static str {
        match self {
            Self::SoldOut => "menu-sold-out-button",
            Self::Edit => "menu-edit-button",
            Self::Remove => "menu-remove-button",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "menu-sold-out-button" => Some(Self::SoldOut),
            "menu-edit-button" => Some(Self::Edit),
            "menu-remove-button" => Some(Self::Remove),
            _ => None,
        }
    }
}

/// Something the user did, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The name field now holds this text.
    Input(String),
    /// The add form was submitted.
    Submit,
    /// A key was pressed in the name field.
    KeyPress(String),
    /// A click inside the list. `class` is the clicked element's class and
    /// `row` the index of the enclosing row, if any.
    ListClick { class: String, row: Option<usize> },
    /// A click in the category navigation, carrying its category attribute.
    NavClick { category: Option<String> },
}

/// What the user asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Edit(MenuItemId),
    Delete(MenuItemId),
    ToggleSoldOut(MenuItemId),
    SwitchCategory(Category),
}

pub fn translate(event: &UiEvent, rows: &[MenuItem], input: &str) -> Option<Intent> {
    match event {
        UiEvent::Input(_) => None,
        UiEvent::Submit => Some(Intent::Add(input.to_string())),
        UiEvent::KeyPress(key) if key == "Enter" => Some(Intent::Add(input.to_string())),
        UiEvent::KeyPress(_) => None,
        UiEvent::ListClick { class, row } => {
            let control = Control::from_class(class)?;
            let id = rows.get((*row)?)?.id.clone();
            Some(match control {
                Control::SoldOut => Intent::ToggleSoldOut(id),
                Control::Edit => Intent::Edit(id),
                Control::Remove => Intent::Delete(id),
            })
        }
        UiEvent::NavClick { category } => category
            .as_deref()?
            .parse::<Category>()
            .ok()
            .map(Intent::SwitchCategory),
    }
}
