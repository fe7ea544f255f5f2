//! Pure projections of a category's item list.
//!
//! Rendering never mutates state and always produces the whole list; callers
//! replace their previous output wholesale.

mod html;
mod text;

pub use html::render_list;
pub use text::render_text;

use crate::models::{Category, MenuItem};

/// Label shown next to the list, e.g. `총 3개`.
pub fn count_label(count: usize) -> String {
    format!("총 {}개", count)
}

/// Everything a front end needs to redraw one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub category: Category,
    pub items: Vec<MenuItem>,
    pub html: String,
    pub count_label: String,
}

pub fn render_view(category: Category, items: Vec<MenuItem>) -> MenuView {
    MenuView {
        category,
        html: render_list(&items),
        count_label: count_label(items.len()),
        items,
    }
}

impl MenuView {
    pub fn text(&self) -> String {
        render_text(self.category, &self.items)
    }
}
