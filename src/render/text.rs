//! Plain-text rendering for the terminal front end.

use crate::models::{Category, MenuItem};

const SOLD_OUT_MARK: &str = "[품절]";

/// Render a category's list with 1-based row numbers.
///
/// Example output:
/// ```text
/// espresso (총 2개)
/// ├── 1. Americano
/// └── 2. Latte [품절]
/// ```
pub fn render_text(category: Category, items: &[MenuItem]) -> String {
    let mut output = format!("{} ({})\n", category, super::count_label(items.len()));

    for (i, item) in items.iter().enumerate() {
        let branch = if i == items.len() - 1 {
            "└── "
        } else {
            "├── "
        };
        output.push_str(branch);
        output.push_str(&format!("{}. {}", i + 1, item.name));
        if item.is_sold_out {
            output.push(' ');
            output.push_str(SOLD_OUT_MARK);
        }
        output.push('\n');
    }

    output
}
