//! Markup for the category list container.

use crate::models::MenuItem;

const SOLD_OUT_CLASS: &str = "sold-out";

/// Render every item as an `<li>` row.
///
/// Each row carries the item id in `data-menu-id` and three controls whose
/// classes the click translation keys on: `menu-sold-out-button`,
/// `menu-edit-button`, `menu-remove-button`.
pub fn render_list(items: &[MenuItem]) -> String {
    items.iter().map(render_row).collect()
}

fn render_row(item: &MenuItem) -> String {
    let name_class = if item.is_sold_out {
        format!("w-100 pl-2 menu-name {}", SOLD_OUT_CLASS)
    } else {
        "w-100 pl-2 menu-name".to_string()
    };

    format!(
        r#"<li data-menu-id="{id}" class="menu-list-item d-flex items-center py-2">
  <span class="{name_class}">{name}</span>
  <button type="button" class="bg-gray-50 text-gray-500 text-sm mr-1 menu-sold-out-button">품절</button>
  <button type="button" class="bg-gray-50 text-gray-500 text-sm mr-1 menu-edit-button">수정</button>
  <button type="button" class="bg-gray-50 text-gray-500 text-sm menu-remove-button">삭제</button>
</li>
"#,
        id = escape(item.id.as_str()),
        name_class = name_class,
        name = escape(&item.name),
    )
}

fn escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}
