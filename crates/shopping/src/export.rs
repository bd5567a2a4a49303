use crate::aggregation::ShoppingItem;

/// Plain-text rendering of the shopping list for the clipboard: one
/// ingredient per line as `<displayName> (<count>x)`, in list order.
pub fn render_clipboard_text(items: &[ShoppingItem]) -> String {
    items
        .iter()
        .map(|item| format!("{} ({}x)", item.display_name, item.count))
        .collect::<Vec<_>>()
        .join("\n")
}
