//! Category display formatting

use crate::models::Category;

/// Format a list of categories as a table
pub fn format_category_table(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let name_width = categories
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<width$}  {}\n",
        "ID",
        "Name",
        "Created",
        width = name_width
    ));
    output.push_str(&format!(
        "{:->4}  {:-<width$}  {:-<10}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for category in categories {
        output.push_str(&format!(
            "{:>4}  {:<width$}  {}\n",
            category.id,
            category.name,
            category.created_at.format("%Y-%m-%d"),
            width = name_width
        ));
    }

    output
}
