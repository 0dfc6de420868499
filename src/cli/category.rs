//! Category CLI commands
//!
//! Handlers for creating, renaming, deleting, and listing categories.

use crate::display::format_category_table;
use crate::models::{CategoryId, Dataset};
use crate::services::CategoryService;
use crate::storage::Store;

/// Handle `create-category`
pub fn handle_create_category(store: &Store, dataset: &mut Dataset, name: &str) {
    let mut service = CategoryService::new(store, dataset);
    match service.create(name) {
        Ok(category) => println!(
            "Created category '{}' (ID: {})",
            category.name, category.id
        ),
        Err(e) => eprintln!("Error creating category: {}", e),
    }
}

/// Handle `edit-category`
pub fn handle_edit_category(store: &Store, dataset: &mut Dataset, id: u64, name: &str) {
    let mut service = CategoryService::new(store, dataset);
    match service.rename(CategoryId::new(id), name) {
        Ok(category) => println!("Renamed category {} to '{}'", category.id, category.name),
        Err(e) => eprintln!("Error renaming category: {}", e),
    }
}

/// Handle `delete-category`
pub fn handle_delete_category(store: &Store, dataset: &mut Dataset, id: u64) {
    let mut service = CategoryService::new(store, dataset);
    match service.delete(CategoryId::new(id)) {
        Ok(category) => println!("Deleted category '{}'", category.name),
        Err(e) => eprintln!("Error deleting category: {}", e),
    }
}

/// Handle `list category`
pub fn handle_list_categories(dataset: &Dataset) {
    print!("{}", format_category_table(&dataset.categories));
}
