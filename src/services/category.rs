//! Category service
//!
//! Business rules for the category collection: unique names, referential
//! integrity against expenses, and persistence after every mutation.

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Category, CategoryId, Dataset};
use crate::storage::Store;

/// Service for category management
pub struct CategoryService<'a> {
    store: &'a Store,
    dataset: &'a mut Dataset,
}

impl<'a> CategoryService<'a> {
    /// Create a new category service
    pub fn new(store: &'a Store, dataset: &'a mut Dataset) -> Self {
        Self { store, dataset }
    }

    /// Create a new category
    pub fn create(&mut self, name: &str) -> SpendlogResult<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SpendlogError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        // Names are unique, exact match
        if self.dataset.category_by_name(name).is_some() {
            return Err(SpendlogError::Duplicate {
                entity_type: "Category",
                identifier: name.to_string(),
            });
        }

        let category = Category::new(self.dataset.next_category_id(), name);
        self.dataset.categories.push(category.clone());
        self.store.save(self.dataset)?;

        Ok(category)
    }

    /// Rename an existing category
    pub fn rename(&mut self, id: CategoryId, new_name: &str) -> SpendlogResult<Category> {
        let position = self
            .dataset
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| SpendlogError::category_not_found(id.to_string()))?;

        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(SpendlogError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if let Some(existing) = self.dataset.category_by_name(new_name) {
            if existing.id != id {
                return Err(SpendlogError::Duplicate {
                    entity_type: "Category",
                    identifier: new_name.to_string(),
                });
            }
        }

        self.dataset.categories[position].name = new_name.to_string();
        let renamed = self.dataset.categories[position].clone();
        self.store.save(self.dataset)?;

        Ok(renamed)
    }

    /// Delete a category that no expense references
    pub fn delete(&mut self, id: CategoryId) -> SpendlogResult<Category> {
        let position = self
            .dataset
            .categories
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| SpendlogError::category_not_found(id.to_string()))?;

        if self.dataset.category_in_use(id) {
            return Err(SpendlogError::InUse {
                entity_type: "Category",
                identifier: self.dataset.categories[position].name.clone(),
            });
        }

        let removed = self.dataset.categories.remove(position);
        self.store.save(self.dataset)?;

        Ok(removed)
    }

    /// All categories in insertion order
    pub fn list(&self) -> &[Category] {
        &self.dataset.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, ExpenseId};
    use tempfile::TempDir;

    fn test_store() -> (TempDir, Store) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path().join("expenses.json"));
        (temp_dir, store)
    }

    #[test]
    fn test_create_category() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);

        let category = service.create("Groceries").unwrap();
        assert_eq!(category.id.value(), 1);
        assert_eq!(category.name, "Groceries");

        let category = service.create("Transport").unwrap();
        assert_eq!(category.id.value(), 2);
    }

    #[test]
    fn test_create_trims_name() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);

        let category = service.create("  Groceries  ").unwrap();
        assert_eq!(category.name, "Groceries");
    }

    #[test]
    fn test_create_empty_name_fails() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);

        let result = service.create("   ");
        assert!(matches!(result, Err(SpendlogError::Validation(_))));
    }

    #[test]
    fn test_create_duplicate_fails() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);

        service.create("Food").unwrap();
        let result = service.create("Food");
        assert!(matches!(result, Err(SpendlogError::Duplicate { .. })));

        // Matching is case-sensitive, so a different casing is a new name
        assert!(service.create("food").is_ok());
    }

    #[test]
    fn test_create_persists() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);
        service.create("Food").unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded.categories.len(), 1);
        assert_eq!(reloaded.categories[0].name, "Food");
    }

    #[test]
    fn test_rename_category() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);

        let category = service.create("Fod").unwrap();
        let renamed = service.rename(category.id, "Food").unwrap();
        assert_eq!(renamed.name, "Food");
        assert_eq!(renamed.id, category.id);
    }

    #[test]
    fn test_rename_to_own_name_is_allowed() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);

        let category = service.create("Food").unwrap();
        assert!(service.rename(category.id, "Food").is_ok());
    }

    #[test]
    fn test_rename_to_taken_name_fails() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);

        service.create("Food").unwrap();
        let other = service.create("Transport").unwrap();

        let result = service.rename(other.id, "Food");
        assert!(matches!(result, Err(SpendlogError::Duplicate { .. })));
    }

    #[test]
    fn test_rename_missing_category_fails_before_name_check() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);

        // Even an invalid new name reports NotFound for an unknown id
        let result = service.rename(CategoryId::new(99), "");
        assert!(matches!(result, Err(SpendlogError::NotFound { .. })));
    }

    #[test]
    fn test_delete_category() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);

        let category = service.create("Food").unwrap();
        let removed = service.delete(category.id).unwrap();
        assert_eq!(removed.name, "Food");
        assert!(service.list().is_empty());
    }

    #[test]
    fn test_delete_missing_category_fails() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);

        let result = service.delete(CategoryId::new(7));
        assert!(matches!(result, Err(SpendlogError::NotFound { .. })));
    }

    #[test]
    fn test_delete_referenced_category_fails() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);
        let category = service.create("Food").unwrap();

        dataset
            .expenses
            .push(Expense::new(ExpenseId::new(1), "Lunch", 12.5, category.id));

        let mut service = CategoryService::new(&store, &mut dataset);
        let result = service.delete(category.id);
        assert!(matches!(result, Err(SpendlogError::InUse { .. })));
        assert!(result.unwrap_err().is_conflict());

        // Once the expense is gone the category can be deleted
        dataset.expenses.clear();
        let mut service = CategoryService::new(&store, &mut dataset);
        assert!(service.delete(category.id).is_ok());
    }

    #[test]
    fn test_deleted_max_id_is_reissued() {
        let (_temp_dir, store) = test_store();
        let mut dataset = store.load().unwrap();
        let mut service = CategoryService::new(&store, &mut dataset);

        service.create("Food").unwrap();
        let transport = service.create("Transport").unwrap();
        service.delete(transport.id).unwrap();

        let replacement = service.create("Travel").unwrap();
        assert_eq!(replacement.id.value(), 2);
    }
}
