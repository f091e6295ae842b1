use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::models::FoodItem;
use crate::planner::classifier::{FoodGroup, classify_item};

/// Read-only snapshot of the food catalog.
///
/// Cloning shares the same items; a refreshed catalog is a new snapshot, so
/// in-flight plans keep the items they started with.
#[derive(Debug, Clone)]
pub struct FoodCatalog {
    items: Arc<[FoodItem]>,
}

impl FoodCatalog {
    pub fn new(items: Vec<FoodItem>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    /// Items of `group` whose names are not in `used`, in catalog order.
    pub fn available_in_group(&self, group: FoodGroup, used: &HashSet<String>) -> Vec<&FoodItem> {
        self.items
            .iter()
            .filter(|item| classify_item(item) == group && !used.contains(&item.name))
            .collect()
    }

    /// Number of items per group.
    pub fn group_counts(&self) -> BTreeMap<FoodGroup, usize> {
        let mut counts = BTreeMap::new();
        for item in self.items.iter() {
            *counts.entry(classify_item(item)).or_insert(0) += 1;
        }
        counts
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, category: &str) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            category: category.to_string(),
            calories: 100.0,
            carbs: 10.0,
            protein: 5.0,
            fat: 2.0,
            serving_size: None,
        }
    }

    fn sample_catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            item("쌀밥", "밥류"),
            item("비빔밥", "밥류"),
            item("된장찌개", "찌개 및 전골류"),
            item("김치", "김치류"),
            item("식빵", "빵 및 과자류"),
            item("사과", "과일류"),
        ])
    }

    #[test]
    fn test_group_filter() {
        let catalog = sample_catalog();
        let none = HashSet::new();
        let rice: Vec<&str> = catalog
            .available_in_group(FoodGroup::Rice, &none)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(rice, vec!["쌀밥", "비빔밥"]);
        assert!(catalog.available_in_group(FoodGroup::Brunch, &none).is_empty());
    }

    #[test]
    fn test_available_excludes_used_names() {
        let catalog = sample_catalog();
        let used: HashSet<String> = ["쌀밥".to_string()].into_iter().collect();
        let rice = catalog.available_in_group(FoodGroup::Rice, &used);
        assert_eq!(rice.len(), 1);
        assert_eq!(rice[0].name, "비빔밥");
    }

    #[test]
    fn test_group_counts() {
        let counts = sample_catalog().group_counts();
        assert_eq!(counts[&FoodGroup::Rice], 2);
        assert_eq!(counts[&FoodGroup::Other], 1);
        assert!(!counts.contains_key(&FoodGroup::Brunch));
    }

    #[test]
    fn test_clone_shares_snapshot() {
        let catalog = sample_catalog();
        let copy = catalog.clone();
        assert!(std::ptr::eq(catalog.items().as_ptr(), copy.items().as_ptr()));
    }
}
