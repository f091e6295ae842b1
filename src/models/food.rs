use serde::{Deserialize, Serialize};

/// A catalog food item with nutrient values per 100 g.
///
/// Items are read-only snapshots for the duration of a recommendation
/// request. Ranking scores are kept beside the item, never on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,

    /// Raw category label, e.g. "밥류" or "국 및 탕류".
    pub category: String,

    pub calories: f64,

    pub carbs: f64,

    pub protein: f64,

    pub fat: f64,

    /// Informational only; never used in scoring.
    #[serde(default)]
    pub serving_size: Option<String>,
}

impl FoodItem {
    /// Basic validation: finite, non-negative nutrient values.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.carbs, self.protein, self.fat]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }

    /// Whether a portion can be sized against this item's calories.
    #[inline]
    pub fn has_positive_calories(&self) -> bool {
        self.calories.is_finite() && self.calories > 0.0
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} [{}]: {} kcal, C:{} P:{} F:{}",
            self.name, self.category, self.calories, self.carbs, self.protein, self.fat
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> FoodItem {
        FoodItem {
            name: "쌀밥".to_string(),
            category: "밥류".to_string(),
            calories: 150.0,
            carbs: 33.0,
            protein: 2.7,
            fat: 0.3,
            serving_size: Some("210g".to_string()),
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_item().is_valid());

        let mut negative = sample_item();
        negative.fat = -1.0;
        assert!(!negative.is_valid());

        let mut nan = sample_item();
        nan.carbs = f64::NAN;
        assert!(!nan.is_valid());
    }

    #[test]
    fn test_zero_calories_is_valid_but_not_sizeable() {
        let mut water = sample_item();
        water.calories = 0.0;
        assert!(water.is_valid());
        assert!(!water.has_positive_calories());
    }

    #[test]
    fn test_deserialize_without_serving_size() {
        let json = r#"{"name": "사과", "category": "과일류", "calories": 52, "carbs": 14, "protein": 0.3, "fat": 0.2}"#;
        let item: FoodItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.name, "사과");
        assert!(item.serving_size.is_none());
    }
}
