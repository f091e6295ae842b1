use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::FoodItem;

/// Semantic food group used to filter candidates per meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FoodGroup {
    Rice,
    /// Soups and stews; the main dish of a standard meal.
    Soup,
    SideDish,
    Dessert,
    Brunch,
    Other,
}

impl FoodGroup {
    pub const ALL: [FoodGroup; 6] = [
        FoodGroup::Rice,
        FoodGroup::Soup,
        FoodGroup::SideDish,
        FoodGroup::Dessert,
        FoodGroup::Brunch,
        FoodGroup::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FoodGroup::Rice => "밥류",
            FoodGroup::Soup => "국류",
            FoodGroup::SideDish => "반찬류",
            FoodGroup::Dessert => "디저트류",
            FoodGroup::Brunch => "브런치류",
            FoodGroup::Other => "기타",
        }
    }
}

impl fmt::Display for FoodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for FoodGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Category substrings per group. First matching row wins.
const CATEGORY_TABLE: &[(FoodGroup, &[&str])] = &[
    (FoodGroup::Rice, &["밥류", "면 및 만두류"]),
    (FoodGroup::Soup, &["국 및 탕류", "찌개 및 전골류"]),
    (
        FoodGroup::SideDish,
        &[
            "전·적 및 부침류",
            "조림류",
            "나물·숙채류",
            "튀김류",
            "구이류",
            "장류",
            "양념류",
            "찜류",
            "볶음류",
            "생채·무침류",
            "젓갈류",
            "김치류",
            "장아찌·절임류",
        ],
    ),
    (
        FoodGroup::Dessert,
        &[
            "빵 및 과자류",
            "음료 및 차류",
            "유제품류 및 빙과류",
            "곡류, 서류 제품",
        ],
    ),
    (FoodGroup::Brunch, &["브런치", "샌드위치"]),
];

/// Map a raw category label to its food group.
///
/// Total over all inputs; unknown categories fall back to [`FoodGroup::Other`].
pub fn classify(category: &str) -> FoodGroup {
    CATEGORY_TABLE
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| category.contains(n)))
        .map(|(group, _)| *group)
        .unwrap_or(FoodGroup::Other)
}

/// Classify a catalog item by its category.
#[inline]
pub fn classify_item(item: &FoodItem) -> FoodGroup {
    classify(&item.category)
}
