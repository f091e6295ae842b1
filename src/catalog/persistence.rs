use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::catalog::FoodCatalog;
use crate::error::{RecommendError, Result};
use crate::models::FoodItem;

/// Load a food catalog from a CSV or JSON file, chosen by extension.
///
/// CSV files need a `name,category,calories,carbs,protein,fat,serving_size`
/// header. Rows with negative or non-finite nutrients are skipped. Duplicate
/// names are kept as distinct entries.
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let raw = if is_json {
        read_json(path)?
    } else {
        read_csv(path)?
    };

    let total = raw.len();
    let items: Vec<FoodItem> = raw
        .into_iter()
        .filter(|item| {
            let valid = item.is_valid();
            if !valid {
                warn!(food = %item.debug_string(), "skipping catalog row with invalid nutrients");
            }
            valid
        })
        .collect();

    if items.is_empty() {
        return Err(RecommendError::CatalogUnavailable(format!(
            "no usable foods in {}",
            path.display()
        )));
    }

    info!(
        path = %path.display(),
        loaded = items.len(),
        skipped = total - items.len(),
        "loaded food catalog"
    );

    Ok(FoodCatalog::new(items))
}

fn read_json(path: &Path) -> Result<Vec<FoodItem>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn read_csv(path: &Path) -> Result<Vec<FoodItem>> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let mut items = Vec::new();
    for record in reader.deserialize() {
        let item: FoodItem = record?;
        items.push(item);
    }
    Ok(items)
}

/// Save a catalog as pretty-printed JSON.
pub fn save_catalog<P: AsRef<Path>>(path: P, catalog: &FoodCatalog) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog.items())?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    fn temp_file(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_csv() {
        let csv = "name,category,calories,carbs,protein,fat,serving_size\n\
                   쌀밥,밥류,150,33,2.7,0.3,210g\n\
                   된장찌개,찌개 및 전골류,60,5,4,2.5,\n";
        let file = temp_file(".csv", csv);

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].serving_size.as_deref(), Some("210g"));
        assert!(catalog.items()[1].serving_size.is_none());
    }

    #[test]
    fn test_load_json_and_save_roundtrip() {
        let json = r#"[
            {"name": "식빵", "category": "빵 및 과자류", "calories": 265, "carbs": 49, "protein": 9, "fat": 3.2}
        ]"#;
        let file = temp_file(".json", json);
        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);

        let out = Builder::new().suffix(".json").tempfile().unwrap();
        save_catalog(out.path(), &catalog).unwrap();
        let reloaded = load_catalog(out.path()).unwrap();
        assert_eq!(reloaded.items(), catalog.items());
    }

    #[test]
    fn test_invalid_rows_are_skipped_and_duplicates_kept() {
        let csv = "name,category,calories,carbs,protein,fat,serving_size\n\
                   김치,김치류,30,4,2,0.5,\n\
                   김치,김치류,32,4,2,0.6,\n\
                   Broken,김치류,-5,1,1,1,\n";
        let file = temp_file(".csv", csv);

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.items().iter().all(|f| f.name == "김치"));
    }

    #[test]
    fn test_empty_catalog_is_unavailable() {
        let file = temp_file(".json", "[]");
        assert!(matches!(
            load_catalog(file.path()),
            Err(RecommendError::CatalogUnavailable(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            load_catalog("/nonexistent/foods.json"),
            Err(RecommendError::Io(_))
        ));
    }
}
