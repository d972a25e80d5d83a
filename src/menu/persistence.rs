use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::menu::builder::{build_menu, MenuColumns};
use crate::models::Food;

/// On-disk menu: either a list of food rows or parallel columns.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MenuFile {
    Rows(Vec<Food>),
    Columns(MenuColumns),
}

/// Load a menu from a JSON file.
///
/// Accepts an array of foods (`[{"Name": .., "Value": .., "Calories": ..}]`)
/// or a columnar object (`{"names": [..], "values": [..], "calories": [..]}`).
/// Menu order is preserved; duplicate names are kept.
pub fn load_menu<P: AsRef<Path>>(path: P) -> Result<Vec<Food>> {
    let content = fs::read_to_string(path)?;
    let file: MenuFile = serde_json::from_str(&content)?;
    match file {
        MenuFile::Rows(foods) => Ok(foods),
        MenuFile::Columns(columns) => build_menu(&columns),
    }
}

/// Save a menu as a JSON array of food rows.
pub fn save_menu<P: AsRef<Path>>(path: P, menu: &[Food]) -> Result<()> {
    let json = serde_json::to_string_pretty(menu)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_rows_and_save_roundtrip() {
        let json = r#"[
            {"Name": "yogurt greek", "Value": 10, "Calories": 100, "MaxServings": 3},
            {"Name": "probiotic capsule", "Value": 25, "Calories": 0, "Nutrients": {"protein": 0}}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let menu = load_menu(file.path()).unwrap();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu[0].name, "yogurt greek");
        assert_eq!(menu[0].max_servings, 3);
        assert_eq!(menu[1].calories, 0.0);

        let out_file = NamedTempFile::new().unwrap();
        save_menu(out_file.path(), &menu).unwrap();

        let reloaded = load_menu(out_file.path()).unwrap();
        assert_eq!(reloaded, menu);
    }

    #[test]
    fn test_load_columns() {
        let json = r#"{
            "names": ["yogurt strawberry", "yogurt vanilla", "yogurt vanilla"],
            "values": [3, 3, 3],
            "calories": [90, 90, 90],
            "nutrients": {"sugar": [12, 11, 11]}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let menu = load_menu(file.path()).unwrap();
        assert_eq!(menu.len(), 3);
        assert_eq!(menu[1].name, "yogurt vanilla");
        assert_eq!(menu[2].name, "yogurt vanilla");
        assert_eq!(menu[0].nutrient("sugar"), 12.0);
    }

    #[test]
    fn test_load_columns_length_mismatch() {
        let json = r#"{"names": ["a", "b"], "values": [1], "calories": [10, 20]}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(load_menu(file.path()).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(load_menu("definitely/not/here.json").is_err());
    }
}
