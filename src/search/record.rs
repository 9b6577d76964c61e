//! Records that can be filtered by the bilingual search

use serde::{Deserialize, Serialize};

/// Anything with a (usually Cyrillic) display name and a Latin market identifier.
pub trait SearchableRecord {
    fn display_name(&self) -> &str;

    fn market_identifier(&self) -> &str;

    /// Label shown in the material picker: `"<name> (<market id>)"`
    fn option_label(&self) -> String {
        format!("{} ({})", self.display_name(), self.market_identifier())
    }
}

/// Catalog material as returned by the backend
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub market_id: String,
    #[serde(default)]
    pub seller: Option<String>,
    #[serde(default)]
    pub picture_url: Option<String>,
}

impl Material {
    pub fn new(id: i64, name: impl Into<String>, market_id: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            market_id: market_id.into(),
            seller: None,
            picture_url: None,
        }
    }

    pub fn with_seller(mut self, seller: impl Into<String>) -> Self {
        self.seller = Some(seller.into());
        self
    }

    pub fn with_picture_url(mut self, url: impl Into<String>) -> Self {
        self.picture_url = Some(url.into());
        self
    }
}

impl SearchableRecord for Material {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn market_identifier(&self) -> &str {
        &self.market_id
    }
}

/// A material allocated to a project, with the amount used
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectMaterialRow {
    pub id: i64,
    pub material_id: i64,
    #[serde(default)]
    pub material_name: String,
    #[serde(default)]
    pub market_id: String,
    #[serde(default)]
    pub amount: f64,
}

impl SearchableRecord for ProjectMaterialRow {
    fn display_name(&self) -> &str {
        &self.material_name
    }

    fn market_identifier(&self) -> &str {
        &self.market_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label() {
        let m = Material::new(1, "Четка", "M-55").with_seller("Ekskluziv");
        assert_eq!(m.option_label(), "Четка (M-55)");
        assert_eq!(m.seller.as_deref(), Some("Ekskluziv"));
    }

    #[test]
    fn test_material_from_backend_json() {
        let json = r#"{"id": 7, "name": "Ламинат", "marketId": "LAM-8", "seller": "Ekskluziv", "pictureUrl": null}"#;
        let m: Material = serde_json::from_str(json).unwrap();
        assert_eq!(m.id, 7);
        assert_eq!(m.display_name(), "Ламинат");
        assert_eq!(m.market_identifier(), "LAM-8");
        assert_eq!(m.seller.as_deref(), Some("Ekskluziv"));
        assert!(m.picture_url.is_none());
    }

    #[test]
    fn test_material_missing_optional_fields() {
        let json = r#"{"id": 1, "name": "Шраф", "marketId": "S-1"}"#;
        let m: Material = serde_json::from_str(json).unwrap();
        assert!(m.seller.is_none());
        assert!(m.picture_url.is_none());
    }

    #[test]
    fn test_project_material_row() {
        let json = r#"{"id": 3, "materialId": 7, "materialName": "Ламинат", "marketId": "LAM-8", "amount": 12.5}"#;
        let row: ProjectMaterialRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.material_id, 7);
        assert_eq!(row.display_name(), "Ламинат");
        assert_eq!(row.market_identifier(), "LAM-8");
        assert!((row.amount - 12.5).abs() < f64::EPSILON);
    }
}
