//! Material catalog loaded from backend-shaped JSON
//!
//! Accepts either the bare `GET /api/materials` array or an object with
//! `materials` and `projectMaterials` lists.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::search::{filter_records, Material, ProjectMaterialRow, QueryState};

/// Catalog load/parse error
#[derive(Debug)]
pub enum CatalogError {
    /// File read failed
    IoError(std::io::Error),
    /// Not valid JSON
    ParseError(String),
    /// Valid JSON, wrong shape
    FormatError(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::IoError(e) => write!(f, "failed to read catalog: {}", e),
            CatalogError::ParseError(s) => write!(f, "invalid catalog JSON: {}", s),
            CatalogError::FormatError(s) => write!(f, "unexpected catalog format: {}", s),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::IoError(e)
    }
}

/// Object form of the catalog file
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogFile {
    #[serde(default)]
    materials: Vec<Material>,
    #[serde(default)]
    project_materials: Vec<ProjectMaterialRow>,
}

/// Materials and project allocations available for searching
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub materials: Vec<Material>,
    pub project_materials: Vec<ProjectMaterialRow>,
}

impl Catalog {
    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let value: serde_json::Value =
            serde_json::from_reader(reader).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        let catalog = Self::from_json_value(value)?;
        log::debug!(
            "catalog loaded from {}: {} materials, {} project rows",
            path.display(),
            catalog.materials.len(),
            catalog.project_materials.len()
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, CatalogError> {
        let value: serde_json::Value =
            serde_json::from_str(json_str).map_err(|e| CatalogError::ParseError(e.to_string()))?;

        Self::from_json_value(value)
    }

    fn from_json_value(value: serde_json::Value) -> Result<Self, CatalogError> {
        let format_error = |e: serde_json::Error| CatalogError::FormatError(e.to_string());

        if value.is_array() {
            let materials: Vec<Material> = serde_json::from_value(value).map_err(format_error)?;
            return Ok(Self {
                materials,
                project_materials: Vec::new(),
            });
        }

        if !value.is_object() {
            return Err(CatalogError::FormatError(
                "expected an array of materials or an object".into(),
            ));
        }

        let file: CatalogFile = serde_json::from_value(value).map_err(format_error)?;
        Ok(Self {
            materials: file.materials,
            project_materials: file.project_materials,
        })
    }

    /// Materials matching the query
    pub fn search_materials(&self, query: &QueryState) -> Vec<&Material> {
        filter_records(query, &self.materials)
    }

    /// Project rows matching the query
    pub fn search_project_materials(&self, query: &QueryState) -> Vec<&ProjectMaterialRow> {
        filter_records(query, &self.project_materials)
    }

    pub fn material(&self, id: i64) -> Option<&Material> {
        self.materials.iter().find(|m| m.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array() {
        let json = r#"[
            {"id": 1, "name": "Четка", "marketId": "M-55"},
            {"id": 2, "name": "Шраф", "marketId": "SCR-10", "seller": "Ekskluziv"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.materials.len(), 2);
        assert!(catalog.project_materials.is_empty());
        assert_eq!(catalog.material(2).map(|m| m.name.as_str()), Some("Шраф"));
    }

    #[test]
    fn test_full_object() {
        let json = r#"{
            "materials": [{"id": 1, "name": "Четка", "marketId": "M-55"}],
            "projectMaterials": [
                {"id": 10, "materialId": 1, "materialName": "Четка", "marketId": "M-55", "amount": 3}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.materials.len(), 1);
        assert_eq!(catalog.project_materials.len(), 1);
        assert_eq!(catalog.project_materials[0].material_id, 1);
    }

    #[test]
    fn test_missing_lists_default_empty() {
        let catalog = Catalog::from_json("{}").unwrap();
        assert!(catalog.materials.is_empty());
        assert!(catalog.project_materials.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Catalog::from_json("[{"), Err(CatalogError::ParseError(_))));
    }

    #[test]
    fn test_wrong_shape() {
        assert!(matches!(Catalog::from_json("42"), Err(CatalogError::FormatError(_))));
        assert!(matches!(
            Catalog::from_json(r#"[{"name": "no id"}]"#),
            Err(CatalogError::FormatError(_))
        ));
    }

    #[test]
    fn test_format_error_names_the_field() {
        let Err(CatalogError::FormatError(msg)) = Catalog::from_json(r#"[{"id": 1}, {"id": "x"}]"#)
        else {
            panic!("expected a format error");
        };
        assert!(msg.contains("invalid type"), "{}", msg);
        assert!(!msg.contains("untagged"), "{}", msg);

        let Err(CatalogError::FormatError(msg)) =
            Catalog::from_json(r#"{"projectMaterials": [{"id": 1}]}"#)
        else {
            panic!("expected a format error");
        };
        assert!(msg.contains("materialId"), "{}", msg);
    }

    #[test]
    fn test_search() {
        let json = r#"{
            "materials": [
                {"id": 1, "name": "Четка", "marketId": "M-55"},
                {"id": 2, "name": "Шраф", "marketId": "SCR-10"}
            ],
            "projectMaterials": [
                {"id": 10, "materialId": 2, "materialName": "Шраф", "marketId": "SCR-10", "amount": 100}
            ]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();

        let found = catalog.search_materials(&QueryState::new("shraf"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);

        let rows = catalog.search_project_materials(&QueryState::new("scr"));
        assert_eq!(rows.len(), 1);
        assert!(catalog.search_project_materials(&QueryState::new("chetka")).is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Catalog::load("/nonexistent/kiril/catalog.json");
        assert!(matches!(result, Err(CatalogError::IoError(_))));
    }
}
