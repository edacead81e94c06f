pub mod builtin;
pub mod schema;

use crate::error::DrydownError;
use schema::MaterialTableDef;
use std::collections::HashSet;
use std::path::Path;

/// Load a custom material decision table from a JSON file.
pub fn load_material_table(path: &Path) -> Result<MaterialTableDef, DrydownError> {
    let content = std::fs::read_to_string(path).map_err(|e| DrydownError::TableLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let table: MaterialTableDef =
        serde_json::from_str(&content).map_err(|e| DrydownError::TableLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_material_table(&table)?;
    Ok(table)
}

/// Parse a material decision table from a JSON string.
pub fn parse_material_table_str(json: &str) -> Result<MaterialTableDef, DrydownError> {
    let table: MaterialTableDef = serde_json::from_str(json).map_err(DrydownError::Json)?;
    validate_material_table(&table)?;
    Ok(table)
}

/// Validate that a material decision table is well-formed.
///
/// Lookup is first-substring-match in table order, so duplicate names are
/// rejected outright: a duplicate entry can never be reached and silently
/// shadows the intended decision.
pub fn validate_material_table(table: &MaterialTableDef) -> Result<(), DrydownError> {
    if table.version.is_empty() {
        return Err(DrydownError::TableInvalid("version must not be empty".into()));
    }

    if table.materials.is_empty() {
        return Err(DrydownError::TableInvalid(
            "materials must not be empty".into(),
        ));
    }

    let mut seen = HashSet::new();
    for entry in &table.materials {
        if entry.material.trim().is_empty() {
            return Err(DrydownError::TableInvalid(
                "material name must not be empty".into(),
            ));
        }

        if entry.remediation_method.trim().is_empty() {
            return Err(DrydownError::TableInvalid(format!(
                "material '{}' has no remediation method",
                entry.material
            )));
        }

        if !seen.insert(entry.material.to_lowercase()) {
            return Err(DrydownError::TableInvalid(format!(
                "duplicate material name '{}'",
                entry.material
            )));
        }
    }

    Ok(())
}
