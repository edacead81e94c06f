use drydown_core::error::DrydownError;
use drydown_core::materials;
use drydown_core::tables;
use std::path::{Path, PathBuf};

use crate::output;

pub fn lookup(
    name: &str,
    table_path: Option<PathBuf>,
    output_format: &str,
) -> Result<(), DrydownError> {
    let custom;
    let decision = match table_path {
        Some(path) => {
            custom = tables::load_material_table(&path)?;
            materials::material_decision_in(&custom, name)
        }
        None => materials::material_decision(name),
    };

    let decision = decision.ok_or_else(|| DrydownError::UnknownMaterial(name.to_string()))?;

    match output_format {
        "json" => output::json::print(decision)?,
        _ => output::table::print_material_decision(decision),
    }

    Ok(())
}

pub fn list() -> Result<(), DrydownError> {
    let table = tables::builtin::material_table();
    println!("{} (v{})\n", table.name, table.version);

    let max_name = table
        .materials
        .iter()
        .map(|m| m.material.len())
        .max()
        .unwrap_or(20);

    for entry in &table.materials {
        let verdict = if entry.can_be_remediated {
            "clean in place"
        } else {
            "remove & replace"
        };
        println!(
            "  {:<width$}  {:<12}  {}",
            entry.material,
            entry.porosity.to_string(),
            verdict,
            width = max_name
        );
    }
    println!("\nEntry order is significant: lookup returns the first substring match.");

    Ok(())
}

pub fn validate(file: &Path) -> Result<(), DrydownError> {
    let table = tables::load_material_table(file)?;

    println!("Table '{}' (v{}) is valid.", table.name, table.version);
    println!("  Materials: {} entries", table.materials.len());

    // Check for potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    for (i, entry) in table.materials.iter().enumerate() {
        let needle = entry.material.to_lowercase();
        for earlier in &table.materials[..i] {
            if earlier.material.to_lowercase().contains(&needle) {
                warnings.push(format!(
                    "entry '{}' is shadowed for exact-name queries by earlier entry '{}'",
                    entry.material, earlier.material
                ));
            }
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
