//! Material lookups: remediation decisions and drying standards.
//!
//! Both tables are matched by case-insensitive substring and the first entry
//! in table order wins, so table order is part of the contract. A miss is an
//! explicit `None`; callers must not substitute a default decision.

use crate::tables::builtin;
use crate::tables::schema::{DryingStandardDef, MaterialDecisionDef, MaterialTableDef};

/// Look up the remediation decision for a material in the built-in matrix.
pub fn material_decision(material: &str) -> Option<&'static MaterialDecisionDef> {
    material_decision_in(builtin::material_table(), material)
}

/// Look up the remediation decision for a material in a specific table.
pub fn material_decision_in<'t>(
    table: &'t MaterialTableDef,
    material: &str,
) -> Option<&'t MaterialDecisionDef> {
    let needle = material.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    table
        .materials
        .iter()
        .find(|m| m.material.to_lowercase().contains(&needle))
}

/// Look up the drying standard for a material.
pub fn drying_standard(material: &str) -> Option<&'static DryingStandardDef> {
    let needle = material.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    builtin::drying_standards()
        .standards
        .iter()
        .find(|s| s.material.to_lowercase().contains(&needle))
}
