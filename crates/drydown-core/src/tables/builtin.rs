use std::sync::LazyLock;

use super::schema::{
    DocumentationRequirementDef, DocumentationTableDef, DryingStandardTableDef,
    MaterialTableDef, MoldContainmentLevelDef, MoldContainmentTableDef, RemediationStepDef,
    RemediationStepTableDef, WaterCategoryDef, WaterCategoryTableDef, WaterClassDef,
    WaterClassTableDef,
};
use crate::model::{Category, Class, ContainmentLevel, DocumentationPhase};

const WATER_CATEGORIES_JSON: &str = include_str!("../../../../rules/water-categories.json");
const WATER_CLASSES_JSON: &str = include_str!("../../../../rules/water-classes.json");
const MOLD_CONTAINMENT_JSON: &str = include_str!("../../../../rules/mold-containment.json");
const DRYING_STANDARDS_JSON: &str = include_str!("../../../../rules/drying-standards.json");
const MATERIAL_DECISIONS_JSON: &str = include_str!("../../../../rules/material-decisions.json");
const DOCUMENTATION_JSON: &str = include_str!("../../../../rules/documentation.json");
const REMEDIATION_STEPS_JSON: &str = include_str!("../../../../rules/remediation-steps.json");

static WATER_CATEGORIES: LazyLock<WaterCategoryTableDef> = LazyLock::new(|| {
    serde_json::from_str(WATER_CATEGORIES_JSON).expect("embedded water-categories.json is valid")
});

static WATER_CLASSES: LazyLock<WaterClassTableDef> = LazyLock::new(|| {
    serde_json::from_str(WATER_CLASSES_JSON).expect("embedded water-classes.json is valid")
});

static MOLD_CONTAINMENT: LazyLock<MoldContainmentTableDef> = LazyLock::new(|| {
    serde_json::from_str(MOLD_CONTAINMENT_JSON).expect("embedded mold-containment.json is valid")
});

static DRYING_STANDARDS: LazyLock<DryingStandardTableDef> = LazyLock::new(|| {
    serde_json::from_str(DRYING_STANDARDS_JSON).expect("embedded drying-standards.json is valid")
});

static MATERIAL_DECISIONS: LazyLock<MaterialTableDef> = LazyLock::new(|| {
    let table: MaterialTableDef = serde_json::from_str(MATERIAL_DECISIONS_JSON)
        .expect("embedded material-decisions.json is valid");
    super::validate_material_table(&table).expect("embedded material-decisions.json is valid");
    table
});

static DOCUMENTATION: LazyLock<DocumentationTableDef> = LazyLock::new(|| {
    serde_json::from_str(DOCUMENTATION_JSON).expect("embedded documentation.json is valid")
});

static REMEDIATION_STEPS: LazyLock<RemediationStepTableDef> = LazyLock::new(|| {
    serde_json::from_str(REMEDIATION_STEPS_JSON).expect("embedded remediation-steps.json is valid")
});

/// Get the water category record for a category code.
///
/// Total over [`Category`]; the embedded table covers every code.
pub fn water_category(category: Category) -> &'static WaterCategoryDef {
    WATER_CATEGORIES
        .categories
        .iter()
        .find(|c| c.category == category)
        .expect("embedded table covers all category codes")
}

/// Get the water class record for a class code.
pub fn water_class(class: Class) -> &'static WaterClassDef {
    WATER_CLASSES
        .classes
        .iter()
        .find(|c| c.class == class)
        .expect("embedded table covers all class codes")
}

/// Get the mold containment level record for a level code.
pub fn containment_level(level: ContainmentLevel) -> &'static MoldContainmentLevelDef {
    MOLD_CONTAINMENT
        .levels
        .iter()
        .find(|l| l.level == level)
        .expect("embedded table covers all containment levels")
}

/// Get the built-in drying standards table.
pub fn drying_standards() -> &'static DryingStandardTableDef {
    &DRYING_STANDARDS
}

/// Get the built-in material decision table.
pub fn material_table() -> &'static MaterialTableDef {
    &MATERIAL_DECISIONS
}

/// Get the documentation requirements for a job phase.
pub fn documentation_requirements(phase: DocumentationPhase) -> &'static DocumentationRequirementDef {
    DOCUMENTATION
        .requirements
        .iter()
        .find(|r| r.phase == phase)
        .expect("embedded table covers all documentation phases")
}

/// Get the ordered mold remediation procedure steps.
pub fn remediation_steps() -> &'static [RemediationStepDef] {
    &REMEDIATION_STEPS.steps
}
