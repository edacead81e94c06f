use serde::{Deserialize, Serialize};

use crate::model::{
    Category, Class, ContainmentLevel, DocumentationPhase, DryingDifficulty, HealthRisk, Porosity,
};

/// A water contamination category record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterCategoryDef {
    pub category: Category,
    pub name: String,
    pub description: String,
    /// Typical sources, in the order field technicians check them.
    pub sources: Vec<String>,
    pub health_risk: HealthRisk,
    pub ppe_required: Vec<String>,
    pub special_procedures: Vec<String>,
    /// Narrative of how this category worsens when left untreated.
    pub time_based_escalation: String,
    pub examples_of_damage: Vec<String>,
}

/// Air mover and dehumidification guidance embedded in a class record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentGuideline {
    pub air_movers_per_linear_ft: String,
    pub air_movers_per_sq_ft: String,
    pub dehumidification_factor: String,
    pub dehumidification_formula: String,
    pub special_notes: Vec<String>,
}

/// A water damage class record (evaporation/absorption load).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterClassDef {
    pub class: Class,
    pub name: String,
    pub description: String,
    pub affected_area: String,
    pub typical_materials: Vec<String>,
    pub drying_difficulty: DryingDifficulty,
    pub equipment_guidelines: EquipmentGuideline,
    pub drying_notes: Vec<String>,
}

/// A mold containment level record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoldContainmentLevelDef {
    pub level: ContainmentLevel,
    pub name: String,
    pub affected_area: String,
    pub description: String,
    pub containment_requirements: Vec<String>,
    pub ppe_requirements: Vec<String>,
    pub air_filtration: Vec<String>,
    pub worker_training: String,
    pub oversight_required: String,
    pub post_remediation_verification: Vec<String>,
}

/// Per-material drying target and measurement method.
///
/// The measurement method must be recorded alongside every reading; moisture
/// meters are not universally calibrated per material, so readings are only
/// comparable within one documented meter setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DryingStandardDef {
    pub material: String,
    pub target_moisture_content: String,
    pub max_acceptable: String,
    pub measurement_method: String,
    pub notes: Vec<String>,
    pub source: String,
}

/// A repair-in-place vs. discard decision for one material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDecisionDef {
    pub material: String,
    pub porosity: Porosity,
    pub can_be_remediated: bool,
    pub remediation_method: String,
    /// Conditions that force disposal regardless of porosity, in order.
    pub must_remove_when: Vec<String>,
}

/// Required documentation captures for one job phase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationRequirementDef {
    pub phase: DocumentationPhase,
    pub title: String,
    pub items: Vec<String>,
    pub frequency: String,
}

/// One step of the mold remediation procedure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemediationStepDef {
    pub step_number: u32,
    pub phase: String,
    pub description: String,
    pub procedures: Vec<String>,
    pub common_mistakes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterCategoryTableDef {
    pub name: String,
    pub version: String,
    pub categories: Vec<WaterCategoryDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterClassTableDef {
    pub name: String,
    pub version: String,
    pub classes: Vec<WaterClassDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoldContainmentTableDef {
    pub name: String,
    pub version: String,
    pub levels: Vec<MoldContainmentLevelDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DryingStandardTableDef {
    pub name: String,
    pub version: String,
    pub standards: Vec<DryingStandardDef>,
}

/// A material decision table. Entry order is a documented contract: lookup is
/// case-insensitive substring match and the first match wins, so more specific
/// names must come before generic ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialTableDef {
    pub name: String,
    pub version: String,
    pub materials: Vec<MaterialDecisionDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentationTableDef {
    pub name: String,
    pub version: String,
    pub requirements: Vec<DocumentationRequirementDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemediationStepTableDef {
    pub name: String,
    pub version: String,
    pub steps: Vec<RemediationStepDef>,
}
