use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::{Category, Class, RoomGeometry};
use crate::sizing::{AirMoverEstimate, DehumidifierEstimate};
use crate::tables::schema::{MoldContainmentLevelDef, WaterCategoryDef, WaterClassDef};

/// Result of a category escalation check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationAssessment {
    /// Category assigned at the original loss assessment.
    pub original_category: Category,
    /// Effective category after accounting for elapsed time. Derived, never
    /// written back into the reference data.
    pub current_category: Category,
    pub escalated: bool,
    /// Human-readable warning when a threshold or advisory band was crossed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl EscalationAssessment {
    pub fn unchanged(category: Category) -> Self {
        EscalationAssessment {
            original_category: category,
            current_category: category,
            escalated: false,
            warning: None,
        }
    }
}

/// Input facts for a full loss assessment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossScenario {
    pub category: Category,
    pub class: Class,
    /// Hours since the loss occurred. When absent, no escalation check runs.
    #[serde(default)]
    pub hours_since_loss: Option<Decimal>,
    /// Affected room dimensions. When absent, no equipment sizing runs.
    #[serde(default)]
    pub geometry: Option<RoomGeometry>,
    /// AHAM rating of the dehumidifier model on the truck.
    #[serde(default)]
    pub dehumidifier_aham_pints: Option<Decimal>,
    /// Visible mold growth area, when the loss involves mold.
    #[serde(default)]
    pub mold_affected_sq_ft: Option<Decimal>,
}

/// Combined classification and sizing result for one loss scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LossAssessment {
    pub escalation: EscalationAssessment,
    /// Reference record for the effective category.
    pub category: WaterCategoryDef,
    pub class: WaterClassDef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containment: Option<MoldContainmentLevelDef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_movers: Option<AirMoverEstimate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dehumidifiers: Option<DehumidifierEstimate>,
    /// Escalation and specialty-drying warnings, in the order raised.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}
