//! Documentation requirement lookups for the job phases of a drying project,
//! plus the ordered mold remediation procedure.

use crate::model::DocumentationPhase;
use crate::tables::builtin;
use crate::tables::schema::{DocumentationRequirementDef, RemediationStepDef};

/// Required capture items and frequency for a documentation phase.
///
/// Total over [`DocumentationPhase`]. The caller renders these as checklists;
/// no domain knowledge is needed on that side.
pub fn documentation_requirements(
    phase: DocumentationPhase,
) -> &'static DocumentationRequirementDef {
    builtin::documentation_requirements(phase)
}

/// The mold remediation procedure, in execution order.
pub fn remediation_steps() -> &'static [RemediationStepDef] {
    builtin::remediation_steps()
}
