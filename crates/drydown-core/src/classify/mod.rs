pub mod containment;
pub mod escalation;
pub mod outcome;

pub use containment::determine_containment_level;
pub use escalation::assess_category_escalation;
pub use outcome::{EscalationAssessment, LossAssessment, LossScenario};
