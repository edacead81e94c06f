//! Water and mold damage classification and drying-equipment sizing.
//!
//! The engine is a pure function library over immutable reference tables:
//! contamination categories, evaporation classes, mold containment levels,
//! drying standards, and a material decision matrix. Callers supply plain
//! measurements (room dimensions, elapsed hours, affected area) and get back
//! classification records, escalation assessments, and equipment counts.
//! Nothing here performs I/O or holds mutable state, so calls are safe from
//! any number of threads.

pub mod classify;
pub mod documentation;
pub mod error;
pub mod materials;
pub mod model;
pub mod sizing;
pub mod tables;

use classify::outcome::{EscalationAssessment, LossAssessment, LossScenario};
use error::DrydownError;
use model::Class;
use sizing::{AirMoverParams, DehumidifierParams};

/// Main API entry point: assess one loss scenario end to end.
///
/// Runs the escalation check when elapsed hours are known, resolves the
/// effective category and class records, sizes air movers and dehumidifiers
/// when room geometry is given, and determines the mold containment level
/// when an affected mold area is given. Class 4 scenarios produce no standard
/// equipment estimates; the specialty-drying guidance is surfaced as a
/// warning instead.
pub fn assess_loss(scenario: &LossScenario) -> Result<LossAssessment, DrydownError> {
    let escalation = match scenario.hours_since_loss {
        Some(hours) => classify::assess_category_escalation(scenario.category, hours)?,
        None => EscalationAssessment::unchanged(scenario.category),
    };

    let mut warnings = Vec::new();
    if let Some(warning) = &escalation.warning {
        warnings.push(warning.clone());
    }

    let class_def = tables::builtin::water_class(scenario.class);
    let category_def = tables::builtin::water_category(escalation.current_category);

    let (air_movers, dehumidifiers) = match &scenario.geometry {
        Some(_) if scenario.class == Class::Four => {
            warnings.push(format!(
                "Class 4 specialty drying: standard sizing formulas do not apply. {}",
                class_def.equipment_guidelines.dehumidification_formula
            ));
            (None, None)
        }
        Some(geometry) => {
            geometry.validate()?;

            let mover_params = AirMoverParams {
                floor_sq_ft: geometry.floor_sq_ft(),
                // Class 3 losses saturate ceilings; add overhead coverage.
                ceiling_sq_ft: (scenario.class == Class::Three)
                    .then(|| geometry.floor_sq_ft()),
                linear_ft_wall: geometry.linear_ft_wall(),
                wall_insets_over_18in: geometry.wall_insets_over_18in,
            };
            let movers = sizing::air_movers(scenario.class, &mover_params)?;

            let dehus = match scenario.dehumidifier_aham_pints {
                Some(aham) => Some(sizing::dehumidifiers(
                    scenario.class,
                    &DehumidifierParams {
                        length_ft: geometry.length_ft,
                        width_ft: geometry.width_ft,
                        height_ft: geometry.height_ft,
                        aham_pints: aham,
                        chart_factor: None,
                    },
                )?),
                None => None,
            };

            (Some(movers), dehus)
        }
        None => (None, None),
    };

    let containment = match scenario.mold_affected_sq_ft {
        Some(sq_ft) => Some(classify::determine_containment_level(sq_ft)?.clone()),
        None => None,
    };

    Ok(LossAssessment {
        escalation,
        category: category_def.clone(),
        class: class_def.clone(),
        containment,
        air_movers,
        dehumidifiers,
        warnings,
    })
}
