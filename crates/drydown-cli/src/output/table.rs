use drydown_core::classify::EscalationAssessment;
use drydown_core::sizing::{AirMoverEstimate, DehumidifierEstimate};
use drydown_core::tables::schema::{MaterialDecisionDef, MoldContainmentLevelDef};
use rust_decimal::Decimal;

pub fn print_escalation(assessment: &EscalationAssessment) {
    if assessment.escalated {
        println!(
            "Escalated: {} -> {}",
            assessment.original_category, assessment.current_category
        );
    } else {
        println!("Current: {} (no escalation)", assessment.current_category);
    }

    if let Some(warning) = &assessment.warning {
        println!("\n  {}", warning);
    }
}

pub fn print_containment(area: Decimal, level: &MoldContainmentLevelDef) {
    println!("{} sq ft affected -> {}\n", area, level.name);
    println!("  {}", level.description);

    println!("\n  Containment:");
    for item in &level.containment_requirements {
        println!("    - {}", item);
    }

    println!("\n  PPE:");
    for item in &level.ppe_requirements {
        println!("    - {}", item);
    }

    println!("\n  Air filtration:");
    for item in &level.air_filtration {
        println!("    - {}", item);
    }

    println!("\n  Oversight: {}", level.oversight_required);
}

pub fn print_air_movers(estimate: &AirMoverEstimate) {
    if estimate.low == estimate.high {
        println!("Air movers: {}", estimate.low);
    } else {
        println!("Air movers: {}-{}", estimate.low, estimate.high);
    }
    println!("  ({})", estimate.breakdown);
}

pub fn print_dehumidifiers(aham: Decimal, estimate: &DehumidifierEstimate) {
    println!("Dehumidifiers: {} unit(s)", estimate.units_needed);
    println!(
        "  {} cu ft / chart factor {} = {} PPD at AHAM",
        estimate.cubic_ft, estimate.chart_factor, estimate.ppd_needed
    );
    println!(
        "  {} PPD / {}-pint unit = {} unit(s), rounded up",
        estimate.ppd_needed, aham, estimate.units_needed
    );
}

pub fn print_material_decision(decision: &MaterialDecisionDef) {
    let verdict = if decision.can_be_remediated {
        "can be remediated in place"
    } else {
        "remove and replace"
    };
    println!("{} ({}) -> {}\n", decision.material, decision.porosity, verdict);
    println!("  Method: {}", decision.remediation_method);

    if !decision.must_remove_when.is_empty() {
        println!("\n  Must remove when:");
        for condition in &decision.must_remove_when {
            println!("    - {}", condition);
        }
    }
}
