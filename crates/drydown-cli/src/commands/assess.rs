use drydown_core::classify;
use drydown_core::error::DrydownError;
use drydown_core::model::Category;
use rust_decimal::Decimal;

use crate::output;

pub fn escalation(category: u8, hours: Decimal, output_format: &str) -> Result<(), DrydownError> {
    let category = Category::from_code(category).ok_or(DrydownError::InvalidCode {
        kind: "water category",
        code: category,
        expected: "1-3",
    })?;

    let assessment = classify::assess_category_escalation(category, hours)?;

    match output_format {
        "json" => output::json::print(&assessment)?,
        _ => output::table::print_escalation(&assessment),
    }

    Ok(())
}

pub fn containment(area: Decimal, output_format: &str) -> Result<(), DrydownError> {
    let level = classify::determine_containment_level(area)?;

    match output_format {
        "json" => output::json::print(level)?,
        _ => output::table::print_containment(area, level),
    }

    Ok(())
}
