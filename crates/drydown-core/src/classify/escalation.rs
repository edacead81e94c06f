use rust_decimal::Decimal;

use super::outcome::EscalationAssessment;
use crate::error::DrydownError;
use crate::model::Category;

const ADVISORY_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);
const CAT1_ESCALATION_HOURS: Decimal = Decimal::from_parts(48, 0, 0, false, 0);
const CAT2_ESCALATION_HOURS: Decimal = Decimal::from_parts(72, 0, 0, false, 0);

/// Determine whether a water category has escalated given hours since the loss.
///
/// Transitions are one-way and the thresholds inclusive: Category 1 becomes
/// Category 2 at 48 hours, Category 2 becomes Category 3 at 72 hours, and
/// Category 3 is terminal. Category 1 additionally carries an advisory band
/// from 24 hours up to the 48-hour threshold; Category 2 has no such band.
///
/// The effective category is a derived value. Callers must re-run this on
/// every status check rather than cache the result, since elapsed time only
/// grows.
pub fn assess_category_escalation(
    original: Category,
    elapsed_hours: Decimal,
) -> Result<EscalationAssessment, DrydownError> {
    if elapsed_hours < Decimal::ZERO {
        return Err(DrydownError::InvalidGeometry {
            name: "elapsed_hours",
            value: elapsed_hours,
            constraint: "must not be negative",
        });
    }

    let assessment = match original {
        Category::Three => EscalationAssessment::unchanged(original),
        Category::One if elapsed_hours >= CAT1_ESCALATION_HOURS => EscalationAssessment {
            original_category: original,
            current_category: Category::Two,
            escalated: true,
            warning: Some(format!(
                "Category 1 water untreated for {elapsed_hours}+ hours may have degraded to \
                 Category 2. Reassess contamination level."
            )),
        },
        Category::Two if elapsed_hours >= CAT2_ESCALATION_HOURS => EscalationAssessment {
            original_category: original,
            current_category: Category::Three,
            escalated: true,
            warning: Some(format!(
                "Category 2 water untreated for {elapsed_hours}+ hours may have degraded to \
                 Category 3. Reassess contamination level and PPE requirements."
            )),
        },
        Category::One if elapsed_hours >= ADVISORY_HOURS => EscalationAssessment {
            original_category: original,
            current_category: Category::One,
            escalated: false,
            warning: Some(format!(
                "Category 1 water has been standing for {elapsed_hours} hours. Monitor closely - \
                 may degrade to Category 2 within 24-48 hours total."
            )),
        },
        _ => EscalationAssessment::unchanged(original),
    };

    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_one_fresh_loss_unchanged() {
        let a = assess_category_escalation(Category::One, dec!(6)).unwrap();
        assert_eq!(a.current_category, Category::One);
        assert!(!a.escalated);
        assert!(a.warning.is_none());
    }

    #[test]
    fn test_category_one_advisory_band() {
        let a = assess_category_escalation(Category::One, dec!(24)).unwrap();
        assert_eq!(a.current_category, Category::One);
        assert!(!a.escalated);
        assert!(a.warning.as_deref().unwrap().contains("24 hours"));

        let a = assess_category_escalation(Category::One, dec!(47.9)).unwrap();
        assert_eq!(a.current_category, Category::One);
        assert!(!a.escalated);
        assert!(a.warning.is_some());
    }

    #[test]
    fn test_category_one_escalates_at_exactly_48() {
        let a = assess_category_escalation(Category::One, dec!(48)).unwrap();
        assert_eq!(a.current_category, Category::Two);
        assert!(a.escalated);
        assert!(a.warning.as_deref().unwrap().contains("48"));
    }

    #[test]
    fn test_category_two_no_advisory_below_72() {
        // Only Category 1 has the intermediate advisory band
        let a = assess_category_escalation(Category::Two, dec!(71.9)).unwrap();
        assert_eq!(a.current_category, Category::Two);
        assert!(!a.escalated);
        assert!(a.warning.is_none());

        let a = assess_category_escalation(Category::Two, dec!(30)).unwrap();
        assert!(a.warning.is_none());
    }

    #[test]
    fn test_category_two_escalates_at_exactly_72() {
        let a = assess_category_escalation(Category::Two, dec!(72)).unwrap();
        assert_eq!(a.current_category, Category::Three);
        assert!(a.escalated);
        assert!(a.warning.as_deref().unwrap().contains("PPE"));
    }

    #[test]
    fn test_category_three_is_terminal() {
        for hours in [dec!(0), dec!(48), dec!(72), dec!(10000)] {
            let a = assess_category_escalation(Category::Three, hours).unwrap();
            assert_eq!(a.current_category, Category::Three);
            assert!(!a.escalated);
            assert!(a.warning.is_none());
        }
    }

    #[test]
    fn test_negative_hours_rejected() {
        let err = assess_category_escalation(Category::One, dec!(-0.5)).unwrap_err();
        assert!(matches!(err, DrydownError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_idempotent_for_identical_input() {
        let a = assess_category_escalation(Category::One, dec!(50)).unwrap();
        let b = assess_category_escalation(Category::One, dec!(50)).unwrap();
        assert_eq!(a, b);
    }
}
