use rust_decimal::Decimal;

use crate::error::DrydownError;
use crate::model::ContainmentLevel;
use crate::tables::builtin;
use crate::tables::schema::MoldContainmentLevelDef;

/// Determine the mold containment level from total affected square footage.
///
/// Level I below 10 sq ft, Level II from 10 through 30 sq ft (both bounds
/// inclusive), Level III above 30 sq ft. The bounds decide required PPE and
/// whether environmental-professional oversight is mandatory, so they are
/// compared exactly.
pub fn determine_containment_level(
    affected_sq_ft: Decimal,
) -> Result<&'static MoldContainmentLevelDef, DrydownError> {
    if affected_sq_ft < Decimal::ZERO {
        return Err(DrydownError::InvalidGeometry {
            name: "affected_sq_ft",
            value: affected_sq_ft,
            constraint: "must not be negative",
        });
    }

    let level = if affected_sq_ft < Decimal::TEN {
        ContainmentLevel::I
    } else if affected_sq_ft <= Decimal::from(30) {
        ContainmentLevel::II
    } else {
        ContainmentLevel::III
    };

    Ok(builtin::containment_level(level))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_small_area_is_level_one() {
        assert_eq!(
            determine_containment_level(dec!(0)).unwrap().level,
            ContainmentLevel::I
        );
        assert_eq!(
            determine_containment_level(dec!(9.99)).unwrap().level,
            ContainmentLevel::I
        );
    }

    #[test]
    fn test_boundaries_belong_to_level_two() {
        assert_eq!(
            determine_containment_level(dec!(10)).unwrap().level,
            ContainmentLevel::II
        );
        assert_eq!(
            determine_containment_level(dec!(30)).unwrap().level,
            ContainmentLevel::II
        );
    }

    #[test]
    fn test_mid_range_is_level_two() {
        assert_eq!(
            determine_containment_level(dec!(18.5)).unwrap().level,
            ContainmentLevel::II
        );
    }

    #[test]
    fn test_above_thirty_is_level_three() {
        assert_eq!(
            determine_containment_level(dec!(30.01)).unwrap().level,
            ContainmentLevel::III
        );
        assert_eq!(
            determine_containment_level(dec!(500)).unwrap().level,
            ContainmentLevel::III
        );
    }

    #[test]
    fn test_negative_area_rejected() {
        let err = determine_containment_level(dec!(-1)).unwrap_err();
        assert!(matches!(err, DrydownError::InvalidGeometry { .. }));
    }
}
