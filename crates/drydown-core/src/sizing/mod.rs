//! Drying equipment sizing from room geometry.
//!
//! Air mover counts come from floor area, affected wall length, and optional
//! ceiling area; dehumidifier counts from room volume and a class-dependent
//! chart factor. Every division rounds up: under-provisioning silently
//! extends drying time, so a fractional unit always becomes a whole one.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::DrydownError;
use crate::model::Class;

const FLOOR_SQ_FT_LOW: Decimal = Decimal::from_parts(70, 0, 0, false, 0);
const FLOOR_SQ_FT_HIGH: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const WALL_LINEAR_FT_LOW: Decimal = Decimal::from_parts(16, 0, 0, false, 0);
const WALL_LINEAR_FT_HIGH: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
const CEILING_SQ_FT_LOW: Decimal = Decimal::from_parts(150, 0, 0, false, 0);
const CEILING_SQ_FT_HIGH: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Inputs for the air mover placement formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirMoverParams {
    pub floor_sq_ft: Decimal,
    /// Wet ceiling or upper-wall area. Only counted when present (overhead
    /// saturation, typically Class 3).
    #[serde(default)]
    pub ceiling_sq_ft: Option<Decimal>,
    pub linear_ft_wall: Decimal,
    /// Wall insets or offsets deeper than 18 inches; each adds one unit.
    #[serde(default)]
    pub wall_insets_over_18in: u32,
}

/// Air mover count range with the per-surface breakdown that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirMoverEstimate {
    pub low: u32,
    pub high: u32,
    pub breakdown: String,
}

/// Inputs for the dehumidification formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DehumidifierParams {
    pub length_ft: Decimal,
    pub width_ft: Decimal,
    pub height_ft: Decimal,
    /// Manufacturer AHAM rating (pints/day) of the dehumidifier model used.
    pub aham_pints: Decimal,
    /// Chart factor override. Defaults to the class LGR factor.
    #[serde(default)]
    pub chart_factor: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DehumidifierEstimate {
    pub cubic_ft: Decimal,
    pub chart_factor: Decimal,
    /// Total pints per day of removal capacity needed at AHAM rating.
    pub ppd_needed: u32,
    pub units_needed: u32,
}

/// Estimate the number of air movers for an affected room.
///
/// Floor and wall estimates overlap (the same unit dries both low wall and
/// floor edge), so the larger of the two is taken; ceiling coverage and inset
/// units are additive. The result never drops below one unit per room.
///
/// Refused for Class 4: standard per-area formulas do not apply to specialty
/// drying of low-permeance materials.
pub fn air_movers(class: Class, params: &AirMoverParams) -> Result<AirMoverEstimate, DrydownError> {
    if class == Class::Four {
        return Err(DrydownError::SpecialtyDrying);
    }

    require_positive("floor_sq_ft", params.floor_sq_ft)?;
    require_positive("linear_ft_wall", params.linear_ft_wall)?;
    if let Some(ceiling) = params.ceiling_sq_ft {
        require_positive("ceiling_sq_ft", ceiling)?;
    }

    let floor_low = ceil_units(params.floor_sq_ft, FLOOR_SQ_FT_LOW)?;
    let floor_high = ceil_units(params.floor_sq_ft, FLOOR_SQ_FT_HIGH)?;
    let wall_low = ceil_units(params.linear_ft_wall, WALL_LINEAR_FT_LOW)?;
    let wall_high = ceil_units(params.linear_ft_wall, WALL_LINEAR_FT_HIGH)?;
    let (ceiling_low, ceiling_high) = match params.ceiling_sq_ft {
        Some(ceiling) => (
            ceil_units(ceiling, CEILING_SQ_FT_LOW)?,
            ceil_units(ceiling, CEILING_SQ_FT_HIGH)?,
        ),
        None => (0, 0),
    };
    let insets = params.wall_insets_over_18in;

    let low = (floor_low.max(wall_low) + ceiling_low + insets).max(1);
    let high = (floor_high.max(wall_high) + ceiling_high + insets).max(1);

    let mut breakdown = format!(
        "Floor: {floor_low}-{floor_high}, Wall: {wall_low}-{wall_high}"
    );
    if params.ceiling_sq_ft.is_some() {
        breakdown.push_str(&format!(", Ceiling: {ceiling_low}-{ceiling_high}"));
    }
    breakdown.push_str(&format!(", Insets: +{insets}"));

    Ok(AirMoverEstimate { low, high, breakdown })
}

/// Estimate dehumidifier units for an affected room.
///
/// Cubic footage divided by the chart factor gives the pints-per-day removal
/// load; dividing by the unit's AHAM rating gives the unit count. Refused for
/// Class 4, where chart factors are undefined.
pub fn dehumidifiers(
    class: Class,
    params: &DehumidifierParams,
) -> Result<DehumidifierEstimate, DrydownError> {
    if class == Class::Four {
        return Err(DrydownError::SpecialtyDrying);
    }

    let factor = params
        .chart_factor
        .or_else(|| class.default_lgr_factor())
        .ok_or(DrydownError::SpecialtyDrying)?;

    require_positive("length_ft", params.length_ft)?;
    require_positive("width_ft", params.width_ft)?;
    require_positive("height_ft", params.height_ft)?;
    require_positive("aham_pints", params.aham_pints)?;
    require_positive("chart_factor", factor)?;

    let cubic_ft = params.length_ft * params.width_ft * params.height_ft;
    let ppd_needed = ceil_units(cubic_ft, factor)?;
    let units_needed = ceil_units(Decimal::from(ppd_needed), params.aham_pints)?;

    Ok(DehumidifierEstimate {
        cubic_ft,
        chart_factor: factor,
        ppd_needed,
        units_needed,
    })
}

fn require_positive(name: &'static str, value: Decimal) -> Result<(), DrydownError> {
    if value <= Decimal::ZERO {
        return Err(DrydownError::InvalidGeometry {
            name,
            value,
            constraint: "must be greater than zero",
        });
    }
    Ok(())
}

fn ceil_units(numerator: Decimal, denominator: Decimal) -> Result<u32, DrydownError> {
    (numerator / denominator)
        .ceil()
        .to_u32()
        .ok_or(DrydownError::InvalidGeometry {
            name: "result",
            value: numerator,
            constraint: "out of range for a unit count",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn params(floor: Decimal, wall: Decimal) -> AirMoverParams {
        AirMoverParams {
            floor_sq_ft: floor,
            ceiling_sq_ft: None,
            linear_ft_wall: wall,
            wall_insets_over_18in: 0,
        }
    }

    #[test]
    fn test_air_movers_reference_room() {
        // 12x15 room: floor ceil(180/70)=3 .. ceil(180/50)=4,
        // wall ceil(48/16)=3 .. ceil(48/10)=5 -> low max(3,3)=3, high max(4,5)=5
        let est = air_movers(Class::Two, &params(dec!(180), dec!(48))).unwrap();
        assert_eq!(est.low, 3);
        assert_eq!(est.high, 5);
        assert!(est.breakdown.contains("Floor: 3-4"));
        assert!(est.breakdown.contains("Wall: 3-5"));
    }

    #[test]
    fn test_air_movers_ceiling_is_additive() {
        // Saturated 500 sq ft ceiling adds ceil(500/150)=4 .. ceil(500/100)=5
        let est = air_movers(
            Class::Three,
            &AirMoverParams {
                floor_sq_ft: dec!(500),
                ceiling_sq_ft: Some(dec!(500)),
                linear_ft_wall: dec!(90),
                wall_insets_over_18in: 0,
            },
        )
        .unwrap();
        // floor 8..10, wall 6..9 -> base 8..10, plus ceiling 4..5
        assert_eq!(est.low, 12);
        assert_eq!(est.high, 15);
        assert!(est.breakdown.contains("Ceiling: 4-5"));
    }

    #[test]
    fn test_air_movers_insets_add_units() {
        let mut p = params(dec!(180), dec!(48));
        p.wall_insets_over_18in = 2;
        let est = air_movers(Class::Two, &p).unwrap();
        assert_eq!(est.low, 5);
        assert_eq!(est.high, 7);
        assert!(est.breakdown.contains("Insets: +2"));
    }

    #[test]
    fn test_air_movers_minimum_one_unit() {
        let est = air_movers(Class::One, &params(dec!(4), dec!(3))).unwrap();
        assert_eq!(est.low, 1);
        assert!(est.high >= est.low);
    }

    #[test]
    fn test_air_movers_class_four_refused() {
        let err = air_movers(Class::Four, &params(dec!(180), dec!(48))).unwrap_err();
        assert!(matches!(err, DrydownError::SpecialtyDrying));
    }

    #[test]
    fn test_air_movers_rejects_non_positive_inputs() {
        assert!(air_movers(Class::Two, &params(dec!(0), dec!(48))).is_err());
        assert!(air_movers(Class::Two, &params(dec!(180), dec!(-5))).is_err());
        let p = AirMoverParams {
            floor_sq_ft: dec!(180),
            ceiling_sq_ft: Some(dec!(0)),
            linear_ft_wall: dec!(48),
            wall_insets_over_18in: 0,
        };
        assert!(air_movers(Class::Three, &p).is_err());
    }

    fn dehu_params(aham: Decimal) -> DehumidifierParams {
        DehumidifierParams {
            length_ft: dec!(30),
            width_ft: dec!(50),
            height_ft: dec!(8),
            aham_pints: aham,
            chart_factor: None,
        }
    }

    #[test]
    fn test_dehumidifiers_reference_room_large_units() {
        // 30x50x8 = 12,000 cf / 50 = 240 PPD / 140-pint unit -> 2 units
        let est = dehumidifiers(Class::Two, &dehu_params(dec!(140))).unwrap();
        assert_eq!(est.cubic_ft, dec!(12000));
        assert_eq!(est.ppd_needed, 240);
        assert_eq!(est.units_needed, 2);
    }

    #[test]
    fn test_dehumidifiers_reference_room_small_units() {
        // 240 PPD / 65-pint unit -> 4 units
        let est = dehumidifiers(Class::Two, &dehu_params(dec!(65))).unwrap();
        assert_eq!(est.units_needed, 4);
    }

    #[test]
    fn test_dehumidifiers_class_factors() {
        // Class 1 factor 100 halves the load relative to Class 2
        let est = dehumidifiers(Class::One, &dehu_params(dec!(140))).unwrap();
        assert_eq!(est.chart_factor, dec!(100));
        assert_eq!(est.ppd_needed, 120);

        // Class 3 factor 40 raises it
        let est = dehumidifiers(Class::Three, &dehu_params(dec!(140))).unwrap();
        assert_eq!(est.chart_factor, dec!(40));
        assert_eq!(est.ppd_needed, 300);
    }

    #[test]
    fn test_dehumidifiers_factor_override() {
        let mut p = dehu_params(dec!(140));
        p.chart_factor = Some(dec!(60));
        let est = dehumidifiers(Class::Two, &p).unwrap();
        assert_eq!(est.chart_factor, dec!(60));
        assert_eq!(est.ppd_needed, 200);
        assert_eq!(est.units_needed, 2);
    }

    #[test]
    fn test_dehumidifiers_rounds_up_not_nearest() {
        // 10x10x8 = 800 cf / 50 = 16 PPD exactly; 16 / 140 = 0.11 -> still 1 unit
        let p = DehumidifierParams {
            length_ft: dec!(10),
            width_ft: dec!(10),
            height_ft: dec!(8),
            aham_pints: dec!(140),
            chart_factor: None,
        };
        let est = dehumidifiers(Class::Two, &p).unwrap();
        assert_eq!(est.ppd_needed, 16);
        assert_eq!(est.units_needed, 1);
    }

    #[test]
    fn test_dehumidifiers_class_four_refused() {
        let err = dehumidifiers(Class::Four, &dehu_params(dec!(140))).unwrap_err();
        assert!(matches!(err, DrydownError::SpecialtyDrying));
    }

    #[test]
    fn test_dehumidifiers_class_four_refused_even_with_override() {
        // An explicit factor does not make the standard formula applicable
        let mut p = dehu_params(dec!(140));
        p.chart_factor = Some(dec!(50));
        assert!(dehumidifiers(Class::Four, &p).is_err());
    }

    #[test]
    fn test_dehumidifiers_rejects_non_positive_inputs() {
        let mut p = dehu_params(dec!(140));
        p.height_ft = dec!(0);
        assert!(dehumidifiers(Class::Two, &p).is_err());

        let mut p = dehu_params(dec!(0));
        p.height_ft = dec!(8);
        assert!(dehumidifiers(Class::Two, &p).is_err());
    }
}
