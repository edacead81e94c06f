use drydown_core::error::DrydownError;
use drydown_core::model::Class;
use drydown_core::sizing::{self, AirMoverParams, DehumidifierParams};
use rust_decimal::Decimal;

use crate::output;

fn parse_class(code: u8) -> Result<Class, DrydownError> {
    Class::from_code(code).ok_or(DrydownError::InvalidCode {
        kind: "water class",
        code,
        expected: "1-4",
    })
}

pub fn air_movers(
    class: u8,
    floor: Decimal,
    wall: Decimal,
    ceiling: Option<Decimal>,
    insets: u32,
    output_format: &str,
) -> Result<(), DrydownError> {
    let class = parse_class(class)?;
    let params = AirMoverParams {
        floor_sq_ft: floor,
        ceiling_sq_ft: ceiling,
        linear_ft_wall: wall,
        wall_insets_over_18in: insets,
    };

    let estimate = sizing::air_movers(class, &params)?;

    match output_format {
        "json" => output::json::print(&estimate)?,
        _ => output::table::print_air_movers(&estimate),
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn dehumidifiers(
    class: u8,
    length: Decimal,
    width: Decimal,
    height: Decimal,
    aham: Decimal,
    factor: Option<Decimal>,
    output_format: &str,
) -> Result<(), DrydownError> {
    let class = parse_class(class)?;
    let params = DehumidifierParams {
        length_ft: length,
        width_ft: width,
        height_ft: height,
        aham_pints: aham,
        chart_factor: factor,
    };

    let estimate = sizing::dehumidifiers(class, &params)?;

    match output_format {
        "json" => output::json::print(&estimate)?,
        _ => output::table::print_dehumidifiers(aham, &estimate),
    }

    Ok(())
}
