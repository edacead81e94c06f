use drydown_core::error::DrydownError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), DrydownError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
