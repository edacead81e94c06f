use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DrydownError {
    #[error("invalid {kind} code {code} (expected {expected})")]
    InvalidCode {
        kind: &'static str,
        code: u8,
        expected: &'static str,
    },

    #[error("unknown material '{0}': no entry matches")]
    UnknownMaterial(String),

    #[error("invalid {name}: {value} ({constraint})")]
    InvalidGeometry {
        name: &'static str,
        value: Decimal,
        constraint: &'static str,
    },

    #[error(
        "Class 4 specialty drying: standard air mover and dehumidification formulas do not apply. \
         Use desiccant dehumidifiers, heat drying mats, or injection drying systems."
    )]
    SpecialtyDrying,

    #[error(
        "unrecognized documentation phase '{0}'. Expected one of: assessment, daily monitoring, \
         equipment log, completion"
    )]
    UnknownPhase(String),

    #[error("failed to load table from {path}: {reason}")]
    TableLoad { path: PathBuf, reason: String },

    #[error("invalid table: {0}")]
    TableInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
