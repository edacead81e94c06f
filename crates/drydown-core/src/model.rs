use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::DrydownError;

/// Water contamination category (1 = clean, 2 = gray, 3 = black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    One,
    Two,
    Three,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::One, Category::Two, Category::Three];

    pub fn code(&self) -> u8 {
        match self {
            Category::One => 1,
            Category::Two => 2,
            Category::Three => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Category> {
        match code {
            1 => Some(Category::One),
            2 => Some(Category::Two),
            3 => Some(Category::Three),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Category {}", self.code())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Category::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid water category code {code} (expected 1-3)"
            ))
        })
    }
}

/// Water damage class (evaporation/absorption load, 1-4).
///
/// Class 4 is qualitatively different: standard area-based sizing formulas do
/// not apply and specialty drying equipment is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Class {
    One,
    Two,
    Three,
    Four,
}

impl Class {
    pub const ALL: [Class; 4] = [Class::One, Class::Two, Class::Three, Class::Four];

    pub fn code(&self) -> u8 {
        match self {
            Class::One => 1,
            Class::Two => 2,
            Class::Three => 3,
            Class::Four => 4,
        }
    }

    pub fn from_code(code: u8) -> Option<Class> {
        match code {
            1 => Some(Class::One),
            2 => Some(Class::Two),
            3 => Some(Class::Three),
            4 => Some(Class::Four),
            _ => None,
        }
    }

    /// Default LGR dehumidification chart factor for this class.
    ///
    /// Class 4 has no standard factor; callers must use specialty equipment
    /// sizing instead.
    pub fn default_lgr_factor(&self) -> Option<Decimal> {
        match self {
            Class::One => Some(Decimal::from(100)),
            Class::Two => Some(Decimal::from(50)),
            Class::Three => Some(Decimal::from(40)),
            Class::Four => None,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class {}", self.code())
    }
}

impl Serialize for Class {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Class {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        Class::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid water class code {code} (expected 1-4)"))
        })
    }
}

/// Mold remediation containment level (I-III), determined by affected area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContainmentLevel {
    I,
    II,
    III,
}

impl ContainmentLevel {
    pub const ALL: [ContainmentLevel; 3] = [
        ContainmentLevel::I,
        ContainmentLevel::II,
        ContainmentLevel::III,
    ];

    pub fn code(&self) -> u8 {
        match self {
            ContainmentLevel::I => 1,
            ContainmentLevel::II => 2,
            ContainmentLevel::III => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<ContainmentLevel> {
        match code {
            1 => Some(ContainmentLevel::I),
            2 => Some(ContainmentLevel::II),
            3 => Some(ContainmentLevel::III),
            _ => None,
        }
    }
}

impl fmt::Display for ContainmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainmentLevel::I => write!(f, "Level I"),
            ContainmentLevel::II => write!(f, "Level II"),
            ContainmentLevel::III => write!(f, "Level III"),
        }
    }
}

impl Serialize for ContainmentLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ContainmentLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        ContainmentLevel::from_code(code).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "invalid containment level code {code} (expected 1-3)"
            ))
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthRisk {
    Low,
    Moderate,
    Significant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DryingDifficulty {
    Least,
    Moderate,
    Significant,
    Specialty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Porosity {
    #[serde(rename = "porous")]
    Porous,
    #[serde(rename = "semi-porous")]
    SemiPorous,
    #[serde(rename = "non-porous")]
    NonPorous,
}

impl fmt::Display for Porosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Porosity::Porous => write!(f, "porous"),
            Porosity::SemiPorous => write!(f, "semi-porous"),
            Porosity::NonPorous => write!(f, "non-porous"),
        }
    }
}

/// Documentation phase of a drying job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentationPhase {
    Assessment,
    DailyMonitoring,
    EquipmentLog,
    Completion,
}

impl DocumentationPhase {
    pub const ALL: [DocumentationPhase; 4] = [
        DocumentationPhase::Assessment,
        DocumentationPhase::DailyMonitoring,
        DocumentationPhase::EquipmentLog,
        DocumentationPhase::Completion,
    ];

    pub fn from_str_loose(s: &str) -> Option<DocumentationPhase> {
        let lower = s.trim().to_lowercase();
        if lower.contains("assess") || lower.contains("initial") {
            Some(DocumentationPhase::Assessment)
        } else if lower.contains("daily") || lower.contains("monitor") {
            Some(DocumentationPhase::DailyMonitoring)
        } else if lower.contains("equip") {
            Some(DocumentationPhase::EquipmentLog)
        } else if lower.contains("complet") || lower.contains("final") {
            Some(DocumentationPhase::Completion)
        } else {
            None
        }
    }
}

impl fmt::Display for DocumentationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentationPhase::Assessment => write!(f, "Initial Assessment"),
            DocumentationPhase::DailyMonitoring => write!(f, "Daily Monitoring"),
            DocumentationPhase::EquipmentLog => write!(f, "Equipment Log"),
            DocumentationPhase::Completion => write!(f, "Final / Completion"),
        }
    }
}

/// Room dimensions for equipment sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomGeometry {
    pub length_ft: Decimal,
    pub width_ft: Decimal,
    pub height_ft: Decimal,
    /// Number of wall insets or offsets deeper than 18 inches.
    #[serde(default)]
    pub wall_insets_over_18in: u32,
}

impl RoomGeometry {
    pub fn floor_sq_ft(&self) -> Decimal {
        self.length_ft * self.width_ft
    }

    /// Perimeter of the room, used for lower-wall air mover coverage.
    pub fn linear_ft_wall(&self) -> Decimal {
        Decimal::TWO * (self.length_ft + self.width_ft)
    }

    pub fn cubic_ft(&self) -> Decimal {
        self.length_ft * self.width_ft * self.height_ft
    }

    pub fn validate(&self) -> Result<(), DrydownError> {
        for (name, value) in [
            ("length_ft", self.length_ft),
            ("width_ft", self.width_ft),
            ("height_ft", self.height_ft),
        ] {
            if value <= Decimal::ZERO {
                return Err(DrydownError::InvalidGeometry {
                    name,
                    value,
                    constraint: "must be greater than zero",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_category_codes_round_trip() {
        for cat in Category::ALL {
            assert_eq!(Category::from_code(cat.code()), Some(cat));
        }
        assert_eq!(Category::from_code(0), None);
        assert_eq!(Category::from_code(4), None);
    }

    #[test]
    fn test_class_codes_round_trip() {
        for class in Class::ALL {
            assert_eq!(Class::from_code(class.code()), Some(class));
        }
        assert_eq!(Class::from_code(5), None);
    }

    #[test]
    fn test_containment_level_codes_round_trip() {
        for level in ContainmentLevel::ALL {
            assert_eq!(ContainmentLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(ContainmentLevel::from_code(0), None);
    }

    #[test]
    fn test_category_serde_rejects_out_of_range() {
        assert_eq!(serde_json::from_str::<Category>("2").unwrap(), Category::Two);
        assert!(serde_json::from_str::<Category>("4").is_err());
        assert!(serde_json::from_str::<Class>("0").is_err());
        assert!(serde_json::from_str::<ContainmentLevel>("7").is_err());
    }

    #[test]
    fn test_default_lgr_factors() {
        assert_eq!(Class::One.default_lgr_factor(), Some(dec!(100)));
        assert_eq!(Class::Two.default_lgr_factor(), Some(dec!(50)));
        assert_eq!(Class::Three.default_lgr_factor(), Some(dec!(40)));
        assert_eq!(Class::Four.default_lgr_factor(), None);
    }

    #[test]
    fn test_phase_from_str_loose() {
        assert_eq!(
            DocumentationPhase::from_str_loose("Initial Assessment"),
            Some(DocumentationPhase::Assessment)
        );
        assert_eq!(
            DocumentationPhase::from_str_loose("daily"),
            Some(DocumentationPhase::DailyMonitoring)
        );
        assert_eq!(
            DocumentationPhase::from_str_loose("Equipment Log"),
            Some(DocumentationPhase::EquipmentLog)
        );
        assert_eq!(
            DocumentationPhase::from_str_loose("final"),
            Some(DocumentationPhase::Completion)
        );
        assert_eq!(DocumentationPhase::from_str_loose("invoicing"), None);
    }

    #[test]
    fn test_geometry_helpers() {
        let room = RoomGeometry {
            length_ft: dec!(12),
            width_ft: dec!(15),
            height_ft: dec!(8),
            wall_insets_over_18in: 0,
        };
        assert_eq!(room.floor_sq_ft(), dec!(180));
        assert_eq!(room.linear_ft_wall(), dec!(54));
        assert_eq!(room.cubic_ft(), dec!(1440));
        assert!(room.validate().is_ok());
    }

    #[test]
    fn test_geometry_rejects_non_positive_dimensions() {
        let room = RoomGeometry {
            length_ft: dec!(0),
            width_ft: dec!(15),
            height_ft: dec!(8),
            wall_insets_over_18in: 0,
        };
        assert!(room.validate().is_err());
    }
}
