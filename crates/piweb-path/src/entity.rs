//! The kinds of inspection-plan entity a path segment can denote.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity kind of a path segment.
///
/// A part may contain sub-parts and characteristics. A characteristic may
/// only contain further characteristics.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum InspectionPlanEntity {
    /// A node that may own parts and characteristics.
    #[default]
    Part,
    /// A measured feature; owns characteristics only.
    Characteristic,
}

impl InspectionPlanEntity {
    /// Returns the single-letter code used in structure strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use piweb_path::InspectionPlanEntity;
    ///
    /// assert_eq!(InspectionPlanEntity::Part.code(), 'P');
    /// assert_eq!(InspectionPlanEntity::Characteristic.code(), 'C');
    /// ```
    pub fn code(self) -> char {
        match self {
            Self::Part => 'P',
            Self::Characteristic => 'C',
        }
    }

    /// Parses a structure-string code, accepting either case.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'P' | 'p' => Some(Self::Part),
            'C' | 'c' => Some(Self::Characteristic),
            _ => None,
        }
    }

    /// Returns `true` for [`InspectionPlanEntity::Part`].
    pub fn is_part(self) -> bool {
        matches!(self, Self::Part)
    }

    /// Returns `true` for [`InspectionPlanEntity::Characteristic`].
    pub fn is_characteristic(self) -> bool {
        matches!(self, Self::Characteristic)
    }
}

impl fmt::Display for InspectionPlanEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Part => f.write_str("Part"),
            Self::Characteristic => f.write_str("Characteristic"),
        }
    }
}
