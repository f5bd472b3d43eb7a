//! Typed path segments.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::entity::InspectionPlanEntity;

/// The empty part segment, shared by every root path.
pub(crate) static EMPTY_PART: PathElement = PathElement::empty_part();

/// One labeled, typed step in an inspection-plan path.
///
/// Two elements are equal when their entity kinds match and their values
/// match ignoring case. Hashing and ordering follow the same rule, so
/// `"Bore"` and `"BORE"` land in the same hash bucket.
///
/// # Examples
///
/// ```
/// use piweb_path::PathElement;
///
/// assert_eq!(PathElement::part("Engine"), PathElement::part("ENGINE"));
/// assert_ne!(PathElement::part("Bore"), PathElement::characteristic("Bore"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathElement {
    value: String,
    #[serde(rename = "type")]
    entity: InspectionPlanEntity,
}

impl PathElement {
    /// Creates a segment of the given kind.
    pub fn new(entity: InspectionPlanEntity, value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            entity,
        }
    }

    /// Creates a part segment.
    pub fn part(value: impl Into<String>) -> Self {
        Self::new(InspectionPlanEntity::Part, value)
    }

    /// Creates a characteristic segment.
    pub fn characteristic(value: impl Into<String>) -> Self {
        Self::new(InspectionPlanEntity::Characteristic, value)
    }

    /// The empty part segment. Combining a path with it is a no-op.
    pub const fn empty_part() -> Self {
        Self {
            value: String::new(),
            entity: InspectionPlanEntity::Part,
        }
    }

    /// Returns the segment label.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the entity kind this segment denotes.
    pub fn entity(&self) -> InspectionPlanEntity {
        self.entity
    }

    /// Returns `true` for the empty sentinel segment.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    fn folded(&self) -> impl Iterator<Item = char> + '_ {
        self.value.chars().flat_map(char::to_lowercase)
    }
}

impl PartialEq for PathElement {
    fn eq(&self, other: &Self) -> bool {
        if self.entity != other.entity {
            return false;
        }
        if self.value.is_ascii() && other.value.is_ascii() {
            return self.value.eq_ignore_ascii_case(&other.value);
        }
        self.folded().eq(other.folded())
    }
}

impl Eq for PathElement {}

impl Hash for PathElement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.entity.hash(state);
        for c in self.folded() {
            state.write_u32(c as u32);
        }
    }
}

impl PartialOrd for PathElement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PathElement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.entity
            .cmp(&other.entity)
            .then_with(|| self.folded().cmp(other.folded()))
    }
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
