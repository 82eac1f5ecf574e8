//! Declarative annotations attached to types, methods, parameters, and
//! return values.
//!
//! Attaching an annotation means associating one of these records with a
//! member in the metadata records of [`crate::types`]; nothing is enforced at
//! call time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Annotation {
    /// Free-text documentation for the annotated member.
    Description(String),
    /// Marks the annotated value as required. The flag is carried so that a
    /// declared-but-false annotation stays representable.
    Required(bool),
    /// Integer bounds on the annotated value. Each bound is independently
    /// optional.
    IntBounds {
        min: Option<i64>,
        max: Option<i64>,
    },
}

impl Annotation {
    pub fn description(text: impl Into<String>) -> Self {
        Self::Description(text.into())
    }

    pub fn required(flag: bool) -> Self {
        Self::Required(flag)
    }

    pub fn int_bounds(min: impl Into<Option<i64>>, max: impl Into<Option<i64>>) -> Self {
        Self::IntBounds {
            min: min.into(),
            max: max.into(),
        }
    }
}
