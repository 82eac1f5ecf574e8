//! Structured descriptions assembled by the introspection engine for
//! downstream renderers.

use serde::{Deserialize, Serialize};

/// The minimal identity-plus-text unit shared by methods and parameters.
///
/// `name` is optional because a return-value description carries no name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonDescription {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl CommonDescription {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            name: Some(name.into()),
            description,
        }
    }
}

/// A description plus the declared constraints on a parameter or return
/// value. `required` defaults to `false` when no required-flag annotation is
/// declared (or the declared flag is `false`); bounds stay absent unless a
/// bounds annotation declares them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintDescription {
    pub common: CommonDescription,
    pub required: bool,
    pub min_value: Option<i64>,
    pub max_value: Option<i64>,
}

/// The full structured description of one API-surface method: its own
/// name and description, one constraint entry per declared parameter in
/// declaration order, and a return entry present only if the return value
/// carries at least one recognized annotation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescription {
    pub method: CommonDescription,
    pub params: Vec<ConstraintDescription>,
    pub return_description: Option<ConstraintDescription>,
}
