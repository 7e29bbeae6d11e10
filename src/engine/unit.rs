//! Unit tag attached to results for display. No conversion is ever performed.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const SQUARE_FEET: &str = "sqft";
pub const SQUARE_METERS: &str = "sqm";

/// Opaque area unit label, echoed back untouched in results
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitLabel(String);

impl UnitLabel {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Label shown next to area values ("sq. ft", "sq. m", or the raw tag)
    pub fn display_name(&self) -> &str {
        match self.0.as_str() {
            SQUARE_FEET => "sq. ft",
            SQUARE_METERS => "sq. m",
            other => other,
        }
    }

    /// Linear unit the shape dimensions are entered in, when known
    pub fn linear_unit(&self) -> Option<&'static str> {
        match self.0.as_str() {
            SQUARE_FEET => Some("ft"),
            SQUARE_METERS => Some("m"),
            _ => None,
        }
    }
}

impl Default for UnitLabel {
    fn default() -> Self {
        Self::new(SQUARE_FEET)
    }
}

impl fmt::Display for UnitLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UnitLabel {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for UnitLabel {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}
