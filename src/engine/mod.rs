//! # Area Computation Engine
//!
//! Two independent, stateless engines:
//!
//! - [`shape`]: area of a 2-D shape from raw dimension text, `0` when input is incomplete
//! - [`carpet`]: carpet area breakdown from a built-up area and a deduction, or a
//!   [`ValidationFailure`](carpet::ValidationFailure)
//!
//! Neither engine calls the other. Composing them is the caller's job (see
//! [`Calculator`](crate::calculator::Calculator)).

pub mod carpet;
pub mod number;
pub mod shape;
pub mod unit;

pub use carpet::{
    compute_carpet_area, CarpetAreaRequest, CarpetAreaResult, DeductionMode, ValidationFailure,
};
pub use shape::{compute_shape_area, DimensionKey, Dimensions, ShapeAreaRequest, ShapeKind};
pub use unit::UnitLabel;

/// Error returned when a shape kind, dimension key or deduction mode name is not recognised
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind} '{name}' (expected one of: {expected})")]
pub struct UnknownNameError {
    kind: &'static str,
    name: String,
    expected: String,
}

impl UnknownNameError {
    pub(crate) fn new(kind: &'static str, name: &str, expected: &[&str]) -> Self {
        Self {
            kind,
            name: name.to_string(),
            expected: expected.join(", "),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
