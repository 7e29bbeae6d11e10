//! # Calculator
//!
//! Caller-side composition of the two engines. The calculator owns everything a
//! form would: the raw text of each field, the selected shape and its dimensions,
//! and the last successful result. Each calculation snapshots that state into an
//! immutable request and hands it to the engine.
//!
//! When the shape calculator is enabled, a positive shape area is written into the
//! built-up field and the field stops accepting manual edits.

use crate::engine::{
    CarpetAreaRequest, CarpetAreaResult, DeductionMode, DimensionKey, Dimensions,
    ShapeAreaRequest, ShapeKind, UnitLabel, ValidationFailure,
};
use crate::profile::CalculatorProfile;

#[derive(Debug, Clone, Default)]
pub struct Calculator {
    built_up_area: String,
    deduction_mode: DeductionMode,
    deduction_value: String,
    unit: UnitLabel,
    use_shape: bool,
    shape: ShapeKind,
    dimensions: Dimensions,
    shape_area: f64,
    result: Option<CarpetAreaResult>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculator pre-filled with a profile's unit, deduction mode and deduction value
    pub fn from_profile(profile: &CalculatorProfile) -> Self {
        Self {
            unit: profile.unit().clone(),
            deduction_mode: profile.deduction_mode(),
            deduction_value: profile.deduction_value().unwrap_or_default().to_string(),
            ..Self::default()
        }
    }

    pub fn built_up_area(&self) -> &str {
        &self.built_up_area
    }

    /// Set the built-up text. Ignored while the value is derived from a shape.
    pub fn set_built_up_area(&mut self, text: impl Into<String>) {
        if self.is_built_up_derived() {
            tracing::warn!("Built-up area is derived from the shape calculator, ignoring manual value");
            return;
        }
        self.built_up_area = text.into();
    }

    /// True while the shape calculator drives the built-up field
    pub fn is_built_up_derived(&self) -> bool {
        self.use_shape && self.shape_area > 0.0
    }

    pub fn deduction_mode(&self) -> DeductionMode {
        self.deduction_mode
    }

    pub fn set_deduction_mode(&mut self, mode: DeductionMode) {
        self.deduction_mode = mode;
    }

    pub fn deduction_value(&self) -> &str {
        &self.deduction_value
    }

    pub fn set_deduction_value(&mut self, text: impl Into<String>) {
        self.deduction_value = text.into();
    }

    pub fn unit(&self) -> &UnitLabel {
        &self.unit
    }

    pub fn set_unit(&mut self, unit: UnitLabel) {
        self.unit = unit;
    }

    pub fn use_shape(&self) -> bool {
        self.use_shape
    }

    /// Toggle the shape calculator. Enabling it with a positive shape area takes
    /// over the built-up field immediately.
    pub fn set_use_shape(&mut self, enabled: bool) {
        self.use_shape = enabled;
        if self.is_built_up_derived() {
            self.built_up_area = self.shape_area.to_string();
        }
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Switch shape; every dimension entered for the previous shape is dropped
    pub fn select_shape(&mut self, shape: ShapeKind) {
        tracing::debug!("Shape changed from {} to {}", self.shape, shape);
        self.shape = shape;
        self.dimensions.clear();
        self.shape_area = 0.0;
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Store one dimension and recompute the shape area, returning it.
    /// With the shape calculator enabled a positive area replaces the built-up text.
    pub fn set_dimension(&mut self, key: DimensionKey, text: impl Into<String>) -> f64 {
        self.dimensions.set(key, text);
        self.shape_area = ShapeAreaRequest::new(self.shape, self.dimensions.clone()).compute();

        if self.use_shape && self.shape_area > 0.0 {
            self.built_up_area = self.shape_area.to_string();
        }
        self.shape_area
    }

    pub fn shape_area(&self) -> f64 {
        self.shape_area
    }

    /// Immutable snapshot of the current carpet inputs
    pub fn request(&self) -> CarpetAreaRequest {
        CarpetAreaRequest::new(
            self.built_up_area.clone(),
            self.deduction_mode,
            self.deduction_value.clone(),
            self.unit.clone(),
        )
    }

    /// Run the carpet engine. A failure keeps the previous result.
    pub fn calculate(&mut self) -> Result<&CarpetAreaResult, ValidationFailure> {
        match self.request().compute() {
            Ok(result) => Ok(&*self.result.insert(result)),
            Err(failure) => {
                tracing::warn!("Carpet area calculation rejected: {}", failure.kind());
                Err(failure)
            }
        }
    }

    pub fn result(&self) -> Option<&CarpetAreaResult> {
        self.result.as_ref()
    }

    /// Clear entered values and the result; unit, mode, shape and toggle are kept
    pub fn reset(&mut self) {
        self.built_up_area.clear();
        self.deduction_value.clear();
        self.dimensions.clear();
        self.shape_area = 0.0;
        self.result = None;
    }
}
