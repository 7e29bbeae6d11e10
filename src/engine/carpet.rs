//! # Carpet Area Engine
//!
//! Validates a built-up area and a deduction, then splits the built-up area into
//! the deducted part and the remaining carpet area.
//!
//! Validation is fail-fast in this order:
//!
//! 1. built-up area must be a number above zero
//! 2. deduction value must be a non-zero, non-negative number
//! 3. percentage deductions must not exceed 100
//! 4. fixed deductions must be strictly smaller than the built-up area

use super::number::parse_leading_float;
use super::unit::UnitLabel;
use super::UnknownNameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MAX_PERCENTAGE: f64 = 100.0;

/// How the deduction value is interpreted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeductionMode {
    /// Percentage of the built-up area
    #[default]
    Percentage,
    /// Absolute area in the same unit as the built-up area
    Fixed,
}

impl DeductionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeductionMode::Percentage => "percentage",
            DeductionMode::Fixed => "fixed",
        }
    }
}

impl fmt::Display for DeductionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeductionMode {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" | "percent" | "%" => Ok(DeductionMode::Percentage),
            "fixed" => Ok(DeductionMode::Fixed),
            _ => Err(UnknownNameError::new(
                "deduction mode",
                s,
                &["percentage", "fixed"],
            )),
        }
    }
}

/// Input rejected by the carpet engine. Each variant names one violated precondition.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Please enter a valid positive number for the built-up area")]
    InvalidBuiltUpArea,
    #[error("Please enter a valid positive number for the deduction value")]
    InvalidDeductionValue,
    #[error("Percentage cannot be more than 100%")]
    PercentageOutOfRange,
    #[error("Fixed deduction cannot be equal to or greater than built-up area")]
    FixedDeductionTooLarge,
}

impl ValidationFailure {
    /// Stable machine-readable name
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationFailure::InvalidBuiltUpArea => "InvalidBuiltUpArea",
            ValidationFailure::InvalidDeductionValue => "InvalidDeductionValue",
            ValidationFailure::PercentageOutOfRange => "PercentageOutOfRange",
            ValidationFailure::FixedDeductionTooLarge => "FixedDeductionTooLarge",
        }
    }
}

/// Breakdown produced by a successful calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarpetAreaResult {
    built_up_area: f64,
    deducted_area: f64,
    carpet_area: f64,
    unit: UnitLabel,
    deduction_mode: DeductionMode,
    deduction_value: f64,
}

impl CarpetAreaResult {
    pub fn built_up_area(&self) -> f64 {
        self.built_up_area
    }

    pub fn deducted_area(&self) -> f64 {
        self.deducted_area
    }

    pub fn carpet_area(&self) -> f64 {
        self.carpet_area
    }

    pub fn unit(&self) -> &UnitLabel {
        &self.unit
    }

    pub fn deduction_mode(&self) -> DeductionMode {
        self.deduction_mode
    }

    pub fn deduction_value(&self) -> f64 {
        self.deduction_value
    }

    /// Carpet area as a percentage of the built-up area
    pub fn carpet_ratio(&self) -> f64 {
        self.carpet_area / self.built_up_area * 100.0
    }
}

/// Immutable input to the carpet engine, holding the raw text as entered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarpetAreaRequest {
    built_up_area: String,
    deduction_mode: DeductionMode,
    deduction_value: String,
    unit: UnitLabel,
}

impl CarpetAreaRequest {
    pub fn new(
        built_up_area: impl Into<String>,
        deduction_mode: DeductionMode,
        deduction_value: impl Into<String>,
        unit: UnitLabel,
    ) -> Self {
        Self {
            built_up_area: built_up_area.into(),
            deduction_mode,
            deduction_value: deduction_value.into(),
            unit,
        }
    }

    pub fn built_up_area(&self) -> &str {
        &self.built_up_area
    }

    pub fn deduction_mode(&self) -> DeductionMode {
        self.deduction_mode
    }

    pub fn deduction_value(&self) -> &str {
        &self.deduction_value
    }

    pub fn unit(&self) -> &UnitLabel {
        &self.unit
    }

    pub fn compute(&self) -> Result<CarpetAreaResult, ValidationFailure> {
        compute_carpet_area(
            &self.built_up_area,
            self.deduction_mode,
            &self.deduction_value,
            &self.unit,
        )
    }
}

/// Validate the inputs and compute the carpet area breakdown
pub fn compute_carpet_area(
    built_up_text: &str,
    deduction_mode: DeductionMode,
    deduction_text: &str,
    unit: &UnitLabel,
) -> Result<CarpetAreaResult, ValidationFailure> {
    let built_up = parse_leading_float(built_up_text)
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or(ValidationFailure::InvalidBuiltUpArea)?;

    // Zero is rejected together with negatives: "no deduction" is not a valid input
    let deduction = parse_leading_float(deduction_text)
        .filter(|value| value.is_finite() && *value > 0.0)
        .ok_or(ValidationFailure::InvalidDeductionValue)?;

    let deducted_area = match deduction_mode {
        DeductionMode::Percentage => {
            if deduction > MAX_PERCENTAGE {
                return Err(ValidationFailure::PercentageOutOfRange);
            }
            // Scale the percentage first so a large built-up area cannot overflow
            built_up * (deduction / MAX_PERCENTAGE)
        }
        DeductionMode::Fixed => {
            if deduction >= built_up {
                return Err(ValidationFailure::FixedDeductionTooLarge);
            }
            deduction
        }
    };

    let result = CarpetAreaResult {
        built_up_area: built_up,
        deducted_area,
        carpet_area: built_up - deducted_area,
        unit: unit.clone(),
        deduction_mode,
        deduction_value: deduction,
    };

    tracing::debug!(
        "carpet area computed: built_up={} mode={} deducted={} carpet={}",
        result.built_up_area,
        result.deduction_mode,
        result.deducted_area,
        result.carpet_area
    );

    Ok(result)
}
