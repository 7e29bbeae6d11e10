//! # Calculator Profiles
//!
//! Named sets of calculator defaults stored in an INI file, one section per profile:
//!
//! ```ini
//! [default]
//! unit = sqft
//! deduction_mode = percentage
//! deduction_value = 20
//! precision = 2
//!
//! [metric]
//! unit = sqm
//! deduction_mode = fixed
//! deduction_value = 12.5
//! ```
//!
//! Every key is optional. A missing file or section is not an error; callers fall
//! back to [`get_blank_profile`].

use crate::config;
use crate::engine::{DeductionMode, UnitLabel};
use anyhow::{Context, Result};
use ini::Ini;
use std::path::{Path, PathBuf};

const UNIT_KEY: &str = "unit";
const DEDUCTION_MODE_KEY: &str = "deduction_mode";
const DEDUCTION_VALUE_KEY: &str = "deduction_value";
const PRECISION_KEY: &str = "precision";

/// Defaults applied to a calculation when the command line leaves them out
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorProfile {
    unit: UnitLabel,
    deduction_mode: DeductionMode,
    deduction_value: Option<String>,
    precision: usize,
}

impl CalculatorProfile {
    pub fn unit(&self) -> &UnitLabel {
        &self.unit
    }

    pub fn deduction_mode(&self) -> DeductionMode {
        self.deduction_mode
    }

    pub fn deduction_value(&self) -> Option<&str> {
        self.deduction_value.as_deref()
    }

    /// Decimal places used when printing areas
    pub fn precision(&self) -> usize {
        self.precision
    }
}

/// Profile with every setting at its default
pub fn get_blank_profile() -> CalculatorProfile {
    CalculatorProfile {
        unit: UnitLabel::default(),
        deduction_mode: DeductionMode::default(),
        deduction_value: None,
        precision: config::DEFAULT_PRECISION,
    }
}

/// Reads calculator profiles from an INI file
#[derive(Debug, Clone)]
pub struct IniProfileStore {
    path: PathBuf,
}

impl IniProfileStore {
    /// Create a store for `path`; a leading `~` is expanded to the home directory
    pub fn new(path: &str) -> Self {
        let expanded = shellexpand::tilde(path);
        Self {
            path: PathBuf::from(expanded.as_ref()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load profile `name`, or `None` if the file or the section does not exist
    pub fn get_profile(&self, name: &str) -> Result<Option<CalculatorProfile>> {
        if !self.path.exists() {
            tracing::debug!("Profile file '{}' does not exist", self.path.display());
            return Ok(None);
        }

        let ini = Ini::load_from_file(&self.path)
            .with_context(|| format!("Failed to read profile file '{}'", self.path.display()))?;

        let Some(section) = ini.section(Some(name)) else {
            tracing::debug!(
                "Profile '{}' not found in '{}'",
                name,
                self.path.display()
            );
            return Ok(None);
        };

        let mut profile = get_blank_profile();

        if let Some(unit) = section.get(UNIT_KEY).map(str::trim).filter(|u| !u.is_empty()) {
            profile.unit = UnitLabel::new(unit);
        }

        if let Some(mode) = section.get(DEDUCTION_MODE_KEY) {
            profile.deduction_mode = mode
                .parse()
                .with_context(|| format!("Invalid {DEDUCTION_MODE_KEY} in profile '{name}'"))?;
        }

        if let Some(value) = section.get(DEDUCTION_VALUE_KEY) {
            profile.deduction_value = Some(value.trim().to_string());
        }

        if let Some(precision) = section.get(PRECISION_KEY) {
            profile.precision = precision.trim().parse().with_context(|| {
                format!("Invalid {PRECISION_KEY} '{precision}' in profile '{name}'")
            })?;
        }

        tracing::debug!("Loaded profile '{}': {:?}", name, profile);
        Ok(Some(profile))
    }
}
