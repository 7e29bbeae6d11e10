//! # Shape Area Engine
//!
//! Pure function from a shape kind and a set of raw dimension values to an area.
//! A dimension that is missing, unparseable, zero or negative counts as absent,
//! and any absent required dimension makes the whole result `0`. That zero means
//! "not enough input yet", never a failure.

use super::number::parse_positive;
use super::UnknownNameError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Supported 2-D shapes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Rectangle,
    Square,
    Circle,
    Ellipse,
    /// Regular hexagon measured by side length
    Hexagon,
    /// Regular pentagon measured by side length
    Pentagon,
}

impl ShapeKind {
    const ALL: [ShapeKind; 6] = [
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Circle,
        ShapeKind::Ellipse,
        ShapeKind::Hexagon,
        ShapeKind::Pentagon,
    ];

    /// All shape kinds in selector order
    pub fn all() -> &'static [ShapeKind] {
        &Self::ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Pentagon => "pentagon",
        }
    }

    /// Human readable name
    pub fn label(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Circle => "Circle",
            ShapeKind::Ellipse => "Ellipse",
            ShapeKind::Hexagon => "Hexagon",
            ShapeKind::Pentagon => "Pentagon",
        }
    }

    /// Dimension keys read by this shape's formula
    pub fn required_dimensions(&self) -> &'static [DimensionKey] {
        match self {
            ShapeKind::Rectangle => &[DimensionKey::Length, DimensionKey::Width],
            ShapeKind::Square => &[DimensionKey::Side],
            ShapeKind::Circle => &[DimensionKey::Radius],
            ShapeKind::Ellipse => &[DimensionKey::AxisA, DimensionKey::AxisB],
            ShapeKind::Hexagon | ShapeKind::Pentagon => &[DimensionKey::Size],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShapeKind {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|kind| kind.as_str()).collect();
                UnknownNameError::new("shape", s, &names)
            })
    }
}

/// Name of a single dimension input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DimensionKey {
    Length,
    Width,
    Radius,
    AxisA,
    AxisB,
    Side,
    /// Side length of a regular polygon
    Size,
}

impl DimensionKey {
    const ALL: [DimensionKey; 7] = [
        DimensionKey::Length,
        DimensionKey::Width,
        DimensionKey::Radius,
        DimensionKey::AxisA,
        DimensionKey::AxisB,
        DimensionKey::Side,
        DimensionKey::Size,
    ];

    pub fn all() -> &'static [DimensionKey] {
        &Self::ALL
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionKey::Length => "length",
            DimensionKey::Width => "width",
            DimensionKey::Radius => "radius",
            DimensionKey::AxisA => "axisA",
            DimensionKey::AxisB => "axisB",
            DimensionKey::Side => "side",
            DimensionKey::Size => "size",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DimensionKey::Length => "Length",
            DimensionKey::Width => "Width",
            DimensionKey::Radius => "Radius",
            DimensionKey::AxisA => "Axis A",
            DimensionKey::AxisB => "Axis B",
            DimensionKey::Side => "Side",
            DimensionKey::Size => "Side Length",
        }
    }
}

impl fmt::Display for DimensionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimensionKey {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // "axisA", "axis-a" and "axis_a" all name the same key
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|key| key.as_str()).collect();
                UnknownNameError::new("dimension", s, &names)
            })
    }
}

/// Raw dimension text keyed by dimension name
///
/// Only the keys a shape requires are ever read; anything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dimensions {
    values: BTreeMap<DimensionKey, String>,
}

impl Dimensions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: DimensionKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: DimensionKey, value: impl Into<String>) {
        self.values.insert(key, value.into());
    }

    pub fn get(&self, key: DimensionKey) -> Option<&str> {
        self.values.get(&key).map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DimensionKey, &str)> {
        self.values.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Parsed value of `key`, or `None` when it is absent for formula purposes
    pub fn positive(&self, key: DimensionKey) -> Option<f64> {
        self.get(key).and_then(parse_positive)
    }
}

impl<S: Into<String>> FromIterator<(DimensionKey, S)> for Dimensions {
    fn from_iter<I: IntoIterator<Item = (DimensionKey, S)>>(iter: I) -> Self {
        let mut dimensions = Dimensions::new();
        for (key, value) in iter {
            dimensions.set(key, value);
        }
        dimensions
    }
}

/// Immutable input to the shape engine
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeAreaRequest {
    shape: ShapeKind,
    dimensions: Dimensions,
}

impl ShapeAreaRequest {
    pub fn new(shape: ShapeKind, dimensions: Dimensions) -> Self {
        Self { shape, dimensions }
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    pub fn compute(&self) -> f64 {
        compute_shape_area(self.shape, &self.dimensions)
    }
}

/// Area of `shape` in the square of the dimensions' linear unit
///
/// Never fails. Returns exactly `0.0` when any required dimension is absent.
pub fn compute_shape_area(shape: ShapeKind, dimensions: &Dimensions) -> f64 {
    match formula(shape, dimensions) {
        Some(area) => {
            tracing::debug!("{} area computed: {}", shape, area);
            area
        }
        None => {
            tracing::debug!("{} area incomplete, missing required dimensions", shape);
            0.0
        }
    }
}

fn formula(shape: ShapeKind, dimensions: &Dimensions) -> Option<f64> {
    let read = |key| dimensions.positive(key);

    let area = match shape {
        ShapeKind::Rectangle => read(DimensionKey::Length)? * read(DimensionKey::Width)?,
        ShapeKind::Square => read(DimensionKey::Side)?.powi(2),
        ShapeKind::Circle => PI * read(DimensionKey::Radius)?.powi(2),
        ShapeKind::Ellipse => PI * read(DimensionKey::AxisA)? * read(DimensionKey::AxisB)?,
        ShapeKind::Hexagon => hexagon_factor() * read(DimensionKey::Size)?.powi(2),
        ShapeKind::Pentagon => pentagon_factor() * read(DimensionKey::Size)?.powi(2),
    };

    // Finite dimensions can still overflow; an infinite area counts as no area
    Some(area).filter(|area| area.is_finite())
}

/// 3√3 / 2
fn hexagon_factor() -> f64 {
    3.0 * 3f64.sqrt() / 2.0
}

/// ¼ √(25 + 10√5)
fn pentagon_factor() -> f64 {
    0.25 * (25.0 + 10.0 * 5f64.sqrt()).sqrt()
}
