//! # Output Formatting
//!
//! Renders engine results either as aligned plain text or, with `--json`, as a
//! `{"ok": ..., "data"/"error": ...}` envelope.

use crate::engine::{
    CarpetAreaResult, DeductionMode, DimensionKey, Dimensions, ShapeKind, UnitLabel,
    ValidationFailure,
};
use serde::Serialize;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

#[derive(Serialize)]
struct JsonError<'a> {
    ok: bool,
    error: FailureBody<'a>,
}

#[derive(Serialize)]
struct FailureBody<'a> {
    kind: &'a str,
    message: String,
}

/// Shape calculation echoed back with its inputs
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeAreaReport {
    pub shape: ShapeKind,
    pub dimensions: Dimensions,
    pub area: f64,
    pub unit: UnitLabel,
}

/// One row of the `shapes` listing
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeInfo {
    pub shape: ShapeKind,
    pub label: &'static str,
    pub required_dimensions: Vec<DimensionKey>,
}

pub fn shape_catalog() -> Vec<ShapeInfo> {
    ShapeKind::all()
        .iter()
        .map(|shape| ShapeInfo {
            shape: *shape,
            label: shape.label(),
            required_dimensions: shape.required_dimensions().to_vec(),
        })
        .collect()
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Print a validation failure: JSON envelope on stdout, or the message on stderr
pub fn print_failure(json: bool, failure: &ValidationFailure) -> anyhow::Result<()> {
    if json {
        println!("{}", render_failure_json(failure)?);
    } else {
        eprintln!("Error: {failure}");
    }
    Ok(())
}

pub fn render_failure_json(failure: &ValidationFailure) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonError {
        ok: false,
        error: FailureBody {
            kind: failure.kind(),
            message: failure.to_string(),
        },
    })
}

pub fn format_area(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

pub fn render_carpet_result(result: &CarpetAreaResult, precision: usize) -> String {
    let unit = result.unit().display_name();
    let deduction = match result.deduction_mode() {
        DeductionMode::Percentage => {
            format!("{}% of built-up area", format_area(result.deduction_value(), precision))
        }
        DeductionMode::Fixed => {
            format!("{} {unit} fixed", format_area(result.deduction_value(), precision))
        }
    };

    [
        format!(
            "Built-up Area:  {} {unit}",
            format_area(result.built_up_area(), precision)
        ),
        format!("Deduction:      {deduction}"),
        format!(
            "Deducted Area:  {} {unit}",
            format_area(result.deducted_area(), precision)
        ),
        format!(
            "Carpet Area:    {} {unit}",
            format_area(result.carpet_area(), precision)
        ),
        format!(
            "Carpet Ratio:   {}%",
            format_area(result.carpet_ratio(), precision)
        ),
    ]
    .join("\n")
}

pub fn render_shape_report(report: &ShapeAreaReport, precision: usize) -> String {
    let linear = report.unit.linear_unit().unwrap_or("");
    let mut lines: Vec<String> = report
        .shape
        .required_dimensions()
        .iter()
        .map(|key| {
            let value = report.dimensions.get(*key).unwrap_or("-");
            format!("{:<12} {value} {linear}", format!("{}:", key.label()))
                .trim_end()
                .to_string()
        })
        .collect();

    lines.push(format!(
        "{} Area: {} {}",
        report.shape.label(),
        format_area(report.area, precision),
        report.unit.display_name()
    ));
    lines.join("\n")
}

pub fn render_shape_catalog(catalog: &[ShapeInfo]) -> String {
    catalog
        .iter()
        .map(|info| {
            let dims: Vec<&str> = info
                .required_dimensions
                .iter()
                .map(DimensionKey::as_str)
                .collect();
            format!("{:<10} {}", info.shape.as_str(), dims.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
