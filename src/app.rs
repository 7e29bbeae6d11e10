//! # Application Controller
//!
//! Connects parsed command-line arguments, the loaded profile and the calculator,
//! and prints the outcome.

use crate::calculator::Calculator;
use crate::cmd_args::{CarpetArgs, Command, CommandLineArgs, ShapeArgs};
use crate::config;
use crate::engine::{Dimensions, ShapeAreaRequest, UnitLabel};
use crate::output::{self, ShapeAreaReport};
use crate::profile::{get_blank_profile, CalculatorProfile, IniProfileStore};
use anyhow::Result;
use std::process::ExitCode;

/// Exit code used when the carpet engine rejects the input
const VALIDATION_FAILURE_EXIT: u8 = 1;

pub fn run(cmd_args: &CommandLineArgs) -> Result<ExitCode> {
    let profile_path = config::get_profile_path();
    let profile = load_profile(cmd_args.profile(), &profile_path)?;

    match cmd_args.command() {
        Command::Carpet(args) => run_carpet(args, &profile, cmd_args.json()),
        Command::Shape(args) => run_shape(args, &profile, cmd_args.json()),
        Command::Shapes => {
            output::print_one(cmd_args.json(), output::shape_catalog(), |catalog| {
                output::render_shape_catalog(catalog)
            })?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load profile from INI file or return blank profile if not found
fn load_profile(profile_name: &str, profile_path: &str) -> Result<CalculatorProfile> {
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

    let ini_store = IniProfileStore::new(profile_path);
    let profile = match ini_store.get_profile(profile_name)? {
        Some(p) => {
            tracing::debug!("Profile loaded successfully, unit: {}", p.unit());
            p
        }
        None => {
            tracing::debug!("Profile '{}' not found, using blank profile", profile_name);
            get_blank_profile()
        }
    };

    Ok(profile)
}

/// Apply command-line values over the profile defaults
fn build_calculator(args: &CarpetArgs, profile: &CalculatorProfile) -> Calculator {
    let mut calculator = Calculator::from_profile(profile);

    if let Some(unit) = &args.unit {
        calculator.set_unit(UnitLabel::new(unit.as_str()));
    }
    if let Some(mode) = args.mode {
        calculator.set_deduction_mode(mode);
    }
    if let Some(deduction) = &args.deduction {
        calculator.set_deduction_value(deduction.as_str());
    }
    if let Some(built_up) = &args.built_up {
        calculator.set_built_up_area(built_up.as_str());
    }

    if let Some(shape) = args.shape {
        calculator.set_use_shape(true);
        calculator.select_shape(shape);
        for (key, value) in &args.dims {
            calculator.set_dimension(*key, value.as_str());
        }
        tracing::info!(
            "Built-up area from {}: {}",
            shape,
            calculator.shape_area()
        );
    } else if !args.dims.is_empty() {
        tracing::warn!("--dim given without --shape, dimensions ignored");
    }

    calculator
}

fn run_carpet(args: &CarpetArgs, profile: &CalculatorProfile, json: bool) -> Result<ExitCode> {
    let mut calculator = build_calculator(args, profile);

    match calculator.calculate() {
        Ok(result) => {
            output::print_one(json, result, |result| {
                output::render_carpet_result(result, profile.precision())
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            output::print_failure(json, &failure)?;
            Ok(ExitCode::from(VALIDATION_FAILURE_EXIT))
        }
    }
}

fn run_shape(args: &ShapeArgs, profile: &CalculatorProfile, json: bool) -> Result<ExitCode> {
    let dimensions: Dimensions = args
        .dims
        .iter()
        .map(|(key, value)| (*key, value.as_str()))
        .collect();
    let request = ShapeAreaRequest::new(args.shape, dimensions);

    let report = ShapeAreaReport {
        shape: request.shape(),
        area: request.compute(),
        dimensions: request.dimensions().clone(),
        unit: args
            .unit
            .as_deref()
            .map(UnitLabel::new)
            .unwrap_or_else(|| profile.unit().clone()),
    };

    output::print_one(json, report, |report| {
        output::render_shape_report(report, profile.precision())
    })?;
    Ok(ExitCode::SUCCESS)
}
