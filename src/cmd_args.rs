use std::ffi::OsString;

use crate::config::DEFAULT_PROFILE_NAME;
use crate::engine::{DeductionMode, DimensionKey, ShapeKind};
pub use clap::Parser;
use clap::Subcommand;

#[derive(Parser, Debug)]
#[command(name = "carpetline", version, about, long_about = None)]
struct ClapArgs {
    /// Profile name
    /// Optional. Section of the profile file supplying defaults. Default is 'default'.
    /// A profile that is not configured falls back to built-in defaults.
    #[clap(
        short = 'p',
        long,
        global = true,
        default_value = DEFAULT_PROFILE_NAME,
        help = "profile name"
    )]
    profile: String,

    /// Verbose mode
    /// Optional. Print debug logs to stderr.
    #[clap(short = 'v', long, global = true, help = "Print verbose message")]
    verbose: bool,

    #[clap(long, global = true, help = "Output machine-readable JSON")]
    json: bool,

    #[command(subcommand)]
    command: ClapCommand,
}

#[derive(Subcommand, Debug)]
enum ClapCommand {
    /// Calculate carpet area from a built-up area and a deduction
    Carpet {
        #[arg(help = "Built-up area (ignored when --shape derives it)")]
        built_up: Option<String>,
        #[arg(short = 'm', long, help = "Deduction mode: percentage or fixed")]
        mode: Option<DeductionMode>,
        #[arg(short = 'd', long, help = "Deduction value (percent or area)")]
        deduction: Option<String>,
        #[arg(short = 'u', long, help = "Unit label, e.g. sqft or sqm")]
        unit: Option<String>,
        #[arg(short = 's', long, help = "Derive the built-up area from this shape")]
        shape: Option<ShapeKind>,
        #[arg(
            long = "dim",
            value_name = "KEY=VALUE",
            value_parser = parse_dimension,
            help = "Shape dimension, e.g. --dim length=10"
        )]
        dims: Vec<(DimensionKey, String)>,
    },
    /// Calculate the area of a shape
    Shape {
        #[arg(help = "rectangle, square, circle, ellipse, hexagon or pentagon")]
        shape: ShapeKind,
        #[arg(
            long = "dim",
            value_name = "KEY=VALUE",
            value_parser = parse_dimension,
            help = "Shape dimension, e.g. --dim radius=7"
        )]
        dims: Vec<(DimensionKey, String)>,
        #[arg(short = 'u', long, help = "Unit label, e.g. sqft or sqm")]
        unit: Option<String>,
    },
    /// List supported shapes and their dimensions
    Shapes,
}

fn parse_dimension(raw: &str) -> Result<(DimensionKey, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    let key = key.parse::<DimensionKey>().map_err(|e| e.to_string())?;
    Ok((key, value.to_string()))
}

/// Carpet calculation options as given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct CarpetArgs {
    pub built_up: Option<String>,
    pub mode: Option<DeductionMode>,
    pub deduction: Option<String>,
    pub unit: Option<String>,
    pub shape: Option<ShapeKind>,
    pub dims: Vec<(DimensionKey, String)>,
}

/// Shape calculation options as given on the command line
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeArgs {
    pub shape: ShapeKind,
    pub dims: Vec<(DimensionKey, String)>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Carpet(CarpetArgs),
    Shape(ShapeArgs),
    Shapes,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    verbose: bool,
    json: bool,
    command: Command,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    /// Like [`parse_from`](Self::parse_from) but returns clap's error instead of exiting
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::try_parse_from(itr).map(Self::from_clap)
    }

    fn from_clap(args: ClapArgs) -> Self {
        let command = match args.command {
            ClapCommand::Carpet {
                built_up,
                mode,
                deduction,
                unit,
                shape,
                dims,
            } => Command::Carpet(CarpetArgs {
                built_up,
                mode,
                deduction,
                unit,
                shape,
                dims,
            }),
            ClapCommand::Shape { shape, dims, unit } => {
                Command::Shape(ShapeArgs { shape, dims, unit })
            }
            ClapCommand::Shapes => Command::Shapes,
        };

        Self {
            profile: args.profile,
            verbose: args.verbose,
            json: args.json,
            command,
        }
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn json(&self) -> bool {
        self.json
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}
