//! # Carpetline Main Entry Point

use anyhow::Result;
use carpetline::cmd_args::CommandLineArgs;
use carpetline::{app, logging};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let cmd_args = CommandLineArgs::parse();

    logging::init_tracing(cmd_args.verbose());
    tracing::debug!("Parsed arguments: {:?}", cmd_args);

    app::run(&cmd_args)
}
