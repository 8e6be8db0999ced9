//! Entry point for deploy-path-guard.
use std::process::ExitCode;

use clap::Parser;
use deploy_path_guard::{
    cli::DeployArgs,
    lib::telemetry,
    runtime::{self, CommandExit},
};

#[tokio::main]
async fn main() -> ExitCode {
    match bootstrap().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(exit) => exit.report(),
    }
}

async fn bootstrap() -> Result<(), CommandExit> {
    telemetry::init_tracing().map_err(CommandExit::from_error)?;
    let args = DeployArgs::parse();
    let profile = args.build().map_err(CommandExit::from_error)?;

    let payload = runtime::execute(profile).await?;
    println!("{payload}");
    Ok(())
}
