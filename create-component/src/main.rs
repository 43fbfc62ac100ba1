use clap::Parser;
use create_component::app;
use create_component::args::Cli;
use create_component::{ScaffoldConfig, ScaffoldError};
use log::{debug, info};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Errors only by default; user-facing output does not go through the logger.
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures.
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            return code;
        }
    };

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("create-component failed: {:?}", e);
            app::report_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<(), ScaffoldError> {
    let root = env::current_dir()?;
    let scaffold = app::run(&root, cli.name.as_deref(), &ScaffoldConfig::default())?;
    info!("Scaffold complete: {}", scaffold.component_dir.display());
    Ok(())
}
