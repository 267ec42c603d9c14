mod cli;
mod commands;
mod config;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref())?;

    info!("atomkit CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let geometry = config::resolve_geometry(cli.config.as_deref(), cli.bond_length)?;
    let mut stdout = std::io::stdout().lock();

    let command_result = match cli.command {
        Commands::Distance(args) => {
            info!("Dispatching to 'distance' command.");
            commands::distance::run(args, &mut stdout)
        }
        Commands::Dihedral(args) => {
            info!("Dispatching to 'dihedral' command.");
            commands::dihedral::run(args, &mut stdout)
        }
        Commands::Bonds(args) => {
            info!("Dispatching to 'bonds' command.");
            commands::bonds::run(args, &geometry, &mut stdout)
        }
        Commands::Center(args) => {
            info!("Dispatching to 'center' command.");
            commands::center::run(args)
        }
        Commands::Element(args) => {
            info!("Dispatching to 'element' command.");
            commands::element::run(&args.query, &mut stdout)
        }
    };

    match &command_result {
        Ok(_) => info!("Command completed successfully."),
        Err(e) => error!("Command failed: {}", e),
    }
    command_result
}
