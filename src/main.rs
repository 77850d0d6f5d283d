use anyhow::{Context, Result};
use clap::Parser;

use rendezvous::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use rendezvous::cli::{Cli, Commands};
use rendezvous::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let cwd = std::env::current_dir().context("Cannot determine current directory")?;

    let config_path = cli.config.clone();
    let load = || CommandContext::load(config_path.as_deref(), &cwd);

    match cli.command {
        Commands::Init { port, seed } => handle_init(&cwd, port, seed),
        Commands::Serve { host, port, seed } => handle_serve(load()?, host, port, seed),
        Commands::Query {
            query,
            variables,
            seed,
        } => handle_query(load()?, query, variables, seed),
        Commands::Mutate {
            mutation,
            variables,
            seed,
        } => handle_mutate(load()?, mutation, variables, seed),
        Commands::Schema => handle_schema(),
    }
}
