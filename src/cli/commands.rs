use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rendezvous")]
#[command(
    author,
    version,
    about = "An in-memory GraphQL API for events, locations, users and participants"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .rendezvous.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file, rotated daily
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .rendezvous.yml in the current directory
    Init {
        /// Port the server listens on
        #[arg(long)]
        port: Option<u16>,

        /// Seed file to load on startup, relative to the config file
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind to
        #[arg(long, env = "RENDEZVOUS_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "RENDEZVOUS_PORT")]
        port: Option<u16>,

        /// Seed file with initial records (YAML or JSON)
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Execute a GraphQL query against a fresh store
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Seed file with initial records (YAML or JSON)
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Seed file with initial records (YAML or JSON)
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}
