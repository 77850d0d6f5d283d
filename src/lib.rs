//! # Rendezvous - an in-memory GraphQL API for events
//!
//! Rendezvous serves create/read/update/delete operations over four related
//! entities (events, locations, users and participants) through a single
//! GraphQL endpoint. All data lives in process memory and is gone on restart.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on port 4000 with GraphiQL at http://127.0.0.1:4000/
//! rendezvous serve
//!
//! # Start it pre-filled from a fixture file
//! rendezvous serve --seed fixtures.yml
//!
//! # Print the schema
//! rendezvous schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Entity records and their create/update payloads
//! - [`store`]: In-memory collections

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles the optional `.rendezvous.yml` file and its discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `RendezvousError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema, resolvers and HTTP transport.
pub mod graphql;

/// Data models for rendezvous.
///
/// Includes `Event`, `Location`, `User` and `Participant`.
pub mod model;

/// In-memory store.
pub mod store;

pub mod logging;
