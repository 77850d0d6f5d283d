//! GraphQL schema, resolvers and HTTP transport for rendezvous.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server (GraphiQL at the same address)
//! rendezvous serve --port 4000
//!
//! # Execute a query from the CLI
//! rendezvous query '{ events { title user { username } } }'
//!
//! # Execute a mutation from the CLI
//! rendezvous mutate 'addUser(data: { username: "ann", email: "a@x.com" }) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `events`, `event`, `locations`, `location`, `users`, `user`,
//!   `participants`, `participant`
//! - **Mutations**: `add*`, `update*`, `delete*` and `deleteAll*` for each of
//!   `Event`, `Location`, `User` and `Participant`
//!
//! Entity fields keep their snake_case names on the wire (`user_id`,
//! `location_id`, `event_id`). Single-record queries return null for an
//! unknown ID; `update*` and `delete*` fail with a not-found error instead.

mod schema;
mod server;
mod types;

pub use schema::{MutationRoot, QueryRoot, RendezvousSchema, build_schema};
pub use server::{bind, router, serve};
pub use types::*;
