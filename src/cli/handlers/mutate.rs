use crate::graphql::build_schema;
use anyhow::Result;
use std::path::PathBuf;

use super::{CommandContext, execute_and_print};

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
    seed: Option<PathBuf>,
) -> Result<()> {
    let schema = build_schema(ctx.open_store(seed)?);

    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    execute_and_print(&schema, &query, variables)
}
