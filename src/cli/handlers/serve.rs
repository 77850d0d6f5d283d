use crate::graphql::{bind, build_schema, serve};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_serve(
    ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    seed: Option<PathBuf>,
) -> Result<()> {
    let host = host.unwrap_or_else(|| ctx.config.server.host.clone());
    let port = port.unwrap_or(ctx.config.server.port);
    let schema = build_schema(ctx.open_store(seed)?);

    tokio::runtime::Runtime::new()?.block_on(async {
        let listener = bind(&host, port)
            .await
            .with_context(|| format!("Failed to bind {}:{}", host, port))?;
        let addr = listener.local_addr()?;

        println!("{} http://{}/", "Server ready at:".green(), addr);
        println!("GraphiQL: http://{}/", addr);

        serve(listener, schema).await?;
        Ok::<(), anyhow::Error>(())
    })
}
