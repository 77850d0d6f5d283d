use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::get,
};
use tokio::net::TcpListener;

use super::RendezvousSchema;
use crate::error::Result;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// `POST /` executes GraphQL requests, `GET /` serves GraphiQL.
pub fn router(schema: RendezvousSchema) -> Router {
    Router::new().route("/", get(graphiql).post_service(GraphQL::new(schema)))
}

pub async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    Ok(TcpListener::bind((host, port)).await?)
}

/// Serve `schema` on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, schema: RendezvousSchema) -> Result<()> {
    let addr: SocketAddr = listener.local_addr()?;
    tracing::info!(%addr, "GraphQL server listening");

    axum::serve(listener, router(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
