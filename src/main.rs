use anyhow::Context;
use clipbrief::services::llm::LlmClient;
use clipbrief::services::transcript::TranscriptClient;
use clipbrief::AppState;
use std::env;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let llm = LlmClient::new().context("HF_TOKEN must be set")?;
    let transcripts = TranscriptClient::new()?;
    let state = AppState { llm, transcripts };

    let app = clipbrief::router(state);

    let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
