//! Javachunk - Main Entry Point
//!
//! Minimal invocation contract: `javachunk <path>` chunks one Java file or
//! every `.java` file under a directory, then either sends the records to
//! the vector store named by `VECTOR_STORE_URL` or writes them as JSON
//! lines to stdout.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use javachunk::batch::{collect_java_files, BatchConfig, BatchProcessor};
use javachunk::output::VectorStoreClient;
use javachunk::types::ChunkingConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "javachunk=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = ChunkingConfig::from_env();

    let root: PathBuf = std::env::args()
        .nth(1)
        .context("usage: javachunk <path>")?
        .into();

    info!("Starting javachunk v{}", env!("CARGO_PKG_VERSION"));
    info!(
        max_chunk_size = config.max_chunk_size,
        chunk_overlap = config.chunk_overlap,
        min_chunk_size = config.min_chunk_size,
        "Chunking configuration"
    );

    let files = collect_java_files(&root)?;
    if files.is_empty() {
        anyhow::bail!("no .java files found under {}", root.display());
    }

    let processor = BatchProcessor::new(config, BatchConfig::default());
    let (chunks, result) = processor.process_files(&files).await?;

    info!(
        files = result.processed_files,
        failed = result.failed_files,
        chunks = result.total_chunks,
        "Chunking finished"
    );

    match std::env::var("VECTOR_STORE_URL") {
        Ok(url) => {
            let client = VectorStoreClient::new(&url)?;
            let indexed = client.send_chunks(&chunks).await?;
            info!(indexed, store = %url, "Chunks indexed");
        }
        Err(_) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            for chunk in &chunks {
                serde_json::to_writer(&mut handle, chunk)?;
                writeln!(handle)?;
            }
        }
    }

    Ok(())
}
