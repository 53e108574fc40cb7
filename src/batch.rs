//! Batch processing across many Java files.
//!
//! Files are independent: each one runs the full pipeline on its own, so
//! merge and overlap never cross file boundaries, and one file's failure
//! never contaminates the shared result.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine::JavaChunker;
use crate::types::{ChunkRecord, ChunkingConfig};

/// Configuration for batch processing.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Whether to continue when an individual file fails
    pub continue_on_error: bool,
    /// Maximum file size in bytes before a file is rejected
    pub max_file_size: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            continue_on_error: true,
            max_file_size: 10 * 1024 * 1024, // 10MB
        }
    }
}

/// Result of a batch run.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub total_files: usize,
    pub processed_files: usize,
    pub failed_files: usize,
    pub total_chunks: usize,
    pub errors: Vec<BatchError>,
}

/// Error for one failed file.
#[derive(Debug, Clone)]
pub struct BatchError {
    pub file_path: String,
    pub error: String,
}

/// Batch processor driving the per-file pipeline.
pub struct BatchProcessor {
    chunker: JavaChunker,
    config: BatchConfig,
}

impl BatchProcessor {
    /// Create a batch processor.
    pub fn new(chunking_config: ChunkingConfig, config: BatchConfig) -> Self {
        Self {
            chunker: JavaChunker::new(chunking_config),
            config,
        }
    }

    /// Process the given files and collect all final chunk records.
    ///
    /// Failed files are recorded in the result and skipped; none of their
    /// partial output reaches the shared sequence. Cancellation, when a
    /// caller wants it, happens between files, never mid-file.
    pub async fn process_files(&self, paths: &[PathBuf]) -> Result<(Vec<ChunkRecord>, BatchResult)> {
        let run_id = Uuid::new_v4();
        let total_files = paths.len();
        let mut all_chunks = Vec::new();
        let mut processed_files = 0;
        let mut failed_files = 0;
        let mut errors = Vec::new();

        info!(%run_id, total_files, "Starting batch chunking");

        for path in paths {
            match self.process_one(path) {
                Ok(chunks) => {
                    all_chunks.extend(chunks);
                    processed_files += 1;
                }
                Err(e) => {
                    let error = BatchError {
                        file_path: path.display().to_string(),
                        error: e.to_string(),
                    };
                    errors.push(error);
                    failed_files += 1;

                    if !self.config.continue_on_error {
                        return Err(e);
                    }

                    warn!(path = %path.display(), error = %e, "Failed to chunk file");
                }
            }
        }

        let result = BatchResult {
            total_files,
            processed_files,
            failed_files,
            total_chunks: all_chunks.len(),
            errors,
        };

        info!(
            %run_id,
            processed = processed_files,
            failed = failed_files,
            chunks = result.total_chunks,
            "Batch chunking complete"
        );

        Ok((all_chunks, result))
    }

    /// Run the full pipeline for a single file.
    fn process_one(&self, path: &Path) -> Result<Vec<ChunkRecord>> {
        let size = std::fs::metadata(path)
            .with_context(|| format!("failed to stat {}", path.display()))?
            .len() as usize;
        if size > self.config.max_file_size {
            anyhow::bail!(
                "{} exceeds maximum file size ({} > {} bytes)",
                path.display(),
                size,
                self.config.max_file_size
            );
        }

        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        self.chunker
            .chunk_source(&source, &path.display().to_string())
    }
}

/// Recursively collect `.java` files under a path (or the path itself).
pub fn collect_java_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_into(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn collect_into(path: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    if path.is_dir() {
        for entry in std::fs::read_dir(path)
            .with_context(|| format!("failed to read directory {}", path.display()))?
        {
            collect_into(&entry?.path(), files)?;
        }
    } else if path.extension().is_some_and(|ext| ext == "java") {
        files.push(path.to_path_buf());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    const SMALL_CLASS: &str = "package a;\n\nclass A {\n    void f() { }\n}\n";

    #[tokio::test]
    async fn test_process_files() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_file(dir.path(), "A.java", SMALL_CLASS);
        let b = write_file(dir.path(), "B.java", SMALL_CLASS);

        let processor = BatchProcessor::new(ChunkingConfig::default(), BatchConfig::default());
        let (chunks, result) = processor.process_files(&[a.clone(), b]).await.unwrap();

        assert_eq!(result.total_files, 2);
        assert_eq!(result.processed_files, 2);
        assert_eq!(result.failed_files, 0);
        assert_eq!(result.total_chunks, chunks.len());
        let a_path = a.display().to_string();
        assert!(chunks
            .iter()
            .any(|c| c.metadata.file_path.as_deref() == Some(a_path.as_str())));
    }

    #[tokio::test]
    async fn test_failed_file_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_file(dir.path(), "Good.java", SMALL_CLASS);
        let missing = dir.path().join("Missing.java");

        let processor = BatchProcessor::new(ChunkingConfig::default(), BatchConfig::default());
        let (chunks, result) = processor.process_files(&[missing, good]).await.unwrap();

        assert_eq!(result.failed_files, 1);
        assert_eq!(result.processed_files, 1);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].file_path.ends_with("Missing.java"));
        // Only the good file's chunks are in the shared result.
        assert_eq!(chunks.len(), result.total_chunks);
        assert!(!chunks.is_empty());
    }

    #[tokio::test]
    async fn test_continue_on_error_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("Missing.java");

        let processor = BatchProcessor::new(
            ChunkingConfig::default(),
            BatchConfig {
                continue_on_error: false,
                ..Default::default()
            },
        );
        assert!(processor.process_files(&[missing]).await.is_err());
    }

    #[test]
    fn test_collect_java_files() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "A.java", SMALL_CLASS);
        write_file(dir.path(), "notes.txt", "not java");
        let nested = dir.path().join("nested");
        std::fs::create_dir(&nested).unwrap();
        write_file(&nested, "B.java", SMALL_CLASS);

        let files = collect_java_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "java"));
    }
}
