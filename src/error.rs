use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to open file {}: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid thread count: {0} (must be at least 1)")]
    InvalidThreadCount(usize),

    #[error("Worker thread {0} panicked")]
    WorkerPanicked(usize),

    #[error("Parallel result differs from sequential for {len} bytes with {threads} threads")]
    Mismatch { len: usize, threads: usize },
}

pub type Result<T> = std::result::Result<T, BenchError>;
