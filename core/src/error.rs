use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Upstream returned status {status}")]
    UpstreamStatus { status: u16 },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type BenchResult<T> = Result<T, BenchError>;
