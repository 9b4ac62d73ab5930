use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("word not in the index: {0}")]
    NotFound(String),

    #[error("failed to write to output sink: {0}")]
    WriteError(#[from] std::io::Error),
}

pub type IndexResult<T> = Result<T, IndexError>;
