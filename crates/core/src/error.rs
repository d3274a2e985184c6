use thiserror::Error;

#[derive(Error, Debug)]
pub enum LienscopeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
