use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to write greeting: {0}")]
    Write(#[from] io::Error),
}
