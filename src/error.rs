use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Error creating file {}: {source}", .path.display())]
    CreateOutput { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
