pub mod matcher;
pub mod resolver;
pub mod tables;
pub mod types;

pub use matcher::*;
pub use resolver::*;
pub use tables::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DirectoryError {
    #[error("practitioner directory unavailable: {0}")]
    Unavailable(String),

    #[error("practitioner directory query failed: {0}")]
    Query(String),
}
