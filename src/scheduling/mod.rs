pub mod availability;
pub mod booking;
pub mod slots;
pub mod types;

pub use availability::*;
pub use booking::*;
pub use slots::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum BookingError {
    #[error("booking store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("booking write failed: {0}")]
    WriteFailed(String),
}
