use alloc::string::String;
use thiserror::Error;

/// Errors reported by the containers and the parking lot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("pop or peek on an empty stack")]
    EmptyStack,

    #[error("dequeue on an empty queue")]
    EmptyQueue,

    #[error("parking lot capacity must be at least one space")]
    ZeroCapacity,

    #[error("parking rate must be a non-negative finite number, got {0}")]
    InvalidRate(f64),

    #[error("license plate `{0}` is neither parked nor waiting")]
    UnknownLicensePlate(String),
}

/// Result type alias for this crate.
pub type Result<T> = core::result::Result<T, Error>;
