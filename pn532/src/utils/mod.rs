//! Small helpers shared across the crate: hex formatting for frame traces
//! and timeout conversion for the serial transports.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
