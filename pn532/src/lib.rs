// pn532/src/lib.rs

//! pn532
//!
//! Host-side command framing for the NXP PN532 contactless reader and the
//! half-duplex SPI write transaction that carries a frame to the chip.
#![warn(missing_docs)]

pub mod bus;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod utils;

// Re-export the error types at crate root so `crate::Error` and
// `crate::Result` are reachable from every module and from `prelude`.
pub use crate::error::*;

pub use prelude::*;
