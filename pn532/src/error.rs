// pn532/src/error.rs

//! Crate-wide error type.

use thiserror::Error;

/// Errors raised while framing a command or driving the SPI bus.
#[derive(Error, Debug)]
pub enum Error {
    /// TFI + data does not fit in the single-byte LEN field.
    #[error("frame length overflow: TFI+data is {len} bytes, maximum is 255")]
    LengthOverflow {
        /// Offending TFI+data length
        len: usize,
    },

    /// Failure reported by an SPI bus implementation during select, write
    /// or deselect.
    #[error("spi transport error: {0}")]
    Transport(String),

    /// I/O failure inside a concrete transport.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serial port failure (SPIDriver transport).
    #[cfg(feature = "spidriver")]
    #[error("serial error: {0}")]
    Serial(#[from] serialport::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
