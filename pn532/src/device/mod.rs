// pn532/src/device/mod.rs

//! PN532 handle bound to an SPI bus.

pub mod handle;

pub use handle::Pn532;
