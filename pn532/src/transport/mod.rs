// pn532/src/transport/mod.rs

//! SPI capability abstraction and implementations.

pub mod mock;
pub mod spidriver;
pub mod traits;

pub use mock::MockSpi;
pub use spidriver::{SpiDriver, SpiDriverConfig};
pub use traits::SpiBus;
