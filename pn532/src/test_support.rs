//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockSpi setup so tests across the crate
//! and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::Pn532;
use crate::transport::mock::{MockSpi, SpiOp};

/// Build a MockSpi that fails every call of the given operations.
#[doc(hidden)]
pub fn mock_failing_on(ops: &[SpiOp]) -> MockSpi {
    let mut mock = MockSpi::new();
    for &op in ops {
        mock.fail_on(op);
    }
    mock
}

/// Convenience: a PN532 handle owning a fresh MockSpi.
#[doc(hidden)]
pub fn mock_pn532() -> Pn532<MockSpi> {
    Pn532::new(MockSpi::new())
}

/// The bytes a single write transaction puts on the bus for `frame`:
/// the SPI data-write marker followed by the frame.
#[doc(hidden)]
pub fn expected_bus_bytes(frame: &[u8]) -> Vec<u8> {
    let mut out = vec![crate::constants::PN532_SPI_DATA_WRITE];
    out.extend_from_slice(frame);
    out
}
