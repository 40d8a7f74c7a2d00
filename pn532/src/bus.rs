// pn532/src/bus.rs

//! Half-duplex SPI write transaction.
//!
//! A transaction selects the chip, writes the data-write marker followed by
//! the frame as one burst, and deselects again. [`BusSession`] owns the
//! selected state and releases it on every exit path.

use crate::constants::PN532_SPI_DATA_WRITE;
use crate::transport::SpiBus;
use crate::utils::HexBytes;
use crate::Result;

/// Exclusive, selected access to the bus for a single write.
///
/// Dropping an unreleased session deselects the chip; a deselect failure at
/// that point is logged since there is no caller left to report it to.
pub struct BusSession<'a, B: SpiBus + ?Sized> {
    bus: &'a mut B,
    released: bool,
}

impl<'a, B: SpiBus + ?Sized> BusSession<'a, B> {
    /// Assert chip-select. If selecting fails nothing needs releasing and
    /// no session is returned.
    pub fn acquire(bus: &'a mut B) -> Result<Self> {
        bus.select()?;
        Ok(Self {
            bus,
            released: false,
        })
    }

    /// Write one burst and release the bus. Consumes the session, so a
    /// session carries at most one write.
    pub fn write(mut self, data: &[u8]) -> Result<()> {
        self.bus.write(data)?;
        self.release()
    }

    fn release(mut self) -> Result<()> {
        self.released = true;
        self.bus.deselect()
    }
}

impl<B: SpiBus + ?Sized> Drop for BusSession<'_, B> {
    fn drop(&mut self) {
        if !self.released {
            if let Err(e) = self.bus.deselect() {
                log::warn!("failed to release SPI bus: {}", e);
            }
        }
    }
}

/// Send an encoded frame to the PN532: prefix the SPI data-write marker and
/// write it in one selected burst. Transport errors are returned unchanged;
/// the bus is released whether or not the write succeeded.
pub fn write_command<B: SpiBus + ?Sized>(bus: &mut B, frame: &[u8]) -> Result<()> {
    let mut buf = Vec::with_capacity(1 + frame.len());
    buf.push(PN532_SPI_DATA_WRITE);
    buf.extend_from_slice(frame);

    log::debug!("spi write: {}", HexBytes(&buf));

    BusSession::acquire(bus)?.write(&buf)
}
