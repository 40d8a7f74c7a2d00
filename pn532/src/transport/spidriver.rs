// pn532/src/transport/spidriver.rs

//! Excamera SPIDriver adapter.
//!
//! The SPIDriver is an SPI master attached over a USB serial port. It takes
//! single-byte commands: `s` asserts chip-select, `u` releases it, and
//! `0xC0 + (n - 1)` followed by `n` bytes (1..=64) shifts data out.

use std::io::Write;
use std::time::Duration;

use crate::Result;
use crate::transport::traits::SpiBus;
use crate::utils::timeout::{DEFAULT_SERIAL_TIMEOUT_MS, ms};

const CMD_SELECT: u8 = b's';
const CMD_UNSELECT: u8 = b'u';
const CMD_WRITE_BASE: u8 = 0xC0;

/// Largest block a single write command can carry
pub const SPIDRIVER_MAX_BLOCK: usize = 64;

/// Serial settings for the SPIDriver link.
#[derive(Debug, Clone)]
pub struct SpiDriverConfig {
    pub baud_rate: u32,
    pub timeout: Duration,
}

impl Default for SpiDriverConfig {
    fn default() -> Self {
        Self {
            baud_rate: 460_800,
            timeout: ms(DEFAULT_SERIAL_TIMEOUT_MS),
        }
    }
}

/// [`SpiBus`] over an SPIDriver command stream. Generic over the underlying
/// writer so the command encoding can be exercised without hardware.
pub struct SpiDriver<W: Write> {
    port: W,
}

#[cfg(feature = "spidriver")]
impl SpiDriver<Box<dyn serialport::SerialPort>> {
    /// Open the SPIDriver on `path` with default settings.
    pub fn open(path: &str) -> Result<Self> {
        Self::open_with_config(path, &SpiDriverConfig::default())
    }

    /// Open the SPIDriver on `path` (8N1, no flow control).
    pub fn open_with_config(path: &str, config: &SpiDriverConfig) -> Result<Self> {
        let port = serialport::new(path, config.baud_rate)
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(config.timeout)
            .open()?;
        log::debug!("opened SPIDriver on {} @ {} baud", path, config.baud_rate);
        Ok(Self::new(port))
    }
}

impl<W: Write> SpiDriver<W> {
    /// Wrap an already-open command stream.
    pub fn new(port: W) -> Self {
        Self { port }
    }

    /// Give back the underlying stream.
    pub fn into_inner(self) -> W {
        self.port
    }

    fn command(&mut self, cmd: u8) -> Result<()> {
        self.port.write_all(&[cmd])?;
        self.port.flush()?;
        Ok(())
    }
}

impl<W: Write> SpiBus for SpiDriver<W> {
    fn select(&mut self) -> Result<()> {
        self.command(CMD_SELECT)
    }

    fn deselect(&mut self) -> Result<()> {
        self.command(CMD_UNSELECT)
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        // CS stays asserted between blocks, so the chip sees one burst.
        let mut buf = Vec::with_capacity(data.len() + data.len().div_ceil(SPIDRIVER_MAX_BLOCK));
        for block in data.chunks(SPIDRIVER_MAX_BLOCK) {
            buf.push(CMD_WRITE_BASE + (block.len() - 1) as u8);
            buf.extend_from_slice(block);
        }
        self.port.write_all(&buf)?;
        self.port.flush()?;
        Ok(())
    }
}
