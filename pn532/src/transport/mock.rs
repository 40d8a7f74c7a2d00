// pn532/src/transport/mock.rs

use crate::transport::traits::SpiBus;
use crate::{Error, Result};

/// One call observed by [`MockSpi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpiEvent {
    Select,
    Write(Vec<u8>),
    Deselect,
}

/// Bus operation selector for failure injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpiOp {
    Select,
    Write,
    Deselect,
}

/// Mock SPI bus for unit tests. It records every call (including failed
/// ones) and can be told to fail a given operation.
#[derive(Debug, Default)]
pub struct MockSpi {
    pub events: Vec<SpiEvent>,
    /// Testing hook: operations that should report a transport error
    pub failures: Vec<SpiOp>,
    selected: bool,
}

impl MockSpi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call of `op` fail.
    pub fn fail_on(&mut self, op: SpiOp) {
        self.failures.push(op);
    }

    /// Whether chip-select is currently asserted.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Payloads of all recorded writes, in order.
    pub fn writes(&self) -> Vec<&[u8]> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SpiEvent::Write(data) => Some(data.as_slice()),
                _ => None,
            })
            .collect()
    }

    fn check(&self, op: SpiOp) -> Result<()> {
        if self.failures.contains(&op) {
            return Err(Error::Transport(format!("injected {:?} failure", op)));
        }
        Ok(())
    }
}

impl SpiBus for MockSpi {
    fn select(&mut self) -> Result<()> {
        self.events.push(SpiEvent::Select);
        if self.selected {
            return Err(Error::Transport("bus already selected".into()));
        }
        self.check(SpiOp::Select)?;
        self.selected = true;
        Ok(())
    }

    fn deselect(&mut self) -> Result<()> {
        self.events.push(SpiEvent::Deselect);
        // Chip-select is released even when the failure is reported, the
        // way a GPIO write that errors after toggling the line would be.
        self.selected = false;
        self.check(SpiOp::Deselect)
    }

    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.events.push(SpiEvent::Write(data.to_vec()));
        if !self.selected {
            return Err(Error::Transport("write without chip select".into()));
        }
        self.check(SpiOp::Write)
    }
}
