// pn532/src/device/handle.rs

use crate::Result;
use crate::bus;
use crate::protocol::Command;
use crate::protocol::codec;
use crate::transport::SpiBus;

/// PN532 attached to an SPI bus.
///
/// The handle holds the bus it was given; there is no process-wide bus.
/// `B` may be an owned bus or `&mut` borrow of one, in which case the caller
/// gets the bus back as soon as the handle goes out of scope.
pub struct Pn532<B: SpiBus> {
    bus: B,
}

impl<B: SpiBus> Pn532<B> {
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Frame `cmd` and write it to the chip in one bus transaction.
    ///
    /// Only the write half of the exchange is performed; the ACK and
    /// response frames are left unread on the chip.
    pub fn send_command(&mut self, cmd: &Command) -> Result<()> {
        let frame = codec::encode_command_frame(cmd)?;
        log::debug!(
            "sending command {:#04x} ({} parameter bytes)",
            cmd.opcode(),
            cmd.args().len()
        );
        bus::write_command(&mut self.bus, &frame)
    }

    /// Issue GetFirmwareVersion.
    pub fn get_firmware_version(&mut self) -> Result<()> {
        self.send_command(&Command::get_firmware_version())
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    pub fn into_inner(self) -> B {
        self.bus
    }
}
