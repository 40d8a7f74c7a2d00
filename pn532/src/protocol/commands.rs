// pn532/src/protocol/commands.rs

use derive_more::Display;

use crate::constants::PN532_CMD_GET_FIRMWARE_VERSION;

/// Catalog of known PN532 command codes. Entries are only ever added;
/// existing discriminants never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CommandCode {
    /// Query IC type, firmware version and supported card families
    GetFirmwareVersion = PN532_CMD_GET_FIRMWARE_VERSION,
}

impl CommandCode {
    /// Raw command code byte
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Look up a raw code in the catalog.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            PN532_CMD_GET_FIRMWARE_VERSION => Some(Self::GetFirmwareVersion),
            _ => None,
        }
    }
}

impl From<CommandCode> for u8 {
    fn from(code: CommandCode) -> Self {
        code.code()
    }
}

/// A host command: command code followed by its parameter bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Command {
    opcode: u8,
    args: Vec<u8>,
}

impl Command {
    /// Build a command from a raw opcode. Codes outside [`CommandCode`]
    /// are accepted as-is.
    pub fn new(opcode: u8, args: impl Into<Vec<u8>>) -> Self {
        Self {
            opcode,
            args: args.into(),
        }
    }

    /// Build a command for a catalog entry.
    pub fn with_code(code: CommandCode, args: impl Into<Vec<u8>>) -> Self {
        Self::new(code.code(), args)
    }

    /// GetFirmwareVersion takes no parameters.
    pub fn get_firmware_version() -> Self {
        Self::with_code(CommandCode::GetFirmwareVersion, Vec::new())
    }

    /// Raw command code
    pub fn opcode(&self) -> u8 {
        self.opcode
    }

    /// Catalog entry for this command, if it is a known one
    pub fn code(&self) -> Option<CommandCode> {
        CommandCode::from_code(self.opcode)
    }

    /// Parameter bytes following the command code
    pub fn args(&self) -> &[u8] {
        &self.args
    }

    /// Encode the command into the frame's data section (command code +
    /// params).
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(1 + self.args.len());
        out.push(self.opcode);
        out.extend_from_slice(&self.args);
        out
    }
}
