// pn532/src/prelude.rs

pub use crate::bus::{BusSession, write_command};
pub use crate::device::Pn532;
pub use crate::protocol::{Command, CommandCode, Frame, encode_command_frame};
pub use crate::transport::SpiBus;
pub use crate::{Error, Result};

// Re-export small utilities for convenience
pub use crate::utils::{HexBytes, parse_hex};
