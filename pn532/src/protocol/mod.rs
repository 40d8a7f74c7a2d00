// pn532/src/protocol/mod.rs

//! Host -> PN532 frame construction.

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;

pub use checksum::{dcs, lcs};
pub use codec::encode_command_frame;
pub use commands::{Command, CommandCode};
pub use frame::Frame;
