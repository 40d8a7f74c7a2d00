// pn532/src/protocol/codec.rs

use crate::Result;

use super::Frame;
use super::commands::Command;

/// Encode a Command into a full wire frame (preamble/LEN/LCS/TFI/DCS/postamble).
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    let data = cmd.encode();
    Frame::encode(&data)
}
