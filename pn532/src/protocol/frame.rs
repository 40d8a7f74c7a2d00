// pn532/src/protocol/frame.rs

use crate::constants::{
    PN532_FRAME_OVERHEAD, PN532_HOST_TO_PN532, PN532_MAX_LEN, PN532_POSTAMBLE, PN532_PREAMBLE,
    PN532_START_CODE1, PN532_START_CODE2,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 normal information frame, host -> PN532 direction.
///
/// Format: [Preamble] [Start(2)] [LEN] [LCS] [TFI] [Data(n)] [DCS] [Postamble]
/// Preamble: 0x00, Start: 0x00 0xFF, TFI: 0xD4, Postamble: 0x00
///
/// LEN counts TFI plus the data bytes. The data section starts with the
/// command code; the encoder does not treat it differently from the
/// arguments that follow.
pub struct Frame;

impl Frame {
    /// Encode a data section (command code + parameters) into a full frame.
    ///
    /// Fails with [`Error::LengthOverflow`] when TFI + data would not fit in
    /// the one-byte LEN field.
    pub fn encode(data: &[u8]) -> Result<Vec<u8>> {
        let len = 1 + data.len();
        if len > PN532_MAX_LEN {
            return Err(Error::LengthOverflow { len });
        }

        let len = len as u8;
        let lcs = lcs(len);
        let dcs = dcs(PN532_HOST_TO_PN532, data);
        log::trace!("frame LEN={:#04x} LCS={:#04x} DCS={:#04x}", len, lcs, dcs);

        let mut out = Vec::with_capacity(PN532_FRAME_OVERHEAD + data.len());
        out.push(PN532_PREAMBLE);
        out.push(PN532_START_CODE1);
        out.push(PN532_START_CODE2);
        out.push(len);
        out.push(lcs);
        out.push(PN532_HOST_TO_PN532);
        out.extend_from_slice(data);
        out.push(dcs);
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }
}
