// pn532/src/constants.rs
//! PN532 frame and SPI constants

/// Frame preamble: 0x00
pub const PN532_PREAMBLE: u8 = 0x00;

/// Start-of-packet code, first byte: 0x00
pub const PN532_START_CODE1: u8 = 0x00;

/// Start-of-packet code, second byte: 0xFF
pub const PN532_START_CODE2: u8 = 0xFF;

/// Frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Frame identifier for host -> PN532 frames
pub const PN532_HOST_TO_PN532: u8 = 0xD4;

/// SPI function-select byte preceding a data write. Not covered by the
/// frame checksums.
pub const PN532_SPI_DATA_WRITE: u8 = 0x01;

/// Fixed bytes of every frame: preamble, two start codes, LEN, LCS, TFI,
/// DCS and postamble. A frame is this plus its data section.
pub const PN532_FRAME_OVERHEAD: usize = 8;

/// Largest value the LEN field (TFI + data) can carry
pub const PN532_MAX_LEN: usize = 255;

/// PN532 GetFirmwareVersion command code
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
