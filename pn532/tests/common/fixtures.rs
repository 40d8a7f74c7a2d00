// fixtures.rs — reference frames taken from the PN532 user manual

/// GetFirmwareVersion as it appears on the wire (no SPI marker)
pub fn firmware_version_frame() -> Vec<u8> {
    hex::decode("0000ff02fed4022a00").unwrap()
}

/// GetFirmwareVersion preceded by the SPI data-write marker
pub fn firmware_version_bus_bytes() -> Vec<u8> {
    hex::decode("010000ff02fed4022a00").unwrap()
}

/// SAMConfiguration (0x14): normal mode, timeout 0x14 (1 s), use IRQ
pub fn sam_configuration_args() -> Vec<u8> {
    vec![0x01, 0x14, 0x01]
}

pub fn sam_configuration_frame() -> Vec<u8> {
    hex::decode("0000ff05fbd4140114010200").unwrap()
}

/// InListPassiveTarget (0x4A): one target, 106 kbps type A
pub fn in_list_passive_target_frame() -> Vec<u8> {
    hex::decode("0000ff04fcd44a0100e100").unwrap()
}
