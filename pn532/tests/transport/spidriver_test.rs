#[path = "../common/mod.rs"]
mod common;

use pn532::bus::write_command;
use pn532::transport::SpiDriver;

#[test]
fn firmware_version_as_spidriver_stream() {
    let mut d = SpiDriver::new(Vec::new());
    write_command(&mut d, &common::fixtures::firmware_version_frame()).unwrap();

    let mut expected = vec![b's', 0xC0 + 9];
    expected.extend_from_slice(&common::fixtures::firmware_version_bus_bytes());
    expected.push(b'u');
    assert_eq!(d.into_inner(), expected);
}
