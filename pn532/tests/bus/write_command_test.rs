#[path = "../common/mod.rs"]
mod common;

use pn532::Error;
use pn532::bus::write_command;
use pn532::transport::mock::{MockSpi, SpiEvent, SpiOp};

#[test]
fn firmware_version_bus_bytes() {
    common::init_logging();
    let mut m = MockSpi::new();
    write_command(&mut m, &common::fixtures::firmware_version_frame()).unwrap();
    assert_eq!(
        m.events,
        vec![
            SpiEvent::Select,
            SpiEvent::Write(common::fixtures::firmware_version_bus_bytes()),
            SpiEvent::Deselect,
        ]
    );
}

#[test]
fn one_burst_per_transaction() {
    let mut m = MockSpi::new();
    let frame = common::fixtures::sam_configuration_frame();
    write_command(&mut m, &frame).unwrap();
    write_command(&mut m, &frame).unwrap();

    assert_eq!(m.writes().len(), 2);
    for w in m.writes() {
        assert_eq!(w, common::helpers::expected_bus_bytes(&frame).as_slice());
    }
    assert_eq!(
        m.events,
        vec![
            SpiEvent::Select,
            SpiEvent::Write(common::helpers::expected_bus_bytes(&frame)),
            SpiEvent::Deselect,
            SpiEvent::Select,
            SpiEvent::Write(common::helpers::expected_bus_bytes(&frame)),
            SpiEvent::Deselect,
        ]
    );
}

#[test]
fn write_failure_releases_bus_and_surfaces_error() {
    let mut m = common::helpers::mock_failing_on(&[SpiOp::Write]);
    let err = write_command(&mut m, &common::fixtures::firmware_version_frame()).unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert_eq!(
        m.events,
        vec![
            SpiEvent::Select,
            SpiEvent::Write(common::fixtures::firmware_version_bus_bytes()),
            SpiEvent::Deselect,
        ]
    );
    assert!(!m.is_selected());
}

#[test]
fn bus_is_reusable_after_failed_transaction() {
    let mut m = common::helpers::mock_failing_on(&[SpiOp::Write]);
    assert!(write_command(&mut m, &[0x00]).is_err());
    m.failures.clear();
    write_command(&mut m, &[0x00]).unwrap();
    assert_eq!(m.events.len(), 6);
}
