#[path = "../common/mod.rs"]
mod common;

use pn532::transport::SpiBus;
use pn532::transport::mock::{MockSpi, SpiEvent, SpiOp};

#[test]
fn mock_spi_records_in_call_order() {
    let mut m = MockSpi::new();
    m.select().unwrap();
    m.write(&[0xAA]).unwrap();
    m.deselect().unwrap();
    assert_eq!(
        m.events,
        vec![SpiEvent::Select, SpiEvent::Write(vec![0xAA]), SpiEvent::Deselect]
    );
}

#[test]
fn injected_select_failure_leaves_bus_released() {
    let mut m = common::helpers::mock_failing_on(&[SpiOp::Select]);
    assert!(m.select().is_err());
    assert!(!m.is_selected());
}
