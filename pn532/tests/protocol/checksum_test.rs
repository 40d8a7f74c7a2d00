#[path = "../common/mod.rs"]
mod common;

use pn532::constants::PN532_HOST_TO_PN532;
use pn532::protocol::{dcs, lcs};

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(2), 0xfe);
    assert_eq!(lcs(5), 0xfb);
    assert_eq!(lcs(0xff), 0x01);

    assert_eq!(dcs(PN532_HOST_TO_PN532, &[0x02]), 0x2a);
    assert_eq!(dcs(PN532_HOST_TO_PN532, &[0x14, 0x01, 0x14, 0x01]), 0x02);
    assert_eq!(dcs(PN532_HOST_TO_PN532, &[]), 0x2c);
}

#[test]
fn fixture_frames_satisfy_both_checksums() {
    for frame in [
        common::fixtures::firmware_version_frame(),
        common::fixtures::sam_configuration_frame(),
        common::fixtures::in_list_passive_target_frame(),
    ] {
        let len = frame[3];
        assert_eq!(len.wrapping_add(frame[4]), 0);
        // TFI + data + DCS
        let body = &frame[5..5 + len as usize + 1];
        assert_eq!(body.iter().fold(0u8, |acc, &b| acc.wrapping_add(b)), 0);
    }
}
