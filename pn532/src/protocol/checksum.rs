// pn532/src/protocol/checksum.rs

/// Compute the Length Checksum (LCS) for a PN532 frame.
/// LCS is the two's-complement negation of LEN, so `LEN + LCS == 0 (mod 256)`.
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute the Data Checksum (DCS) for a PN532 frame.
/// The accumulator starts at `-tfi` and every data byte is subtracted from
/// it, so `tfi + sum(data) + DCS == 0 (mod 256)`.
pub fn dcs(tfi: u8, data: &[u8]) -> u8 {
    data.iter()
        .fold(0u8.wrapping_sub(tfi), |acc, &b| acc.wrapping_sub(b))
}
