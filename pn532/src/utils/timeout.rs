//! Timeout helpers used by the serial-backed transports.

use std::time::Duration;

/// Serial read/write timeout in milliseconds used when a transport is
/// opened without an explicit configuration.
pub const DEFAULT_SERIAL_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}
