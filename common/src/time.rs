// A simple module to define the time types used in the project
//
// The functions here use SystemTime::now() which is NON-DETERMINISTIC.
// Safe usage: sale-window admission, logging timestamps, test clocks.
// Deterministic replay must inject timestamps explicitly instead.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// Seconds timestamps used to determine it using its type
pub type TimestampSeconds = u64;

#[inline]
pub fn get_current_time() -> Duration {
    let start = SystemTime::now();

    start
        .duration_since(UNIX_EPOCH)
        .expect("Incorrect time returned from get_current_time")
}

// Return timestamp in seconds
pub fn get_current_time_in_seconds() -> TimestampSeconds {
    get_current_time().as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_time_is_after_2020() {
        // 2020-01-01T00:00:00Z
        assert!(get_current_time_in_seconds() > 1_577_836_800);
    }
}
