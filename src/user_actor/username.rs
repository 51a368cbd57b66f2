//! Username derivation.
//!
//! A username is `first.last.<stamp>`: both names lowercased, followed by the UTC creation
//! time as `YYYYMMDDhhmmss` plus six digits of microseconds.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

const STAMP_FORMAT: &str = "%Y%m%d%H%M%S%6f";

/// Issues creation stamps for the user store.
///
/// Stamps are strictly increasing per clock: two users created within the same
/// microsecond get stamps one microsecond apart, so usernames never collide within a
/// process run even for identical names.
#[derive(Debug, Default)]
pub struct UsernameClock {
    last_micros: AtomicI64,
}

impl UsernameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next stamp, never earlier than the wall clock and always after the previous one.
    pub fn next_stamp(&self) -> String {
        let now = Utc::now().timestamp_micros();
        let previous = self
            .last_micros
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        format_stamp(now.max(previous + 1))
    }
}

fn format_stamp(micros: i64) -> String {
    match DateTime::<Utc>::from_timestamp_micros(micros) {
        Some(at) => at.format(STAMP_FORMAT).to_string(),
        None => micros.to_string(),
    }
}

/// Builds `first.last.stamp` with both names lowercased.
pub fn derive_username(first_name: &str, last_name: &str, stamp: &str) -> String {
    format!(
        "{}.{}.{}",
        first_name.to_lowercase(),
        last_name.to_lowercase(),
        stamp
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_derive_username_lowercases_names() {
        assert_eq!(
            derive_username("Jane", "DOE", "20250102030405123456"),
            "jane.doe.20250102030405123456"
        );
    }

    #[test]
    fn test_stamp_format() {
        // 2024-03-05T06:07:08.000009Z
        assert_eq!(format_stamp(1_709_618_828_000_009), "20240305060708000009");

        let stamp = UsernameClock::new().next_stamp();
        assert_eq!(stamp.len(), 20);
        assert!(stamp.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_stamps_never_repeat() {
        let clock = UsernameClock::new();
        let stamps: Vec<String> = (0..1000).map(|_| clock.next_stamp()).collect();
        let unique: HashSet<&String> = stamps.iter().collect();
        assert_eq!(unique.len(), stamps.len());

        let mut sorted = stamps.clone();
        sorted.sort();
        assert_eq!(sorted, stamps);
    }
}
