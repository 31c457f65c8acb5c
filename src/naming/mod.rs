//! Folder naming strategies
//!
//! A naming strategy derives the name of the duplicate from the base name of
//! the source folder. Every strategy is total: it always produces a name.

use chrono::{Local, NaiveDateTime};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of the `YYYYMMDDHHMMSS` stamp written by [`NamingStrategy::AutoTimestamp`]
const AUTO_TIMESTAMP_DIGITS: usize = 14;

/// Policy used to derive a new folder name from an existing one
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NamingStrategy {
    /// Always use the given name, whatever the input
    Custom(String),

    /// Append `_YYYY-MM-DD_HH-MM-SS`
    TimestampSuffix,

    /// Replace a trailing `.YYYYMMDDHHMMSS` stamp, or add one
    AutoTimestamp,

    /// Increment a trailing `_N` counter, or add `_1`
    Sequential,
}

impl NamingStrategy {
    /// Generate a name from `base_name` using the current local time
    #[must_use]
    #[inline]
    pub fn generate_name(&self, base_name: &str) -> String {
        self.generate_name_at(base_name, Local::now().naive_local())
    }

    /// Generate a name from `base_name` as if the local time were `now`
    #[must_use]
    pub fn generate_name_at(&self, base_name: &str, now: NaiveDateTime) -> String {
        match *self {
            Self::Custom(ref name) => name.clone(),
            Self::TimestampSuffix => {
                format!("{base_name}_{}", now.format("%Y-%m-%d_%H-%M-%S"))
            }
            Self::AutoTimestamp => {
                let cleaned = strip_auto_timestamp(base_name);
                format!("{cleaned}.{}", now.format("%Y%m%d%H%M%S"))
            }
            Self::Sequential => next_sequential_name(base_name),
        }
    }
}

impl From<NamingKind> for NamingStrategy {
    #[inline]
    fn from(kind: NamingKind) -> Self {
        match kind {
            NamingKind::Timestamp => Self::TimestampSuffix,
            NamingKind::AutoTimestamp => Self::AutoTimestamp,
            NamingKind::Sequential => Self::Sequential,
        }
    }
}

/// Selects the strategy used to suggest a name when none is given explicitly
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[non_exhaustive]
pub enum NamingKind {
    /// `name_YYYY-MM-DD_HH-MM-SS`
    Timestamp,
    /// `name.YYYYMMDDHHMMSS`, replacing a previous stamp
    #[default]
    AutoTimestamp,
    /// `name_1`, `name_2`, ...
    Sequential,
}

impl fmt::Display for NamingKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::Timestamp => "timestamp",
            Self::AutoTimestamp => "auto-timestamp",
            Self::Sequential => "sequential",
        };
        f.write_str(name)
    }
}

/// Remove one trailing `.` followed by exactly 14 ASCII digits
fn strip_auto_timestamp(name: &str) -> &str {
    let bytes = name.as_bytes();
    if bytes.len() <= AUTO_TIMESTAMP_DIGITS {
        return name;
    }

    let split = bytes.len() - AUTO_TIMESTAMP_DIGITS;
    let (head, stamp) = bytes.split_at(split);
    if head.last() == Some(&b'.') && stamp.iter().all(u8::is_ascii_digit) {
        // Both cut points sit on ASCII bytes, so they are char boundaries
        &name[..split - 1]
    } else {
        name
    }
}

/// Bump a trailing `_<digits>` counter or append `_1`
fn next_sequential_name(name: &str) -> String {
    let digits_len = name
        .bytes()
        .rev()
        .take_while(u8::is_ascii_digit)
        .count();
    let prefix_len = name.len() - digits_len;

    if digits_len == 0 || !name[..prefix_len].ends_with('_') {
        return format!("{name}_1");
    }

    let counter = increment_decimal(&name[prefix_len..]);
    format!("{}{counter}", &name[..prefix_len])
}

/// Add one to a string of ASCII digits, dropping leading zeros first
fn increment_decimal(digits: &str) -> String {
    let trimmed = digits.trim_start_matches('0');
    let mut out: Vec<u8> = trimmed.bytes().collect();

    let mut carry = true;
    for byte in out.iter_mut().rev() {
        if *byte == b'9' {
            *byte = b'0';
        } else {
            *byte += 1;
            carry = false;
            break;
        }
    }
    if carry {
        out.insert(0, b'1');
    }

    out.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_strip_auto_timestamp() {
        assert_eq!(strip_auto_timestamp("project.20250101103045"), "project");
        assert_eq!(strip_auto_timestamp("project.123"), "project.123");
        assert_eq!(strip_auto_timestamp("20250101103045"), "20250101103045");
        assert_eq!(strip_auto_timestamp(".20250101103045"), "");
        assert_eq!(strip_auto_timestamp("a.2025010110304"), "a.2025010110304");
        assert_eq!(strip_auto_timestamp("a_20250101103045"), "a_20250101103045");
    }

    #[test]
    fn test_strip_only_one_stamp() {
        assert_eq!(
            strip_auto_timestamp("p.20240101000000.20250101000000"),
            "p.20240101000000"
        );
    }

    #[test]
    fn test_strip_handles_non_ascii_prefix() {
        assert_eq!(strip_auto_timestamp("d\u{e9}j\u{e0}.20250101103045"), "d\u{e9}j\u{e0}");
    }

    #[test]
    fn test_increment_decimal() {
        assert_eq!(increment_decimal("5"), "6");
        assert_eq!(increment_decimal("9"), "10");
        assert_eq!(increment_decimal("199"), "200");
        assert_eq!(increment_decimal("007"), "8");
        assert_eq!(increment_decimal("0"), "1");
        assert_eq!(
            increment_decimal("99999999999999999999999999"),
            "100000000000000000000000000"
        );
    }

    #[test]
    fn test_next_sequential_name() {
        assert_eq!(next_sequential_name("myFolder"), "myFolder_1");
        assert_eq!(next_sequential_name("myFolder_5"), "myFolder_6");
        assert_eq!(next_sequential_name("v2"), "v2_1");
        assert_eq!(next_sequential_name("a_b_9"), "a_b_10");
        assert_eq!(next_sequential_name("_"), "__1");
        assert_eq!(next_sequential_name(""), "_1");
    }

    #[test]
    fn test_timestamp_suffix_format() {
        let name = NamingStrategy::TimestampSuffix.generate_name_at("myFolder", at(2025, 3, 5, 8, 5, 9));
        assert_eq!(name, "myFolder_2025-03-05_08-05-09");
    }

    #[test]
    fn test_kind_maps_to_strategy() {
        assert_eq!(
            NamingStrategy::from(NamingKind::Timestamp),
            NamingStrategy::TimestampSuffix
        );
        assert_eq!(
            NamingStrategy::from(NamingKind::AutoTimestamp),
            NamingStrategy::AutoTimestamp
        );
        assert_eq!(
            NamingStrategy::from(NamingKind::Sequential),
            NamingStrategy::Sequential
        );
        assert_eq!(NamingKind::default().to_string(), "auto-timestamp");
    }
}
