// ============================================================================
// Unique Identifier
// 64-bit decimal-packed timestamp + sequence value
// ============================================================================

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Identifier laid out in decimal digits as `YYMMDDHHMMSSmmmNNN`:
/// two-digit UTC year through milliseconds, then a three-digit sequence.
///
/// Within one century, identifiers from later milliseconds compare greater.
///
/// # Example
/// ```
/// use trade_helpers::ids::UniqueId;
///
/// let id = UniqueId::from_raw(240305140709123004);
/// assert_eq!(id.sequence(), 4);
/// assert_eq!(id.millis_part(), 240305140709123);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct UniqueId(u64);

impl UniqueId {
    /// Number of distinct sequence values per millisecond.
    pub const SEQUENCE_LIMIT: u16 = 1000;

    /// Pack `time` (millisecond resolution, UTC) and `sequence` (< 1000).
    pub(crate) fn encode(time: DateTime<Utc>, sequence: u16) -> Self {
        // Leap-second nanos run past 999ms
        let millis = (time.nanosecond() / 1_000_000).min(999) as u64;
        let packed = [
            time.year().rem_euclid(100) as u64,
            time.month() as u64,
            time.day() as u64,
            time.hour() as u64,
            time.minute() as u64,
            time.second() as u64,
        ]
        .iter()
        .fold(0u64, |acc, part| acc * 100 + part);

        Self((packed * 1000 + millis) * 1000 + sequence as u64)
    }

    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// The per-millisecond sequence counter (last three digits).
    #[inline]
    pub const fn sequence(self) -> u16 {
        (self.0 % Self::SEQUENCE_LIMIT as u64) as u16
    }

    /// The `YYMMDDHHMMSSmmm` timestamp digits.
    #[inline]
    pub const fn millis_part(self) -> u64 {
        self.0 / Self::SEQUENCE_LIMIT as u64
    }

    /// Decode the timestamp, assuming the 2000-2099 century.
    ///
    /// Returns `None` when the digits do not form a valid date and time.
    pub fn datetime(self) -> Option<DateTime<Utc>> {
        let mut rest = self.millis_part();
        let millis = (rest % 1000) as u32;
        rest /= 1000;

        let mut fields = [0u32; 6];
        for field in fields.iter_mut().rev() {
            *field = (rest % 100) as u32;
            rest /= 100;
        }
        if rest != 0 {
            return None;
        }

        let [year, month, day, hour, minute, second] = fields;
        NaiveDate::from_ymd_opt(2000 + year as i32, month, day)?
            .and_hms_milli_opt(hour, minute, second, millis)
            .map(|naive| naive.and_utc())
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UniqueId> for u64 {
    #[inline]
    fn from(id: UniqueId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    fn sample_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 5, 14, 7, 9).unwrap() + TimeDelta::milliseconds(123)
    }

    #[test]
    fn test_encode() {
        let id = UniqueId::encode(sample_time(), 0);
        assert_eq!(id.as_u64(), 240_305_140_709_123_000);
        assert_eq!(id.to_string(), "240305140709123000");

        let id = UniqueId::encode(sample_time(), 999);
        assert_eq!(u64::from(id), 240_305_140_709_123_999);
    }

    #[test]
    fn test_encode_pads_fields() {
        let time = Utc.with_ymd_and_hms(2031, 1, 2, 3, 4, 5).unwrap() + TimeDelta::milliseconds(6);
        assert_eq!(UniqueId::encode(time, 7).as_u64(), 310_102_030_405_006_007);
    }

    #[test]
    fn test_accessors() {
        let id = UniqueId::encode(sample_time(), 42);
        assert_eq!(id.sequence(), 42);
        assert_eq!(id.millis_part(), 240_305_140_709_123);
    }

    #[test]
    fn test_datetime_round_trip() {
        let id = UniqueId::encode(sample_time(), 5);
        assert_eq!(id.datetime(), Some(sample_time()));
    }

    #[test]
    fn test_datetime_invalid() {
        // Month 13
        assert_eq!(UniqueId::from_raw(241305140709123000).datetime(), None);
        // More than 18 digits
        assert_eq!(UniqueId::from_raw(12_240305140709123000).datetime(), None);
    }

    #[test]
    fn test_ordering_follows_time() {
        let earlier = UniqueId::encode(sample_time(), 999);
        let later = UniqueId::encode(sample_time() + TimeDelta::milliseconds(1), 0);
        assert!(later > earlier);

        let next_year = UniqueId::encode(sample_time() + TimeDelta::days(365), 0);
        assert!(next_year > later);
    }
}
