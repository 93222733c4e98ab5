//! Millisecond timestamps as emitted by the AtomicAssets API.
//!
//! The upstream service encodes the same logical field as a JSON number on
//! some endpoints and as a numeric string on others, and occasionally as
//! `null`. [`Timestamp`] accepts all three forms:
//!
//! - `1646996870500` and `"1646996870500"` decode to the same value
//! - `null` decodes to zero (the Unix epoch)
//!
//! Timestamps are receive-only, so no `Serialize` implementation exists.

use chrono::{DateTime, Duration, Utc};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use std::fmt;

/// Milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The Unix epoch.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw millisecond value.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Milliseconds since the Unix epoch.
    #[must_use]
    pub const fn as_epoch_millis(self) -> i64 {
        self.0
    }

    /// Convert to a UTC wall-clock instant.
    ///
    /// The value is split into whole seconds and a millisecond remainder using
    /// truncating division, so for negative values the remainder carries the
    /// sign of the input. Seconds and remainder are applied as signed offsets
    /// from the epoch.
    ///
    /// Returns `None` when the value lies outside the range `chrono` can
    /// represent.
    #[must_use]
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let seconds = self.0 / 1000;
        let millis = self.0 % 1000;

        DateTime::<Utc>::UNIX_EPOCH
            .checked_add_signed(Duration::try_seconds(seconds)?)?
            .checked_add_signed(Duration::try_milliseconds(millis)?)
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl From<Timestamp> for i64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, a numeric string or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Timestamp(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        i64::try_from(v)
            .map(Timestamp)
            .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse::<i64>()
            .map(Timestamp)
            .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Timestamp::ZERO)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Timestamp::ZERO)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}
