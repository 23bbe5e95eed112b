//! Human-readable byte sizes.
//!
//! Size fields accept strings such as `"5MB"`, `"32kB"`, `"50MiB"` or `"1.5g"`.
//! Every unit is a binary multiple: `k` is 1024, `m` is 1024², and so on.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Number, optional space, optional unit letter, optional `i`, optional `b`.
static SIZE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)*) ?([kKmMgGtTpP])?[iI]?[bB]?$").expect("static regex is valid")
});

const KIB: f64 = 1024.0;

/// A byte count decoded from a human-readable size.
///
/// # Examples
///
/// ```
/// use devstack::config::SizeInBytes;
///
/// let size: SizeInBytes = "5MB".parse().unwrap();
/// assert_eq!(size.bytes(), 5 * 1024 * 1024);
/// assert!("five megabytes".parse::<SizeInBytes>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SizeInBytes(u64);

impl SizeInBytes {
    /// Wraps a raw byte count.
    #[must_use]
    pub const fn new(bytes: u64) -> Self {
        Self(bytes)
    }

    /// The byte count.
    #[must_use]
    pub const fn bytes(self) -> u64 {
        self.0
    }
}

impl FromStr for SizeInBytes {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| Error::MalformedSizeValue {
            token: token.to_string(),
            reason: reason.to_string(),
        };

        let captures = SIZE_PATTERN.captures(token).ok_or_else(|| {
            malformed("expected a number followed by an optional unit (k, m, g, t, p)")
        })?;

        let number: f64 = captures[1]
            .parse()
            .map_err(|_| malformed("not a decimal number"))?;

        let exponent = match captures.get(2).map(|m| m.as_str().to_ascii_lowercase()) {
            None => 0,
            Some(unit) => match unit.as_str() {
                "k" => 1,
                "m" => 2,
                "g" => 3,
                "t" => 4,
                _ => 5,
            },
        };

        let bytes = number * KIB.powi(exponent);
        if !bytes.is_finite() || bytes >= u64::MAX as f64 {
            return Err(malformed("size is too large"));
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let bytes = bytes as u64;
        Ok(Self(bytes))
    }
}

impl fmt::Display for SizeInBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B", self.0)
    }
}

impl Serialize for SizeInBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(self.0)
    }
}

impl<'de> Deserialize<'de> for SizeInBytes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Bytes(i64),
            Text(String),
        }

        match Helper::deserialize(deserializer)? {
            Helper::Bytes(value) => u64::try_from(value)
                .map(SizeInBytes)
                .map_err(|_| D::Error::custom(format!("byte size cannot be negative: {value}"))),
            Helper::Text(value) => value.parse().map_err(D::Error::custom),
        }
    }
}
