//! Supported database versions.
//!
//! Each supported Postgres major version maps to exactly one container image
//! and one initial-schema asset used to bootstrap a fresh database.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};

/// Image for Postgres 13 projects.
pub const PG13_IMAGE: &str = "devstack/postgres:13.3.0";
/// Image for Postgres 14 projects.
pub const PG14_IMAGE: &str = "devstack/postgres:14.1.0.89";
/// Image for Postgres 15 projects.
pub const PG15_IMAGE: &str = "devstack/postgres:15.1.0.33";

const PG13_INITIAL_SCHEMA: &str = include_str!("../templates/initial_schemas/13.sql");
const PG14_INITIAL_SCHEMA: &str = include_str!("../templates/initial_schemas/14.sql");
const PG15_INITIAL_SCHEMA: &str = include_str!("../templates/initial_schemas/15.sql");

/// Last major version that was supported before the current set.
const DEPRECATED_VERSION: u32 = 12;

/// A supported Postgres major version.
///
/// # Examples
///
/// ```
/// use devstack::PostgresVersion;
///
/// let version = PostgresVersion::from_major(15).unwrap();
/// assert_eq!(version.major(), 15);
/// assert!(version.image().contains("15"));
/// assert!(PostgresVersion::from_major(12).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PostgresVersion {
    /// Postgres 13.x
    V13,
    /// Postgres 14.x
    V14,
    /// Postgres 15.x
    V15,
}

impl PostgresVersion {
    /// All supported versions, oldest first.
    pub const ALL: [Self; 3] = [Self::V13, Self::V14, Self::V15];

    /// Selects the version for `db.major_version`.
    ///
    /// # Errors
    ///
    /// - [`Error::MissingRequiredField`] for 0 (the field was not set)
    /// - [`Error::DeprecatedVersion`] for 12
    /// - [`Error::UnsupportedVersion`] for anything else outside 13..=15
    pub fn from_major(major: u32) -> Result<Self> {
        match major {
            0 => Err(Error::missing("db.major_version")),
            DEPRECATED_VERSION => Err(Error::DeprecatedVersion { value: major }),
            13 => Ok(Self::V13),
            14 => Ok(Self::V14),
            15 => Ok(Self::V15),
            value => Err(Error::UnsupportedVersion { value }),
        }
    }

    /// The numeric major version.
    #[must_use]
    pub const fn major(self) -> u32 {
        match self {
            Self::V13 => 13,
            Self::V14 => 14,
            Self::V15 => 15,
        }
    }

    /// Container image tag for this version.
    #[must_use]
    pub const fn image(self) -> &'static str {
        match self {
            Self::V13 => PG13_IMAGE,
            Self::V14 => PG14_IMAGE,
            Self::V15 => PG15_IMAGE,
        }
    }

    /// SQL applied to a fresh database of this version.
    #[must_use]
    pub const fn initial_schema(self) -> &'static str {
        match self {
            Self::V13 => PG13_INITIAL_SCHEMA,
            Self::V14 => PG14_INITIAL_SCHEMA,
            Self::V15 => PG15_INITIAL_SCHEMA,
        }
    }
}

impl fmt::Display for PostgresVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.major())
    }
}

impl Serialize for PostgresVersion {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.major())
    }
}
