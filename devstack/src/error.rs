//! Error types for the devstack library.
//!
//! Every stage of configuration loading reports through the single [`Error`]
//! enum. Loading is fail-fast: the first error aborts the whole load.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a devstack error.
///
/// # Examples
///
/// ```
/// use devstack::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(54321)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Where the project setup migration guide lives.
const MIGRATION_GUIDE: &str = "https://devstack.dev/docs/guides/database#migrating-between-projects";

/// The main error type for the devstack library.
#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration field is missing or empty.
    #[error("missing required field in config: {field}")]
    MissingRequiredField {
        /// Fully-qualified field path, e.g. `auth.sms.twilio.account_sid`.
        field: String,
    },

    /// A configuration field holds a value that is not allowed.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// `db.major_version` names a version with no image.
    #[error("failed reading config: invalid db.major_version: {value}")]
    UnsupportedVersion {
        /// The configured major version.
        value: u32,
    },

    /// `db.major_version` names a version that used to be supported.
    #[error(
        "Postgres version {value}.x is unsupported. To use the CLI, either start a new project \
         or follow project migration steps here: {}",
        MIGRATION_GUIDE
    )]
    DeprecatedVersion {
        /// The configured major version.
        value: u32,
    },

    /// An `env(NAME)` reference points at a variable that is unset or empty.
    #[error("error evaluating \"{expression}\": environment variable {name} is unset")]
    EnvVarUnset {
        /// The expression as written in the config file.
        expression: String,
        /// The referenced variable name.
        name: String,
    },

    /// The `.env` secret file exists but cannot be parsed.
    #[error("malformed secret file {}: {source}", path.display())]
    MalformedSecretFile {
        /// Path of the secret file.
        path: PathBuf,
        /// The underlying parser error.
        #[source]
        source: dotenvy::Error,
    },

    /// A byte size string could not be parsed.
    #[error("invalid size value {token:?}: {reason}")]
    MalformedSizeValue {
        /// The offending token.
        token: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The project configuration file could not be read.
    #[error("cannot read config in {}: {}: {source}", dir.display(), path.display())]
    ConfigRead {
        /// Project root the load was started from.
        dir: PathBuf,
        /// Path of the config file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The project configuration file is not valid TOML or has mistyped fields.
    #[error("cannot read config in {}: {}: {source}", dir.display(), path.display())]
    ConfigParse {
        /// Project root the load was started from.
        dir: PathBuf,
        /// Path of the config file.
        path: PathBuf,
        /// The underlying decode error.
        #[source]
        source: toml::de::Error,
    },

    /// A filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// The path being operated on.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Builds a [`Error::MissingRequiredField`] for the given path.
    #[must_use]
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// A follow-up hint for the user, when one applies.
    ///
    /// # Examples
    ///
    /// ```
    /// use devstack::Error;
    ///
    /// let err = Error::missing("api.port");
    /// assert!(err.suggestion().is_none());
    /// ```
    #[must_use]
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::ConfigRead { .. } | Self::ConfigParse { .. } => {
                Some("Have you set up the project with `devstack init`?".to_string())
            }
            _ => None,
        }
    }

    /// Check if the error comes from the content of the configuration rather
    /// than from the environment it was loaded in.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        !matches!(self, Self::Io { .. })
    }
}
