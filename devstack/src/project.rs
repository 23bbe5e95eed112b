//! Project identifiers.
//!
//! A project id names a project on the local host and seeds every derived
//! container and network identifier, so it is restricted to characters that
//! are safe in those names.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};

/// Maximal runs of characters not allowed in a project id.
static INVALID_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_.-]+").expect("static regex is valid"));

/// Characters a project id may not start with.
const SEPARATORS: &[char] = &['_', '.', '-'];

/// Normalizes an arbitrary string into a usable project id.
///
/// Each run of characters outside `[A-Za-z0-9_.-]` becomes one underscore,
/// then leading `_`, `.` and `-` are stripped. The result may be empty when
/// the input has no usable characters.
///
/// # Examples
///
/// ```
/// use devstack::sanitize_project_id;
///
/// assert_eq!(sanitize_project_id("My Proj!!2024"), "My_Proj_2024");
/// assert_eq!(sanitize_project_id("--.hidden"), "hidden");
/// ```
#[must_use]
pub fn sanitize_project_id(src: &str) -> String {
    let sanitized = INVALID_RUN.replace_all(src, "_");
    sanitized.trim_start_matches(SEPARATORS).to_string()
}

/// A validated project id.
///
/// # Examples
///
/// ```
/// use devstack::ProjectId;
///
/// let id = ProjectId::parse("my-app").unwrap();
/// assert_eq!(id.as_str(), "my-app");
/// assert!(ProjectId::parse("-leading").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Validates `value` as a project id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingRequiredField`] for an empty id and
    /// [`Error::Validation`] when it contains disallowed characters or starts
    /// with a separator.
    pub fn parse(value: &str) -> Result<Self> {
        if value.is_empty() {
            return Err(Error::missing("project_id"));
        }
        if INVALID_RUN.is_match(value) {
            return Err(Error::Validation {
                field: "project_id".into(),
                message: format!(
                    "{value:?} may only contain alphanumeric characters, '_', '.' and '-'"
                ),
            });
        }
        if value.starts_with(SEPARATORS) {
            return Err(Error::Validation {
                field: "project_id".into(),
                message: format!("{value:?} must start with an alphanumeric character"),
            });
        }
        Ok(Self(value.to_string()))
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
