//! Environment-sourced values.
//!
//! Secrets never live in the project file. They come from the process
//! environment or from the project's `.env` file, either through a fixed set
//! of `DEVSTACK_*` overrides or through `env(NAME)` references written in the
//! file.

use std::collections::HashMap;
use std::env;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::schema::ConfigDocument;
use crate::error::{Error, Result};

/// Name of the secret file in the project root.
pub const SECRET_FILE: &str = ".env";

/// `env(NAME)` with the name captured.
static ENV_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^env\((.*)\)$").expect("static regex is valid"));

type SecretField = fn(&mut ConfigDocument) -> &mut String;

/// Variables that override environment-only fields, with the field each one
/// sets.
const SECRET_OVERRIDES: &[(&str, SecretField)] = &[
    ("DEVSTACK_DB_PASSWORD", |doc| &mut doc.db.password),
    ("DEVSTACK_AUTH_JWT_SECRET", |doc| &mut doc.auth.jwt_secret),
    ("DEVSTACK_AUTH_ANON_KEY", |doc| &mut doc.auth.anon_key),
    ("DEVSTACK_AUTH_SERVICE_ROLE_KEY", |doc| &mut doc.auth.service_role_key),
    ("DEVSTACK_AUTH_SMS_TWILIO_AUTH_TOKEN", |doc| &mut doc.auth.sms.twilio.auth_token),
    ("DEVSTACK_AUTH_SMS_MESSAGEBIRD_ACCESS_KEY", |doc| &mut doc.auth.sms.messagebird.access_key),
    ("DEVSTACK_AUTH_SMS_TEXTLOCAL_API_KEY", |doc| &mut doc.auth.sms.textlocal.api_key),
    ("DEVSTACK_AUTH_SMS_VONAGE_API_KEY", |doc| &mut doc.auth.sms.vonage.api_key),
    ("DEVSTACK_AUTH_SMS_VONAGE_API_SECRET", |doc| &mut doc.auth.sms.vonage.api_secret),
    ("DEVSTACK_ANALYTICS_API_KEY", |doc| &mut doc.analytics.api_key),
];

/// Something variables can be looked up in.
pub trait VarSource {
    /// The value of `name`, if it is set.
    fn var(&self, name: &str) -> Option<String>;
}

/// The process environment, read directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl VarSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}

impl VarSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// The variables visible to one configuration load.
///
/// Lookups consult the process environment first (unless the environment is
/// isolated), then the explicitly supplied variables, then entries read from
/// a secret file. The process environment is never modified.
///
/// # Examples
///
/// ```
/// use devstack::config::{Environment, VarSource};
///
/// let env = Environment::from_vars([("DEVSTACK_DB_PASSWORD", "hunter2")]);
/// assert_eq!(env.var("DEVSTACK_DB_PASSWORD").as_deref(), Some("hunter2"));
/// assert_eq!(env.var("PATH"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    include_process: bool,
    vars: HashMap<String, String>,
    secret_file: HashMap<String, String>,
}

impl Environment {
    /// The process environment with `<root>/.env` underneath.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSecretFile`] if the secret file exists but
    /// cannot be parsed. A missing secret file is not an error.
    pub fn load(root: &Path) -> Result<Self> {
        Self {
            include_process: true,
            ..Self::default()
        }
        .with_secret_file(&root.join(SECRET_FILE))
    }

    /// An environment that sees only `vars`, never the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            include_process: false,
            vars: vars.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            secret_file: HashMap::new(),
        }
    }

    /// Adds the entries of a dotenv file below everything already visible.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedSecretFile`] if the file exists but cannot
    /// be parsed.
    pub fn with_secret_file(mut self, path: &Path) -> Result<Self> {
        let malformed = |source: dotenvy::Error| Error::MalformedSecretFile {
            path: path.to_path_buf(),
            source,
        };

        let entries = match dotenvy::from_path_iter(path) {
            Ok(entries) => entries,
            Err(e) if e.not_found() => {
                log::debug!("No secret file at {}", path.display());
                return Ok(self);
            }
            Err(e) => return Err(malformed(e)),
        };

        let mut count = 0usize;
        for entry in entries {
            let (key, value) = entry.map_err(malformed)?;
            self.secret_file.insert(key, value);
            count += 1;
        }
        log::debug!("Read {count} entries from {}", path.display());
        Ok(self)
    }

    /// Sets every environment-only field that has a non-empty override.
    ///
    /// Overrides win over the defaults and over the project file.
    pub fn apply_overrides(&self, document: &mut ConfigDocument) {
        for (name, field) in SECRET_OVERRIDES {
            if let Some(value) = self.var(name).filter(|v| !v.is_empty()) {
                log::debug!("Applying override from {name}");
                *field(document) = value;
            }
        }
    }
}

impl VarSource for Environment {
    fn var(&self, name: &str) -> Option<String> {
        if self.include_process {
            if let Ok(value) = env::var(name) {
                return Some(value);
            }
        }
        self.vars
            .get(name)
            .or_else(|| self.secret_file.get(name))
            .cloned()
    }
}

/// Resolves an `env(NAME)` reference.
///
/// A value of exactly the form `env(NAME)` is replaced by the value of
/// `NAME`; any other value is returned unchanged.
///
/// # Errors
///
/// Returns [`Error::EnvVarUnset`] when the referenced variable is unset or
/// empty.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use devstack::config::resolve_env_reference;
///
/// let vars = HashMap::from([("GITHUB_SECRET".to_string(), "s3cr3t".to_string())]);
/// assert_eq!(resolve_env_reference("env(GITHUB_SECRET)", &vars).unwrap(), "s3cr3t");
/// assert_eq!(resolve_env_reference("plain", &vars).unwrap(), "plain");
/// assert!(resolve_env_reference("env(MISSING)", &vars).is_err());
/// ```
pub fn resolve_env_reference(value: &str, vars: &impl VarSource) -> Result<String> {
    let Some(captures) = ENV_REFERENCE.captures(value) else {
        return Ok(value.to_string());
    };
    let name = &captures[1];
    match vars.var(name) {
        Some(resolved) if !resolved.is_empty() => Ok(resolved),
        _ => Err(Error::EnvVarUnset {
            expression: value.to_string(),
            name: name.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_resolve_plain_value_unchanged() {
        let empty = vars(&[]);
        assert_eq!(resolve_env_reference("abc", &empty).unwrap(), "abc");
        assert_eq!(resolve_env_reference("", &empty).unwrap(), "");
        assert_eq!(resolve_env_reference("env(X", &empty).unwrap(), "env(X");
        assert_eq!(resolve_env_reference(" env(X)", &empty).unwrap(), " env(X)");
    }

    #[test]
    fn test_resolve_reference() {
        let set = vars(&[("GITHUB_SECRET", "gh")]);
        assert_eq!(resolve_env_reference("env(GITHUB_SECRET)", &set).unwrap(), "gh");
    }

    #[test]
    fn test_resolve_unset_and_empty_fail() {
        let set = vars(&[("EMPTY", "")]);
        for (expr, name) in [("env(MISSING)", "MISSING"), ("env(EMPTY)", "EMPTY")] {
            match resolve_env_reference(expr, &set) {
                Err(Error::EnvVarUnset {
                    expression,
                    name: got,
                }) => {
                    assert_eq!(expression, expr);
                    assert_eq!(got, name);
                }
                other => panic!("expected EnvVarUnset, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_secret_file_below_explicit_vars() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SECRET_FILE);
        fs::write(&path, "A=from-file\nB=from-file\n").unwrap();

        let env = Environment::from_vars([("A", "explicit")])
            .with_secret_file(&path)
            .unwrap();
        assert_eq!(env.var("A").as_deref(), Some("explicit"));
        assert_eq!(env.var("B").as_deref(), Some("from-file"));
    }

    #[test]
    fn test_missing_secret_file_is_fine() {
        let dir = TempDir::new().unwrap();
        let env = Environment::from_vars(Vec::<(String, String)>::new())
            .with_secret_file(&dir.path().join(SECRET_FILE))
            .unwrap();
        assert_eq!(env.var("ANYTHING"), None);
    }

    #[test]
    fn test_malformed_secret_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(SECRET_FILE);
        fs::write(&path, "GOOD=1\nthis is not an assignment\n").unwrap();

        let err = Environment::from_vars(Vec::<(String, String)>::new())
            .with_secret_file(&path)
            .unwrap_err();
        assert!(matches!(err, Error::MalformedSecretFile { .. }));
    }

    #[test]
    #[serial]
    fn test_load_reads_process_env_over_secret_file() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(SECRET_FILE),
            "DEVSTACK_TEST_PRECEDENCE=from-file\nDEVSTACK_TEST_FILE_ONLY=file\n",
        )
        .unwrap();
        env::set_var("DEVSTACK_TEST_PRECEDENCE", "from-process");

        let loaded = Environment::load(dir.path()).unwrap();
        assert_eq!(loaded.var("DEVSTACK_TEST_PRECEDENCE").as_deref(), Some("from-process"));
        assert_eq!(loaded.var("DEVSTACK_TEST_FILE_ONLY").as_deref(), Some("file"));
        assert!(env::var("DEVSTACK_TEST_FILE_ONLY").is_err());

        env::remove_var("DEVSTACK_TEST_PRECEDENCE");
    }

    #[test]
    fn test_apply_overrides_sets_non_empty_values() {
        let mut doc = ConfigDocument::default();
        doc.auth.sms.twilio.auth_token = "from-file".into();

        let env = Environment::from_vars([
            ("DEVSTACK_DB_PASSWORD", "pw"),
            ("DEVSTACK_AUTH_JWT_SECRET", ""),
            ("DEVSTACK_AUTH_SMS_TWILIO_AUTH_TOKEN", "from-env"),
            ("DEVSTACK_ANALYTICS_API_KEY", "key"),
            ("DEVSTACK_PROJECT_ID", "ignored"),
        ]);
        env.apply_overrides(&mut doc);

        assert_eq!(doc.db.password, "pw");
        assert_eq!(doc.auth.jwt_secret, "");
        assert_eq!(doc.auth.sms.twilio.auth_token, "from-env");
        assert_eq!(doc.analytics.api_key, "key");
        assert_eq!(doc.project_id, "");
    }

    #[test]
    fn test_every_override_targets_a_distinct_field() {
        let env = Environment::from_vars(
            SECRET_OVERRIDES
                .iter()
                .map(|(name, _)| (*name, *name))
                .collect::<Vec<_>>(),
        );
        let mut doc = ConfigDocument::default();
        env.apply_overrides(&mut doc);
        for (name, field) in SECRET_OVERRIDES {
            assert_eq!(field(&mut doc).as_str(), *name);
        }
    }
}
