//! Resolved configuration.
//!
//! A [`Config`] only exists once every layer has been merged and every check
//! has passed. Optional features are [`Feature`] values, so an enabled SMS
//! gateway or analytics backend always carries all of its required fields.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::schema::{
    ApiSection, EmailSection, InbucketSection, ProviderSection, StorageSection, StudioSection,
};
use crate::postgres::PostgresVersion;
use crate::project::ProjectId;
use crate::services::ServiceIds;

/// OAuth providers that are always present in [`AuthConfig::external`].
pub const EXTERNAL_PROVIDERS: [&str; 17] = [
    "apple",
    "azure",
    "bitbucket",
    "discord",
    "facebook",
    "github",
    "gitlab",
    "google",
    "keycloak",
    "linkedin",
    "notion",
    "twitch",
    "twitter",
    "slack",
    "spotify",
    "workos",
    "zoom",
];

/// A secret value that never shows up in `Debug` output or serialized views.
///
/// # Examples
///
/// ```
/// use devstack::config::Secret;
///
/// let secret = Secret::new("hunter2");
/// assert_eq!(secret.expose(), "hunter2");
/// assert!(!format!("{secret:?}").contains("hunter2"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Wraps a secret value.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The secret in clear text.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret([redacted])")
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("[redacted]")
    }
}

/// An optional feature that is either off or on with all of its settings.
///
/// Serializes as `enabled = false`, or as `enabled = true` next to the
/// settings' own fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feature<T> {
    /// The feature is turned off; its settings are not checked.
    Disabled,
    /// The feature is turned on with validated settings.
    Enabled(T),
}

impl<T> Feature<T> {
    /// Whether the feature is on.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// The settings, when the feature is on.
    #[must_use]
    pub const fn as_enabled(&self) -> Option<&T> {
        match self {
            Self::Enabled(settings) => Some(settings),
            Self::Disabled => None,
        }
    }
}

impl<T> Default for Feature<T> {
    fn default() -> Self {
        Self::Disabled
    }
}

/// Serialized shape shared by [`Feature`] and [`ExternalProvider`].
#[derive(Serialize)]
struct Toggle<'a, T: Serialize> {
    enabled: bool,
    #[serde(flatten)]
    settings: Option<&'a T>,
}

impl<T: Serialize> Serialize for Feature<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Toggle {
            enabled: self.is_enabled(),
            settings: self.as_enabled(),
        }
        .serialize(serializer)
    }
}

/// The fully loaded and validated project configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Config {
    /// Project identifier.
    pub project_id: ProjectId,
    /// API gateway; `schemas` and `extra_search_path` are normalized.
    pub api: ApiSection,
    /// Database.
    pub db: DbConfig,
    /// Dashboard.
    pub studio: StudioSection,
    /// Mail catcher.
    pub inbucket: InbucketSection,
    /// Storage.
    pub storage: StorageSection,
    /// Auth server.
    pub auth: AuthConfig,
    /// Edge functions keyed by name.
    pub functions: BTreeMap<String, FunctionConfig>,
    /// Analytics.
    pub analytics: AnalyticsConfig,
    /// Derived container and network identifiers.
    pub services: ServiceIds,
}

/// Resolved `[db]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DbConfig {
    /// Port of the local database.
    pub port: u16,
    /// Port of the shadow database.
    pub shadow_port: u16,
    /// Selected Postgres version.
    pub major_version: PostgresVersion,
    /// Container image for `major_version`.
    pub image: String,
    /// Superuser password.
    pub password: Secret,
}

impl DbConfig {
    /// SQL used to bootstrap a fresh database of the selected version.
    #[must_use]
    pub const fn initial_schema(&self) -> &'static str {
        self.major_version.initial_schema()
    }
}

/// Resolved `[auth]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthConfig {
    /// Base URL of the application.
    pub site_url: String,
    /// Exact URLs providers may redirect to.
    pub additional_redirect_urls: Vec<String>,
    /// Token lifetime in seconds.
    pub jwt_expiry: u32,
    /// Whether refresh tokens rotate.
    pub enable_refresh_token_rotation: bool,
    /// Refresh token reuse grace period in seconds.
    pub refresh_token_reuse_interval: u32,
    /// Whether new users may sign up.
    pub enable_signup: bool,
    /// JWT signing secret.
    pub jwt_secret: Secret,
    /// Anonymous role key.
    pub anon_key: Secret,
    /// Service role key.
    pub service_role_key: Secret,
    /// Email sign-in.
    pub email: EmailSection,
    /// Phone sign-in.
    pub sms: SmsConfig,
    /// OAuth providers; contains every name in [`EXTERNAL_PROVIDERS`].
    pub external: BTreeMap<String, ExternalProvider>,
}

/// Resolved `[auth.sms]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SmsConfig {
    /// Whether new users may sign up by phone.
    pub enable_signup: bool,
    /// Whether a number must be confirmed before sign-in.
    pub enable_confirmations: bool,
    /// Twilio gateway.
    pub twilio: Feature<TwilioCredentials>,
    /// MessageBird gateway.
    pub messagebird: Feature<MessagebirdCredentials>,
    /// Textlocal gateway.
    pub textlocal: Feature<TextlocalCredentials>,
    /// Vonage gateway.
    pub vonage: Feature<VonageCredentials>,
}

/// Credentials of an enabled Twilio gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct TwilioCredentials {
    pub account_sid: String,
    pub message_service_sid: String,
    pub auth_token: Secret,
}

/// Credentials of an enabled MessageBird gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct MessagebirdCredentials {
    pub originator: String,
    pub access_key: Secret,
}

/// Credentials of an enabled Textlocal gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct TextlocalCredentials {
    pub sender: String,
    pub api_key: Secret,
}

/// Credentials of an enabled Vonage gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct VonageCredentials {
    pub from: String,
    pub api_key: Secret,
    pub api_secret: Secret,
}

/// An OAuth provider entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalProvider {
    /// Turned off. Holds the entry as written, or an empty entry when the
    /// project file does not mention the provider.
    Disabled(ProviderSection),
    /// Turned on, with every `env(NAME)` reference resolved.
    Enabled(ProviderCredentials),
}

impl ExternalProvider {
    /// Whether sign-in through this provider is offered.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled(_))
    }

    /// The resolved credentials, when enabled.
    #[must_use]
    pub const fn credentials(&self) -> Option<&ProviderCredentials> {
        match self {
            Self::Enabled(credentials) => Some(credentials),
            Self::Disabled(_) => None,
        }
    }
}

impl Serialize for ExternalProvider {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Toggle {
            enabled: self.is_enabled(),
            settings: self.credentials(),
        }
        .serialize(serializer)
    }
}

/// Resolved credentials of an enabled OAuth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderCredentials {
    /// OAuth client id.
    pub client_id: String,
    /// OAuth client secret.
    pub secret: Secret,
    /// Provider URL override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Redirect URI override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
}

/// Resolved `[functions.<name>]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionConfig {
    /// Whether requests must carry a valid JWT.
    pub verify_jwt: bool,
    /// Path to the import map; empty when unset.
    pub import_map: String,
}

/// Resolved `[analytics]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsConfig {
    /// Port of the analytics server.
    pub port: u16,
    /// Port of the log shipper.
    pub vector_port: u16,
    /// Log backend; enabled together with analytics.
    pub backend: Feature<AnalyticsBackend>,
}

impl AnalyticsConfig {
    /// Whether the analytics stack is started.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.backend.is_enabled()
    }
}

/// Settings of the BigQuery log backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[allow(missing_docs)]
pub struct AnalyticsBackend {
    pub gcp_project_id: String,
    pub gcp_project_number: String,
    pub gcp_jwt_path: String,
    pub api_key: Secret,
}
