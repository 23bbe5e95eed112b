//! Project file schema.
//!
//! These types mirror `devstack/config.toml` one-to-one: snake_case keys,
//! one nested table per section, and map-of-tables for `functions` and
//! `auth.external`. Every field defaults to its zero value so that a
//! partially written file still decodes; required fields are enforced later
//! by the validator.
//!
//! Fields marked `#[serde(skip)]` are secrets that may only come from the
//! environment, never from the file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::size::SizeInBytes;

/// The whole project file after merging defaults and the user's file.
///
/// # Examples
///
/// ```
/// use devstack::config::ConfigDocument;
///
/// let doc: ConfigDocument = toml::from_str(r#"
///     project_id = "shop"
///
///     [api]
///     port = 54321
/// "#).unwrap();
/// assert_eq!(doc.project_id, "shop");
/// assert_eq!(doc.api.port, 54321);
/// assert_eq!(doc.db.port, 0);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ConfigDocument {
    /// Project identifier.
    pub project_id: String,

    /// API gateway settings.
    pub api: ApiSection,

    /// Database settings.
    pub db: DbSection,

    /// Dashboard settings.
    pub studio: StudioSection,

    /// Mail catcher settings.
    pub inbucket: InbucketSection,

    /// Storage settings.
    pub storage: StorageSection,

    /// Auth server settings.
    pub auth: AuthSection,

    /// Edge functions keyed by function name.
    pub functions: BTreeMap<String, FunctionSection>,

    /// Analytics settings.
    pub analytics: AnalyticsSection,
}

/// `[api]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ApiSection {
    /// Port of the API gateway.
    pub port: u16,

    /// Schemas exposed through the REST API.
    pub schemas: Vec<String>,

    /// Schemas appended to the `search_path` of every request.
    pub extra_search_path: Vec<String>,

    /// Maximum rows returned by a single request.
    pub max_rows: u32,
}

/// `[db]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DbSection {
    /// Port of the local database.
    pub port: u16,

    /// Port of the shadow database used for diffing.
    pub shadow_port: u16,

    /// Postgres major version; 0 when unset.
    pub major_version: u32,

    /// Superuser password (environment only).
    #[serde(skip)]
    pub password: String,
}

/// `[studio]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StudioSection {
    /// Whether the dashboard is started.
    pub enabled: bool,

    /// Port of the dashboard.
    pub port: u16,

    /// External API URL the dashboard talks to.
    pub api_url: String,
}

/// `[inbucket]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InbucketSection {
    /// Whether the mail catcher is started.
    pub enabled: bool,

    /// Port of the web interface.
    pub port: u16,

    /// Optional SMTP port; 0 keeps it unexposed.
    pub smtp_port: u16,

    /// Optional POP3 port; 0 keeps it unexposed.
    pub pop3_port: u16,
}

/// `[storage]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageSection {
    /// Largest accepted upload.
    pub file_size_limit: SizeInBytes,
}

/// `[auth]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AuthSection {
    /// Base URL of the application.
    pub site_url: String,

    /// Exact URLs providers may redirect to.
    pub additional_redirect_urls: Vec<String>,

    /// Token lifetime in seconds.
    pub jwt_expiry: u32,

    /// Whether refresh tokens rotate.
    pub enable_refresh_token_rotation: bool,

    /// Grace period for reusing a rotated refresh token, in seconds.
    pub refresh_token_reuse_interval: u32,

    /// Whether new users may sign up.
    pub enable_signup: bool,

    /// Email sign-in settings.
    pub email: EmailSection,

    /// Phone sign-in settings.
    pub sms: SmsSection,

    /// OAuth providers keyed by provider name.
    pub external: BTreeMap<String, ProviderSection>,

    /// JWT signing secret (environment only).
    #[serde(skip)]
    pub jwt_secret: String,

    /// Anonymous role key (environment only).
    #[serde(skip)]
    pub anon_key: String,

    /// Service role key (environment only).
    #[serde(skip)]
    pub service_role_key: String,
}

/// `[auth.email]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct EmailSection {
    /// Whether new users may sign up by email.
    pub enable_signup: bool,

    /// Whether an email change must be confirmed on both addresses.
    pub double_confirm_changes: bool,

    /// Whether an address must be confirmed before sign-in.
    pub enable_confirmations: bool,
}

/// `[auth.sms]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SmsSection {
    /// Whether new users may sign up by phone.
    pub enable_signup: bool,

    /// Whether a number must be confirmed before sign-in.
    pub enable_confirmations: bool,

    /// Twilio gateway.
    pub twilio: TwilioSection,

    /// MessageBird gateway.
    pub messagebird: MessagebirdSection,

    /// Textlocal gateway.
    pub textlocal: TextlocalSection,

    /// Vonage gateway.
    pub vonage: VonageSection,
}

/// `[auth.sms.twilio]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
#[allow(missing_docs)]
pub struct TwilioSection {
    pub enabled: bool,
    pub account_sid: String,
    pub message_service_sid: String,
    pub auth_token: String,
}

/// `[auth.sms.messagebird]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
#[allow(missing_docs)]
pub struct MessagebirdSection {
    pub enabled: bool,
    pub originator: String,
    pub access_key: String,
}

/// `[auth.sms.textlocal]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
#[allow(missing_docs)]
pub struct TextlocalSection {
    pub enabled: bool,
    pub sender: String,
    pub api_key: String,
}

/// `[auth.sms.vonage]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
#[allow(missing_docs)]
pub struct VonageSection {
    pub enabled: bool,
    pub from: String,
    pub api_key: String,
    pub api_secret: String,
}

/// `[auth.external.<provider>]`
///
/// Any of the string fields may be written as `env(NAME)`; the reference is
/// resolved only when the provider is enabled.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderSection {
    /// Whether sign-in through this provider is offered.
    pub enabled: bool,

    /// OAuth client id.
    pub client_id: String,

    /// OAuth client secret.
    pub secret: String,

    /// Provider URL override, for self-hosted or single-tenant providers.
    pub url: String,

    /// Redirect URI override.
    pub redirect_uri: String,
}

/// `[functions.<name>]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FunctionSection {
    /// Whether requests must carry a valid JWT; unset means yes.
    pub verify_jwt: Option<bool>,

    /// Path to the function's import map.
    pub import_map: String,
}

/// `[analytics]`
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AnalyticsSection {
    /// Whether the analytics stack is started.
    pub enabled: bool,

    /// Port of the analytics server.
    pub port: u16,

    /// Port of the log shipper.
    pub vector_port: u16,

    /// BigQuery project id.
    pub gcp_project_id: String,

    /// BigQuery project number.
    pub gcp_project_number: String,

    /// Path to the service account key.
    pub gcp_jwt_path: String,

    /// Analytics API key (environment only).
    #[serde(skip)]
    pub api_key: String,
}
