//! Derived container and network identifiers.

use serde::Serialize;

use crate::project::ProjectId;

/// Namespace shared by every orchestrated resource.
pub const NAMESPACE: &str = "devstack";

/// One identifier per orchestrated service, plus the shared network.
///
/// All identifiers are a fixed per-service prefix followed by the project
/// id, so two projects on the same host never collide.
///
/// # Examples
///
/// ```
/// use devstack::{ProjectId, ServiceIds};
///
/// let ids = ServiceIds::for_project(&ProjectId::parse("shop").unwrap());
/// assert_eq!(ids.network, "devstack_network_shop");
/// assert_eq!(ids.db, "devstack_db_shop");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceIds {
    /// Bridge network the containers join.
    pub network: String,
    /// Postgres.
    pub db: String,
    /// Volume holding rendered service config.
    pub config: String,
    /// API gateway.
    pub kong: String,
    /// Auth server.
    pub auth: String,
    /// Mail catcher.
    pub inbucket: String,
    /// Realtime server. Its name doubles as the tenant host name.
    pub realtime: String,
    /// REST API server.
    pub rest: String,
    /// Storage API.
    pub storage: String,
    /// Image transformation sidecar of storage.
    pub imgproxy: String,
    /// Schema differ.
    pub differ: String,
    /// Postgres metadata API.
    pub pg_meta: String,
    /// Dashboard.
    pub studio: String,
    /// Edge functions runtime.
    pub edge_runtime: String,
    /// Analytics server.
    pub analytics: String,
    /// Log shipper feeding analytics.
    pub vector: String,
}

impl ServiceIds {
    /// Computes every identifier for `project_id`.
    #[must_use]
    pub fn for_project(project_id: &ProjectId) -> Self {
        let id = project_id.as_str();
        let scoped = |service: &str| format!("{NAMESPACE}_{service}_{id}");
        Self {
            network: scoped("network"),
            db: scoped("db"),
            config: scoped("config"),
            kong: scoped("kong"),
            auth: scoped("auth"),
            inbucket: scoped("inbucket"),
            realtime: format!("realtime-dev.{}", scoped("realtime")),
            rest: scoped("rest"),
            storage: scoped("storage"),
            imgproxy: format!("storage_imgproxy_{id}"),
            differ: scoped("differ"),
            pg_meta: scoped("pg_meta"),
            studio: scoped("studio"),
            edge_runtime: scoped("edge_runtime"),
            analytics: scoped("analytics"),
            vector: scoped("vector"),
        }
    }

    /// `(name, identifier)` pairs in a stable order.
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("network", self.network.as_str()),
            ("db", self.db.as_str()),
            ("config", self.config.as_str()),
            ("kong", self.kong.as_str()),
            ("auth", self.auth.as_str()),
            ("inbucket", self.inbucket.as_str()),
            ("realtime", self.realtime.as_str()),
            ("rest", self.rest.as_str()),
            ("storage", self.storage.as_str()),
            ("imgproxy", self.imgproxy.as_str()),
            ("differ", self.differ.as_str()),
            ("pg_meta", self.pg_meta.as_str()),
            ("studio", self.studio.as_str()),
            ("edge_runtime", self.edge_runtime.as_str()),
            ("analytics", self.analytics.as_str()),
            ("vector", self.vector.as_str()),
        ]
    }
}
