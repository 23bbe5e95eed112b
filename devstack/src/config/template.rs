//! The embedded project file template.
//!
//! The same text serves twice: `devstack init` renders it into a new project
//! file, and the loader renders it with an empty project id to obtain the
//! built-in defaults every project file is merged over.

use crate::error::{Error, Result};

/// Template for a new `devstack/config.toml`.
pub const INIT_TEMPLATE: &str = include_str!("../../templates/init_config.toml");

/// Placeholder replaced by the project id.
const PROJECT_ID_PLACEHOLDER: &str = "{{ project_id }}";

/// Renders the template for `project_id`.
///
/// # Examples
///
/// ```
/// use devstack::config::template;
///
/// let text = template::render("shop");
/// assert!(text.contains(r#"project_id = "shop""#));
/// ```
#[must_use]
pub fn render(project_id: &str) -> String {
    INIT_TEMPLATE.replace(PROJECT_ID_PLACEHOLDER, project_id)
}

/// The built-in defaults as a TOML table.
///
/// # Errors
///
/// Returns [`Error::Validation`] if the embedded template is not valid TOML.
pub fn baseline() -> Result<toml::Table> {
    toml::from_str(&render("")).map_err(|e| Error::Validation {
        field: "<defaults>".into(),
        message: format!("embedded config template is invalid: {e}"),
    })
}
