pub mod batches;
pub mod commands;
pub mod news;
pub mod serve;
pub mod show;
pub mod stats;
pub mod vulns;

pub use commands::{Cli, Commands};

use std::path::Path;

use console::{style, StyledObject};

use crate::client::HttpBackend;
use crate::config::{load_config, VulndeckConfig};
use crate::errors::VulndeckError;
use crate::models::{LoginRequest, Severity};

/// Loads config and connects to the backend, logging in when credentials
/// are configured. Shared by all commands that talk upstream.
pub(crate) async fn connect(
    config_path: Option<&str>,
) -> Result<(VulndeckConfig, HttpBackend), VulndeckError> {
    let config = load_config(config_path.map(Path::new)).await?;
    let base_url = config
        .backend_url()
        .ok_or_else(|| {
            VulndeckError::Config(
                "No backend configured: pass --config or set VULNDECK_BACKEND_URL".into(),
            )
        })?
        .to_string();
    let token = config.backend.as_ref().and_then(|b| b.token.clone());
    let backend = HttpBackend::new(&base_url, config.timeout_secs(), token)?;

    if let Some(auth) = &config.auth {
        if let (Some(email), Some(password)) = (&auth.email, &auth.password) {
            backend
                .login_and_store(&LoginRequest {
                    email: email.clone(),
                    password: password.clone(),
                })
                .await?;
        }
    }

    Ok((config, backend))
}

/// Severity label colored for terminal output.
pub(crate) fn style_severity(severity: Severity) -> StyledObject<&'static str> {
    let label = severity.label();
    match severity {
        Severity::Critical => style(label).red().bold(),
        Severity::High => style(label).red(),
        Severity::Medium => style(label).yellow(),
        Severity::Low => style(label).cyan(),
        Severity::Info => style(label).dim(),
    }
}
