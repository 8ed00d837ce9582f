use std::path::Path;

use tracing::warn;

use super::schema::CONFIG_SCHEMA;
use super::types::VulndeckConfig;
use crate::errors::VulndeckError;

/// Environment variables that override file-based settings.
pub const ENV_BACKEND_URL: &str = "VULNDECK_BACKEND_URL";
pub const ENV_TOKEN: &str = "VULNDECK_TOKEN";

pub async fn parse_config(path: &Path) -> Result<VulndeckConfig, VulndeckError> {
    if !path.exists() {
        return Err(VulndeckError::Config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(VulndeckError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;

    // JSON Schema validation
    validate_schema(&yaml)?;

    // Parse into typed config
    let config: VulndeckConfig = serde_yaml::from_value(yaml)?;

    // Semantic checks
    validate_semantics(&config)?;

    Ok(config)
}

/// Loads the config file when given, then applies environment overrides.
/// With no file and no overrides this yields the built-in defaults.
pub async fn load_config(path: Option<&Path>) -> Result<VulndeckConfig, VulndeckError> {
    let mut config = match path {
        Some(path) => parse_config(path).await?,
        None => VulndeckConfig::default(),
    };

    if let Ok(url) = std::env::var(ENV_BACKEND_URL) {
        let backend = config.backend.get_or_insert_with(|| super::BackendConfig {
            base_url: String::new(),
            timeout_secs: None,
            token: None,
        });
        backend.base_url = url;
    }
    if let Ok(token) = std::env::var(ENV_TOKEN) {
        match config.backend.as_mut() {
            Some(backend) => backend.token = Some(token),
            None => warn!(
                "{} is set but no backend is configured; ignoring the token",
                ENV_TOKEN
            ),
        }
    }

    // Env-supplied values go through the same semantic checks as file ones.
    validate_semantics(&config)?;

    Ok(config)
}

/// Validate config against the JSON schema for structural correctness.
fn validate_schema(yaml: &serde_yaml::Value) -> Result<(), VulndeckError> {
    // Convert YAML value to JSON for schema validation
    let json_value: serde_json::Value = serde_yaml::from_value(yaml.clone())
        .map_err(|e| VulndeckError::Config(format!("Config conversion error: {}", e)))?;

    let compiled = jsonschema::JSONSchema::compile(&CONFIG_SCHEMA)
        .map_err(|e| VulndeckError::Config(format!("Schema compilation error: {}", e)))?;

    if let Err(errors) = compiled.validate(&json_value) {
        // Warn but don't fail — schema validation is advisory
        for error in errors {
            warn!(validation_error = %error, path = %error.instance_path, "Config schema warning");
        }
    }

    Ok(())
}

/// Detect semantic problems the schema cannot express.
fn validate_semantics(config: &VulndeckConfig) -> Result<(), VulndeckError> {
    if let Some(backend) = &config.backend {
        if !backend.base_url.starts_with("http://") && !backend.base_url.starts_with("https://") {
            return Err(VulndeckError::Config(format!(
                "Backend base_url must be http(s), got: {}",
                backend.base_url
            )));
        }
    }

    if let Some(auth) = &config.auth {
        if auth.email.is_some() != auth.password.is_some() {
            return Err(VulndeckError::Config(
                "auth requires both email and password, or neither".into(),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn parses_full_config() {
        let file = write_config(
            "backend:\n  base_url: http://localhost:3001\n  timeout_secs: 10\nserver:\n  host: 0.0.0.0\n  port: 9000\n",
        );
        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.backend_url(), Some("http://localhost:3001"));
        assert_eq!(config.timeout_secs(), 10);
        assert_eq!(config.bind_host(), "0.0.0.0");
        assert_eq!(config.bind_port(), 9000);
    }

    #[tokio::test]
    async fn defaults_apply_without_sections() {
        let file = write_config("backend:\n  base_url: https://api.example.com\n");
        let config = parse_config(file.path()).await.unwrap();
        assert_eq!(config.timeout_secs(), 30);
        assert_eq!(config.bind_host(), "127.0.0.1");
        assert_eq!(config.bind_port(), 8080);
    }

    #[tokio::test]
    async fn rejects_non_http_backend_url() {
        let file = write_config("backend:\n  base_url: ftp://example.com\n");
        let err = parse_config(file.path()).await.unwrap_err();
        assert!(matches!(err, VulndeckError::Config(_)));
    }

    #[tokio::test]
    async fn rejects_half_configured_auth() {
        let file = write_config(
            "backend:\n  base_url: http://localhost:3001\nauth:\n  email: ops@example.com\n",
        );
        let err = parse_config(file.path()).await.unwrap_err();
        assert!(matches!(err, VulndeckError::Config(_)));
    }

    // All environment manipulation lives in this single test: the variables
    // are process-global and tests run concurrently.
    #[tokio::test]
    async fn load_config_applies_env_overrides() {
        std::env::remove_var(ENV_BACKEND_URL);
        std::env::remove_var(ENV_TOKEN);

        // No file, no env: built-in defaults, no backend configured.
        let config = load_config(None).await.unwrap();
        assert!(config.backend.is_none());
        assert_eq!(config.bind_host(), "127.0.0.1");
        assert_eq!(config.bind_port(), 8080);

        // A token without any backend section has nowhere to land.
        std::env::set_var(ENV_TOKEN, "tok-orphan");
        let config = load_config(None).await.unwrap();
        assert!(config.backend.is_none());
        std::env::remove_var(ENV_TOKEN);

        // The URL override creates the backend section from nothing.
        std::env::set_var(ENV_BACKEND_URL, "http://localhost:3001");
        let config = load_config(None).await.unwrap();
        assert_eq!(config.backend_url(), Some("http://localhost:3001"));
        assert_eq!(config.timeout_secs(), 30);

        // The token override lands on the section the URL just created.
        std::env::set_var(ENV_TOKEN, "tok-1");
        let config = load_config(None).await.unwrap();
        assert_eq!(
            config.backend.as_ref().unwrap().token.as_deref(),
            Some("tok-1")
        );

        // Overrides also apply on top of a file-based backend section.
        let file = write_config(
            "backend:\n  base_url: http://file.example.com\n  token: tok-file\n",
        );
        let config = load_config(Some(file.path())).await.unwrap();
        assert_eq!(config.backend_url(), Some("http://localhost:3001"));
        assert_eq!(
            config.backend.as_ref().unwrap().token.as_deref(),
            Some("tok-1")
        );

        // An env-supplied URL is held to the same semantic checks as a
        // file-supplied one.
        std::env::set_var(ENV_BACKEND_URL, "ftp://example.com");
        let err = load_config(None).await.unwrap_err();
        assert!(matches!(err, VulndeckError::Config(_)));

        std::env::remove_var(ENV_BACKEND_URL);
        std::env::remove_var(ENV_TOKEN);
    }

    #[tokio::test]
    async fn missing_file_is_a_config_error() {
        let err = parse_config(Path::new("/nonexistent/vulndeck.yaml"))
            .await
            .unwrap_err();
        assert!(matches!(err, VulndeckError::Config(_)));
    }
}
