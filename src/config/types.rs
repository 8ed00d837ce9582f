use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct VulndeckConfig {
    pub backend: Option<BackendConfig>,
    pub server: Option<ServerConfig>,
    pub auth: Option<AuthConfig>,
}

/// The external scan-result REST API to consume.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
    /// Static bearer token, used when no credentials are configured.
    pub token: Option<String>,
}

/// Bind address for the local serving layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

/// Credentials exchanged at the backend's login endpoint on startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl VulndeckConfig {
    pub fn backend_url(&self) -> Option<&str> {
        self.backend.as_ref().map(|b| b.base_url.as_str())
    }

    pub fn timeout_secs(&self) -> u64 {
        self.backend
            .as_ref()
            .and_then(|b| b.timeout_secs)
            .unwrap_or(30)
    }

    pub fn bind_host(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.host.as_deref())
            .unwrap_or("127.0.0.1")
    }

    pub fn bind_port(&self) -> u16 {
        self.server.as_ref().and_then(|s| s.port).unwrap_or(8080)
    }
}
