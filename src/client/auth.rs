use tracing::debug;

use super::{check_status, HttpBackend};
use crate::errors::VulndeckError;
use crate::models::{LoginRequest, LoginResponse};

impl HttpBackend {
    /// POSTs credentials to the external login endpoint. Authentication
    /// itself is the backend's concern; this only carries the exchange.
    pub(crate) async fn post_login(
        &self,
        credentials: &LoginRequest,
    ) -> Result<LoginResponse, VulndeckError> {
        let path = "/auth/login";
        let resp = self
            .client
            .post(self.url(path))
            .json(credentials)
            .send()
            .await
            .map_err(|e| VulndeckError::Network(format!("Login request failed: {}", e)))?;
        let resp = check_status(path, resp).await?;
        let login: LoginResponse = self.parse(path, resp).await?;
        debug!(user = %login.user.email, "Authenticated against backend");
        Ok(login)
    }

    /// Logs in and stores the access token for subsequent requests.
    pub async fn login_and_store(&self, credentials: &LoginRequest) -> Result<LoginResponse, VulndeckError> {
        let login = self.post_login(credentials).await?;
        self.set_token(&login.access_token).await;
        Ok(login)
    }
}
