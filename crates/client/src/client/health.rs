//! Health API operations.

use super::EventlineClient;
use crate::error::Result;

impl EventlineClient {
    /// Check server liveness. Returns the status string reported by the server.
    pub async fn health(&self) -> Result<String> {
        let response = self.client.get(self.url("/health")).send().await?;
        let body: serde_json::Value = self.handle_response(response).await?;
        Ok(body["status"].as_str().unwrap_or("unknown").to_string())
    }
}
