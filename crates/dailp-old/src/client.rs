use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::LexicalStore;

/// HTTP client for an OLD instance; the session lives in the cookie store.
#[derive(Clone)]
pub struct OldClient {
    base_url: String,
    client: reqwest::Client,
}

impl OldClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Authenticate; every later request reuses the session cookie
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let request = LoginRequest { username, password };
        let response: LoginResponse = self
            .client
            .post(self.url("login/authenticate"))
            .json(&request)
            .send()
            .await
            .context("Failed to send login request to OLD")?
            .json()
            .await
            .context("Failed to parse OLD login response")?;

        if !response.authenticated {
            anyhow::bail!(
                "OLD login failed for {username}: {}",
                response.error.unwrap_or_default()
            );
        }
        tracing::info!(url = %self.base_url, username, "authenticated with OLD");
        Ok(())
    }

    async fn parse(response: reqwest::Response, action: &str) -> Result<Value> {
        let status = response.status();
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("Failed to parse OLD response to {action}"))?;
        if !status.is_success() {
            anyhow::bail!("OLD {action} failed with {status}: {body}");
        }
        Ok(body)
    }
}

#[async_trait]
impl LexicalStore for OldClient {
    async fn create(&self, collection: &str, record: Value) -> Result<Value> {
        let response = self
            .client
            .post(self.url(collection))
            .json(&record)
            .send()
            .await
            .with_context(|| format!("Failed to send create request for {collection}"))?;
        Self::parse(response, &format!("create in {collection}")).await
    }

    async fn get(&self, collection: &str) -> Result<Vec<Value>> {
        let response = self
            .client
            .get(self.url(collection))
            .send()
            .await
            .with_context(|| format!("Failed to fetch {collection}"))?;
        let body = Self::parse(response, &format!("get {collection}")).await?;
        serde_json::from_value(body).with_context(|| format!("OLD {collection} is not a list"))
    }

    async fn delete(&self, collection: &str, id: u64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("{collection}/{id}")))
            .send()
            .await
            .with_context(|| format!("Failed to delete {collection}/{id}"))?;
        Self::parse(response, &format!("delete {collection}/{id}")).await?;
        Ok(())
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    #[serde(default)]
    authenticated: bool,
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_drop_trailing_slash() {
        let client = OldClient::new("http://127.0.0.1:61001/chrold/").unwrap();
        assert_eq!(client.url("forms"), "http://127.0.0.1:61001/chrold/forms");
        assert_eq!(
            client.url("login/authenticate"),
            "http://127.0.0.1:61001/chrold/login/authenticate"
        );
    }
}
