use async_trait::async_trait;
use serde::Deserialize;
use tracing::{error, info};

use crate::infrastructure::config::AuthConfig;

/// Seam for the external authorization service: given a token, yes or no.
/// Transport failures and undecodable responses count as "no".
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn authorize(&self, token: &str) -> bool;
}

/// Verdict JSON returned by the IAC authorization endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IacVerdict {
    pub status: i32,
    pub err_code: i32,
    pub err_msg: String,
}

impl IacVerdict {
    pub fn authorized(&self) -> bool {
        self.status == 200
    }
}

pub struct IacAuthClient {
    client: reqwest::Client,
    config: AuthConfig,
}

impl IacAuthClient {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl AuthClient for IacAuthClient {
    async fn authorize(&self, token: &str) -> bool {
        let url = format!(
            "{}?systemId={}&token={}",
            self.config.base_url, self.config.system_id, token
        );
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "authorization request failed");
                return false;
            }
        };
        let verdict: IacVerdict = match response.json().await {
            Ok(verdict) => verdict,
            Err(e) => {
                error!(error = %e, "authorization response could not be decoded");
                return false;
            }
        };
        info!(
            status = verdict.status,
            err_code = verdict.err_code,
            "authorization verdict received"
        );
        verdict.authorized()
    }
}
