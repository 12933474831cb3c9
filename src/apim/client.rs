use anyhow::{Context, Result};
use reqwest::{Client, Url};

use crate::config::ApiConfig;

pub struct ApiClient {
    client: Client,
    accounts_url: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<ApiClient> {
        let accounts_url = Url::parse(&config.get_accounts_url)
            .with_context(|| format!("Invalid accounts URL {:?}", config.get_accounts_url))?;
        if config.accept_invalid_certs {
            log::warn!("TLS certificate verification is disabled for the APIM gateway");
        }
        let client = Client::builder()
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            accounts_url,
        })
    }

    pub(super) fn client(&self) -> &Client {
        &self.client
    }

    pub(super) fn accounts_url(&self) -> &Url {
        &self.accounts_url
    }
}
