use anyhow::{anyhow, ensure, Context, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;

// WSO2 Identity Server. If the IS listens on 9443 directly instead of 9444, change the ports.
const AUTHORIZATION_ENDPOINT: &str = "https://localhost:9444/oauth2/authorize";
const TOKEN_ENDPOINT: &str = "https://localhost:9444/oauth2/token";
const USERINFO_ENDPOINT: &str = "https://localhost:9444/oauth2/userinfo";
const ENDSESSION_ENDPOINT: &str = "https://localhost:9444/oidc/logout";
const CLIENT_ID: &str = "HpfVbYONf5MwRREA12p14vNQfJAa";
const CLIENT_ID2: &str = "E0bqe3TldZqJ3befDzav0OQkPtIa";
const REDIRECT_URI: &str = "http://localhost:5173";
const SCOPE: &str = "openid profile email";
const BANK_NAME: &str = "Bitwave Bank";

const GET_ACCOUNTS_URL: &str = "https://localhost:8243/accountDetails/1/getAccounts";
const ADD_TRANSACTION_URL: &str = "https://localhost:8243/internalTransfer/1/addTransaction";
const RECENT_TRANSACTIONS_URL: &str =
    "https://localhost:8243/RecentTransactions/1/recentTransactions";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub oidc: OidcConfig,
    pub api: ApiConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OidcConfig {
    pub authorization_endpoint: String,
    pub token_endpoint: String,
    pub userinfo_endpoint: String,
    pub endsession_endpoint: String,
    pub client_id: String,
    pub client_id2: String,
    pub redirect_uri: String,
    pub scope: String,
    pub bank_name: String,
}

impl Default for OidcConfig {
    fn default() -> Self {
        Self {
            authorization_endpoint: AUTHORIZATION_ENDPOINT.to_string(),
            token_endpoint: TOKEN_ENDPOINT.to_string(),
            userinfo_endpoint: USERINFO_ENDPOINT.to_string(),
            endsession_endpoint: ENDSESSION_ENDPOINT.to_string(),
            client_id: CLIENT_ID.to_string(),
            client_id2: CLIENT_ID2.to_string(),
            redirect_uri: REDIRECT_URI.to_string(),
            scope: SCOPE.to_string(),
            bank_name: BANK_NAME.to_string(),
        }
    }
}

impl OidcConfig {
    pub fn scopes(&self) -> impl Iterator<Item = &str> {
        self.scope.split_whitespace()
    }
}

/// APIM gateway endpoints. Every call sends `Authorization: Bearer <access_token>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub get_accounts_url: String,
    pub add_transaction_url: String,
    pub recent_transactions_url: String,
    /// The local gateway ships with a self-signed certificate
    pub accept_invalid_certs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            get_accounts_url: GET_ACCOUNTS_URL.to_string(),
            add_transaction_url: ADD_TRANSACTION_URL.to_string(),
            recent_transactions_url: RECENT_TRANSACTIONS_URL.to_string(),
            accept_invalid_certs: false,
        }
    }
}

impl Config {
    /// Load a YAML config file. Fields missing from the file keep their default values.
    pub async fn load(path: &Path) -> Result<Self> {
        log::info!("Loading config from {}...", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| anyhow!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| anyhow!("Error in config file {}", path.display()))?;
        log::info!("Loading config from {}...done", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let urls = [
            ("oidc.authorization_endpoint", &self.oidc.authorization_endpoint),
            ("oidc.token_endpoint", &self.oidc.token_endpoint),
            ("oidc.userinfo_endpoint", &self.oidc.userinfo_endpoint),
            ("oidc.endsession_endpoint", &self.oidc.endsession_endpoint),
            ("oidc.redirect_uri", &self.oidc.redirect_uri),
            ("api.get_accounts_url", &self.api.get_accounts_url),
            ("api.add_transaction_url", &self.api.add_transaction_url),
            ("api.recent_transactions_url", &self.api.recent_transactions_url),
        ];
        for (name, url) in urls {
            validate_url(url).with_context(|| anyhow!("Invalid {name}: {url:?}"))?;
        }
        ensure!(
            !self.oidc.client_id.trim().is_empty(),
            "oidc.client_id must not be empty"
        );
        ensure!(
            self.oidc.scopes().next().is_some(),
            "oidc.scope must name at least one scope"
        );
        Ok(())
    }
}

fn validate_url(url: &str) -> Result<()> {
    let parsed = Url::parse(url)?;
    ensure!(
        matches!(parsed.scheme(), "http" | "https"),
        "Expected an http or https URL"
    );
    ensure!(parsed.has_host(), "URL has no host");
    Ok(())
}
