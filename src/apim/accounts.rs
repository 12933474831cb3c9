use anyhow::{anyhow, bail, ensure, Context, Result};
use reqwest::{header::ACCEPT, StatusCode};
use rust_decimal::{prelude::FromPrimitive as _, Decimal};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{client::ApiClient, AccessToken};

const UNEXPECTED_SHAPE: &str = "Unexpected accounts response shape";
const NOT_JSON: &str = "APIM response was not JSON";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
}

pub async fn get_accounts(client: &ApiClient, access_token: &AccessToken) -> Result<Vec<Account>> {
    log::info!("Requesting accounts...");

    let url = client.accounts_url();
    let response = client
        .client()
        .get(url.clone())
        .bearer_auth(access_token.get())
        .header(ACCEPT, "application/json")
        .send()
        .await
        .with_context(|| anyhow!("Failed to send request to {url}"))?;

    let status = response.status();
    log::debug!("APIM responded with {status}");
    if status == StatusCode::NO_CONTENT {
        log::info!("Requesting accounts...done (no content)");
        return Ok(vec![]);
    }
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        bail!("APIM {status}: {text}");
    }

    let body = response.bytes().await.context(NOT_JSON)?;
    let data: Value = serde_json::from_slice(&body).context(NOT_JSON)?;
    if data.is_null() {
        bail!(NOT_JSON);
    }
    let accounts = normalize_accounts(data)?;

    log::info!("Requesting accounts...done");
    Ok(accounts)
}

/// Accepts, in order of preference: a bare array, `{"accounts": [...]}`, `{"list": [...]}`,
/// or a single account object which gets wrapped into a one-element list.
pub fn normalize_accounts(data: Value) -> Result<Vec<Account>> {
    let entries = match data {
        Value::Array(entries) => entries,
        Value::Object(mut object) => {
            if let Some(entries) = take_array_field(&mut object, "accounts") {
                entries
            } else if let Some(entries) = take_array_field(&mut object, "list") {
                entries
            } else if looks_like_account(&object) {
                vec![Value::Object(object)]
            } else {
                bail!(UNEXPECTED_SHAPE);
            }
        }
        _ => bail!(UNEXPECTED_SHAPE),
    };
    entries.into_iter().map(parse_account).collect()
}

fn parse_account(entry: Value) -> Result<Account> {
    if let Some(balance) = entry.get("balance").filter(|balance| balance.is_number()) {
        ensure!(
            balance_in_range(balance),
            "Account balance out of range: {balance}"
        );
    }
    serde_json::from_value(entry).context(UNEXPECTED_SHAPE)
}

/// Decimal holds magnitudes up to about 7.9e28
fn balance_in_range(balance: &Value) -> bool {
    balance.is_i64()
        || balance.is_u64()
        || balance.as_f64().and_then(Decimal::from_f64).is_some()
}

fn take_array_field(object: &mut Map<String, Value>, field: &str) -> Option<Vec<Value>> {
    match object.get_mut(field) {
        Some(Value::Array(entries)) => Some(std::mem::take(entries)),
        _ => None,
    }
}

fn looks_like_account(object: &Map<String, Value>) -> bool {
    let has_name = matches!(object.get("name"), Some(Value::String(name)) if !name.is_empty());
    let has_balance = object.get("balance").is_some_and(Value::is_number);
    has_name && has_balance
}
