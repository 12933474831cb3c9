mod access_token;
mod accounts;
mod client;

pub use access_token::AccessToken;
pub use accounts::{get_accounts, normalize_accounts, Account};
pub use client::ApiClient;
