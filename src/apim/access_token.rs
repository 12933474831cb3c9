use anyhow::{ensure, Result};
use std::fmt::Debug;

/// Bearer token for the APIM gateway. Obtaining it from the identity server is up to the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    access_token: String,
}

impl AccessToken {
    pub fn new(access_token: String) -> Result<AccessToken> {
        let access_token = access_token.trim().to_string();
        ensure!(!access_token.is_empty(), "Access token must not be empty");
        Ok(AccessToken { access_token })
    }

    pub fn get(&self) -> &str {
        &self.access_token
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "AccessToken([redacted])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_hides_secret() {
        let token = AccessToken::new("super-secret".to_string()).unwrap();
        let debug = format!("{token:?}");
        assert!(!debug.contains("super-secret"));
        assert_eq!("AccessToken([redacted])", debug);
    }

    #[test]
    fn trims_whitespace() {
        let token = AccessToken::new("  abc\n".to_string()).unwrap();
        assert_eq!("abc", token.get());
    }

    #[test]
    fn rejects_empty() {
        assert!(AccessToken::new("".to_string()).is_err());
        assert!(AccessToken::new(" \t".to_string()).is_err());
    }
}
