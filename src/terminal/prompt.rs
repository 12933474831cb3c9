use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Password};

/// Prompt without echoing the input
pub fn prompt_secret(prompt: &str) -> Result<String> {
    Ok(Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .interact()?)
}
