use anyhow::{Context as _, Result};
use console::{pad_str, style, Alignment, StyledObject};
use rust_decimal::Decimal;

use crate::apim::{self, AccessToken, Account, ApiClient};
use crate::args::{Args, Command};
use crate::config::Config;
use crate::terminal::{self, BulletPointPrinter, LineWriter};

const BALANCE_WIDTH: usize = 15;

pub async fn main(args: Args) -> Result<()> {
    let config = load_config(&args).await?;
    match args.command {
        Command::Accounts => main_accounts(&config, args.token).await,
        Command::Config => main_config(&config),
    }
}

async fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path).await?,
        None => Config::default(),
    };
    if let Some(accounts_url) = &args.accounts_url {
        config.api.get_accounts_url = accounts_url.clone();
        config.validate().context("Invalid --accounts-url")?;
    }
    Ok(config)
}

async fn main_accounts(config: &Config, token: Option<String>) -> Result<()> {
    let access_token = resolve_access_token(token)?;
    let client = ApiClient::new(&config.api)?;
    let accounts = apim::get_accounts(&client, &access_token)
        .await
        .context("Failed to fetch accounts")?;
    print_accounts(
        &BulletPointPrinter::new_stdout(),
        &config.oidc.bank_name,
        &accounts,
    );
    Ok(())
}

fn main_config(config: &Config) -> Result<()> {
    let serialized = serde_yaml::to_string(config)?;
    print!("{serialized}");
    Ok(())
}

fn resolve_access_token(token: Option<String>) -> Result<AccessToken> {
    let token = match token {
        Some(token) => token,
        None => terminal::prompt_secret("Access token")?,
    };
    AccessToken::new(token)
}

fn print_accounts<W: LineWriter + Clone>(
    printer: &BulletPointPrinter<W>,
    bank_name: &str,
    accounts: &[Account],
) {
    printer.print_item(style_header(bank_name));
    let printer = printer.indent();
    if accounts.is_empty() {
        printer.print_item(style("(none)").italic());
        return;
    }
    for account in accounts {
        print_account(&printer, account);
    }
    let total: Decimal = accounts.iter().map(|account| account.balance).sum();
    printer.print_item(format!(
        "{} {}",
        pad_str(
            &style_balance(total).to_string(),
            BALANCE_WIDTH,
            Alignment::Right,
            None
        ),
        style("Total").bold(),
    ));
}

fn print_account<W: LineWriter + Clone>(printer: &BulletPointPrinter<W>, account: &Account) {
    printer.print_item(format!(
        "{} {}",
        pad_str(
            &style_balance(account.balance).to_string(),
            BALANCE_WIDTH,
            Alignment::Right,
            None
        ),
        style_account(&account.name),
    ));
}

fn style_header(header: &str) -> StyledObject<&str> {
    style(header).bold().underlined()
}

fn style_account(name: &str) -> StyledObject<&str> {
    style(name).magenta()
}

fn style_balance(balance: Decimal) -> StyledObject<String> {
    let result = style(balance.to_string()).bold();
    if balance < Decimal::ZERO {
        result.red()
    } else {
        result.green()
    }
}

#[cfg(test)]
mod tests {
    use crate::terminal::RecordingLineWriter;

    use super::*;

    fn account(name: &str, balance: Decimal) -> Account {
        Account {
            name: name.to_string(),
            balance,
        }
    }

    fn render(accounts: &[Account]) -> Vec<String> {
        console::set_colors_enabled(false);
        let writer = RecordingLineWriter::default();
        print_accounts(
            &BulletPointPrinter::new(writer.clone()),
            "Bitwave Bank",
            accounts,
        );
        writer.lines()
    }

    #[test]
    fn prints_accounts_with_total() {
        let lines = render(&[
            account("Checking", Decimal::new(12050, 2)),
            account("Credit card", Decimal::new(-2000, 2)),
        ]);
        assert_eq!(
            vec![
                "• Bitwave Bank".to_string(),
                format!("  • {:>15} Checking", "120.50"),
                format!("  • {:>15} Credit card", "-20.00"),
                format!("  • {:>15} Total", "100.50"),
            ],
            lines
        );
    }

    #[test]
    fn prints_none_for_empty_list() {
        assert_eq!(vec!["• Bitwave Bank", "  • (none)"], render(&[]));
    }

    #[test]
    fn explicit_token_is_used() {
        let token = resolve_access_token(Some("abc".to_string())).unwrap();
        assert_eq!("abc", token.get());
    }

    #[test]
    fn blank_token_is_rejected() {
        assert!(resolve_access_token(Some("   ".to_string())).is_err());
    }

    #[tokio::test]
    async fn accounts_url_override() {
        let args = Args {
            config: None,
            token: None,
            accounts_url: Some("http://127.0.0.1:9000/accounts".to_string()),
            command: Command::Config,
        };
        let config = load_config(&args).await.unwrap();
        assert_eq!("http://127.0.0.1:9000/accounts", config.api.get_accounts_url);
    }

    #[tokio::test]
    async fn invalid_accounts_url_override() {
        let args = Args {
            config: None,
            token: None,
            accounts_url: Some("nonsense".to_string()),
            command: Command::Accounts,
        };
        let err = load_config(&args).await.unwrap_err();
        assert_eq!("Invalid --accounts-url", err.to_string());
    }
}
