use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = bitwave_accounts::args::parse();
    bitwave_accounts::cli::main(args).await
}
