//! IWM CLI - Istanbul reservoir dashboard and scenario projection in the terminal.

use clap::Parser;
use iwm_cmd::Command;
use iwm_utils::config::{API_URL_ENV, DEFAULT_API_URL};
use iwm_view::localization::Language;

#[derive(Parser)]
#[command(
    name = "iwm-cli",
    version,
    about = "Istanbul Water Management reservoir dashboard"
)]
struct Cli {
    /// Base address of the prediction backend
    #[arg(long, global = true, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Display language (tr or en)
    #[arg(long, global = true, default_value_t = Language::BASE)]
    lang: Language,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    iwm_cmd::run(cli.command, &cli.api_url, cli.lang).await
}
