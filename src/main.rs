use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};

mod chart;
mod client;
mod commands;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;
mod widgets;

#[cfg(test)]
mod test_utils;

use crate::client::DaoClient;
use crate::domain::{DaoDetails, DaoError, EnsDomain};
use crate::state::{App, AppConfig, StartupOptions};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// daoscope - Terminal viewer for ENS-linked DAO tokens
#[derive(Parser)]
#[command(version = VERSION, about, long_about = None, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    command: Option<Commands>,

    /// DAO name, or the ENS name it is registered under (e.g. rungta.eth)
    dao: Option<String>,

    /// Wallet address to show holdings for
    #[arg(short, long)]
    wallet: Option<String>,

    /// DAO factory subgraph URL
    #[arg(long)]
    subgraph_url: Option<String>,

    /// Draw chart updates without animation
    #[arg(long)]
    no_animate: bool,

    /// Write logs here instead of the data directory
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List ENS domains owned by a wallet and whether a DAO uses them
    Domains {
        /// Owner address
        owner: String,
    },
    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let mut cli = Cli::parse();
    let _log_guard = logging::init(cli.log_file.clone())?;

    match cli.command.take() {
        Some(Commands::Version) => {
            println!("daoscope v{VERSION}");
            println!("{}", env!("CARGO_PKG_DESCRIPTION"));
            Ok(())
        }
        Some(Commands::Domains { owner }) => list_domains(&owner, cli.subgraph_url).await,
        None => run_tui(cli).await,
    }
}

async fn run_tui(cli: Cli) -> Result<()> {
    let dao = cli
        .dao
        .filter(|dao| !dao.trim().is_empty())
        .ok_or_else(|| eyre!("no DAO given; usage: daoscope <DAO or name.eth>"))?;

    let mut app = App::new(StartupOptions {
        dao,
        wallet: cli.wallet,
        subgraph_url: cli.subgraph_url,
        no_animate: cli.no_animate,
    })?;

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

async fn list_domains(owner: &str, subgraph_url: Option<String>) -> Result<()> {
    let mut config = AppConfig::load();
    if let Some(url) = subgraph_url {
        config.subgraph_url = url;
    }
    let client = DaoClient::new(&config.subgraph_url, &config.ens_subgraph_url)
        .map_err(DaoError::into_report)?;

    let domains = client
        .get_ens_domains(owner)
        .await
        .map_err(DaoError::into_report)?;
    if domains.is_empty() {
        println!("No ENS domains owned by {owner}");
        return Ok(());
    }

    for domain in &domains {
        let dao = client
            .get_dao_for_ens(&domain.name)
            .await
            .map_err(DaoError::into_report)?;
        println!("{}", domain_line(domain, dao.as_ref()));
    }
    Ok(())
}

/// One row of the `domains` listing.
fn domain_line(domain: &EnsDomain, dao: Option<&DaoDetails>) -> String {
    let status = dao.map_or_else(
        || "available".to_string(),
        |dao| format!("used by {} ({})", dao.name, dao.symbol),
    );
    format!("{:<32} {status}", domain.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::DaoMother;

    fn domain(name: &str) -> EnsDomain {
        EnsDomain {
            id: format!("{name}-node"),
            name: name.to_string(),
            label_name: None,
        }
    }

    #[test]
    fn test_domain_line() {
        assert_eq!(
            domain_line(&domain("free.eth"), None),
            format!("{:<32} available", "free.eth")
        );
        let dao = DaoMother::details("rungta");
        assert_eq!(
            domain_line(&domain("rungta.eth"), Some(&dao)),
            format!("{:<32} used by rungta (DAO)", "rungta.eth")
        );
    }

    #[test]
    fn test_cli_parses_dao_and_overrides() {
        let cli = Cli::parse_from([
            "daoscope",
            "rungta.eth",
            "--wallet",
            "0xabc",
            "--no-animate",
        ]);
        assert!(cli.command.is_none());
        assert_eq!(cli.dao.as_deref(), Some("rungta.eth"));
        assert_eq!(cli.wallet.as_deref(), Some("0xabc"));
        assert!(cli.no_animate);
    }

    #[test]
    fn test_cli_parses_domains_subcommand() {
        let cli = Cli::parse_from(["daoscope", "domains", "0xowner"]);
        assert!(matches!(cli.command, Some(Commands::Domains { ref owner }) if owner == "0xowner"));
        assert!(cli.dao.is_none());
    }
}
