// subrecon - Subdomain enumeration via DNS brute-force and crt.sh
// Licensed under GPL-3.0

use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use std::time::Duration;
use subrecon::cli::{Args, ScanMode};
use subrecon::crtsh::{CrtshClient, CrtshConfig};
use subrecon::error::ScanError;
use subrecon::output;
use subrecon::resolver::WordlistResolver;
use subrecon::wordlist::Wordlist;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging - respect RUST_LOG environment variable
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<Level>().ok())
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let args = Args::parse();

    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::diagnostic(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> subrecon::Result<()> {
    match args.scan_mode() {
        ScanMode::Wordlist(path) => {
            let wordlist = Wordlist::load(&path)?;
            let resolver = WordlistResolver::new(args.resolver.concurrency);
            resolver.scan(&args.domain, &wordlist).await;
            Ok(())
        }
        ScanMode::CertLog => {
            let config = CrtshConfig {
                retries: args.crtsh.retries,
                timeout: Duration::from_secs(args.crtsh.timeout),
                ..CrtshConfig::default()
            };
            let client = CrtshClient::new(config)?;

            output::progress(&format!(
                "Fetching subdomains from crt.sh for {}...",
                args.domain
            ));
            let subdomains = client.fetch(&args.domain).await?;
            output::subdomain_set(&subdomains);
            Ok(())
        }
        ScanMode::Invalid => {
            Args::command().print_help().ok();
            println!();
            Err(ScanError::InvalidInput {
                message: "specify a wordlist for wordlist mode, or use --mode crtsh".to_string(),
            })
        }
    }
}
