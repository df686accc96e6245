use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::builder::TypedValueParser;
use clap::Parser;
use clientbook_server::Config;

#[derive(Parser, Debug)]
#[command(
    name = "clientbook",
    about = "JSON CRUD API over an in-memory client database",
    version,
)]
pub struct Cli {
    /// Log verbosity [default: info]
    #[arg(
        long,
        value_parser = clap::builder::PossibleValuesParser::new(["debug", "info", "warn", "error", "fatal"])
            .map(|s| s.to_ascii_lowercase()),
        ignore_case = true,
    )]
    pub log_level: Option<String>,

    /// Address to listen on for incoming requests [default: 0.0.0.0]
    #[arg(long)]
    pub addr: Option<IpAddr>,

    /// Port to listen on for incoming requests [default: 8080]
    #[arg(long)]
    pub port: Option<u16>,

    /// TOML configuration file; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Merge defaults, the optional config file and flags, in that order.
    pub fn resolve(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("unable to load config file {}", path.display()))?,
            None => Config::default(),
        };
        if let Some(level) = &self.log_level {
            config.log.level = level.clone();
        }
        if let Some(addr) = self.addr {
            config.server.address = addr;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        Ok(config)
    }
}
