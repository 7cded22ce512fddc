use anyhow::{Context, Result};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};

/// Command line configuration of the pet store server.
#[derive(Parser, Debug, Clone)]
#[command(name = "petstore", about = "In-memory pet store HTTP server")]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,
}

impl Config {
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .with_context(|| format!("parsing bind address: {}", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
