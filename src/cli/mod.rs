// src/cli/mod.rs — CLI definition (clap derive)

use clap::Parser;

use crate::infra::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "chatgate",
    about = "Activation-code gated web chat for Gemini and OpenAI",
    version
)]
pub struct Cli {
    /// Config file path (defaults to $CHATGATE_HOME/config.toml or ~/.chatgate/config.toml)
    #[arg(long)]
    pub config: Option<String>,

    /// Address to bind (overrides [server].host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides [server].port)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, mut config: Config) -> Config {
        if let Some(ref host) = self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["chatgate"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.log_level, "info");

        let config = cli.apply_overrides(Config::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:5000");
    }

    #[test]
    fn test_host_and_port_override() {
        let cli = Cli::try_parse_from(["chatgate", "--host", "0.0.0.0", "-p", "8080"]).unwrap();
        let config = cli.apply_overrides(Config::default());
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["chatgate", "--port", "99999"]).is_err());
    }
}
