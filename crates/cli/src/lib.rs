use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pricegate")]
#[command(about = "PriceGate - an authenticated crypto price gateway")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the gateway with the given configuration
    Start {
        /// Path to the configuration file
        #[arg(short, long, default_value = "gateway.yaml")]
        config: PathBuf,

        /// Override the HTTP port
        #[arg(long, env = "PORT")]
        port: Option<u16>,

        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Log output format: pretty, json or compact
        #[arg(long, default_value = "pretty")]
        log_format: String,
    },

    /// Validate configuration without starting the gateway
    Validate {
        /// Path to the configuration file
        #[arg(short, long, default_value = "gateway.yaml")]
        config: PathBuf,
    },

    /// Initialize a new configuration file with all defaults
    Init {
        /// Output path for the new configuration file
        #[arg(short, long, default_value = "gateway.yaml")]
        output: PathBuf,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_defaults() {
        let cli = Cli::try_parse_from(["pricegate", "start"]).unwrap();
        match cli.command {
            Commands::Start {
                config,
                host,
                log_format,
                ..
            } => {
                assert_eq!(config, PathBuf::from("gateway.yaml"));
                assert!(host.is_none());
                assert_eq!(log_format, "pretty");
            }
            _ => panic!("expected start command"),
        }
    }

    #[test]
    fn test_start_with_port_override() {
        let cli = Cli::try_parse_from(["pricegate", "start", "--port", "8080"]).unwrap();
        match cli.command {
            Commands::Start { port, .. } => assert_eq!(port, Some(8080)),
            _ => panic!("expected start command"),
        }
    }

    #[test]
    fn test_init_output_path() {
        let cli = Cli::try_parse_from(["pricegate", "init", "--output", "/tmp/g.yaml"]).unwrap();
        match cli.command {
            Commands::Init { output } => assert_eq!(output, PathBuf::from("/tmp/g.yaml")),
            _ => panic!("expected init command"),
        }
    }
}
