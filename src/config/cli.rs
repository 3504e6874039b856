use crate::config::toml_config::TomlConfig;
use crate::config::ServerConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Command-line and environment overrides. Unset options fall back to the
/// config file, then to built-in defaults.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "number-classifier")]
#[command(about = "HTTP service that classifies the mathematical properties of an integer")]
pub struct CliConfig {
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    #[arg(long, env = "FACT_API_URL", help = "Base URL of the fun-fact provider")]
    pub fact_api_url: Option<String>,

    #[arg(long, env = "FACT_TIMEOUT_MS", help = "Fun-fact request timeout in milliseconds")]
    pub fact_timeout_ms: Option<u64>,

    #[arg(long, env = "CONFIG_FILE", help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, env = "JSON_LOGS", help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn resolve(&self) -> Result<ServerConfig> {
        let mut config = ServerConfig::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut config);
        }

        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(url) = &self.fact_api_url {
            config.fact_api_url = url.clone();
        }
        if let Some(timeout_ms) = self.fact_timeout_ms {
            config.fact_timeout_ms = timeout_ms;
        }
        config.verbose = self.verbose;
        config.json_logs = self.json_logs;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cli_overrides_file_and_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 4000\n\n[fact_provider]\ntimeout_ms = 500"
        )
        .unwrap();

        let cli = CliConfig {
            port: Some(5000),
            config: Some(file.path().to_path_buf()),
            verbose: true,
            ..CliConfig::default()
        };

        let config = cli.resolve().unwrap();
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.fact_timeout_ms, 500);
        assert_eq!(config.fact_api_url, "http://numbersapi.com");
        assert!(config.verbose);
    }

    #[test]
    fn test_parse_flags() {
        let cli = CliConfig::try_parse_from([
            "number-classifier",
            "--port",
            "8081",
            "--fact-timeout-ms",
            "750",
        ])
        .unwrap();

        let config = cli.resolve().unwrap();
        assert_eq!(config.port, 8081);
        assert_eq!(config.fact_timeout_ms, 750);
    }
}
