//! Applies CLI overrides on top of file and environment configuration.
//!
//! Precedence, lowest to highest: `config/*.toml`, `RECIPE_*` variables,
//! global flags (`--verbose`, `--quiet`), then `serve` flags.

use super::parser::{Cli, Commands};
use crate::config::{ConfigError, ConfigLoader, Settings};

pub struct ConfigurationMerger {
    base_config: Settings,
}

impl ConfigurationMerger {
    pub fn new(base_config: Settings) -> Self {
        Self { base_config }
    }

    /// Loads the base configuration the way `cli` asks for it.
    ///
    /// `--config` switches to single-file loading and `--env` replaces the
    /// environment detected from `RECIPE_APP_ENV`.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::from_loader(ConfigLoader::new()?, cli)
    }

    pub fn from_loader(mut loader: ConfigLoader, cli: &Cli) -> Result<Self, ConfigError> {
        if let Some(path) = &cli.config {
            loader = loader.with_config_file(path);
        }
        if let Some(env) = cli.env {
            loader = loader.with_environment(env.into());
        }
        Ok(Self::new(loader.load()?))
    }

    /// Returns the validated settings with every CLI override applied.
    pub fn merge_cli_args(&self, cli: &Cli) -> Result<Settings, ConfigError> {
        let mut config = self.base_config.clone();

        if cli.verbose {
            config.logger.level = "debug".to_string();
        } else if cli.quiet {
            config.logger.level = "error".to_string();
        }

        if let Some(Commands::Serve {
            host,
            port,
            log_level,
            ..
        }) = &cli.command
        {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
            if let Some(level) = log_level {
                config.logger.level = level.as_str().to_string();
            }
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn base() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/recipes".to_string();
        settings
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_no_overrides_keeps_base() {
        let merged = ConfigurationMerger::new(base())
            .merge_cli_args(&parse(&["recipe-rs"]))
            .unwrap();
        assert_eq!(merged, base());
    }

    #[test]
    fn test_serve_flags_override_server_and_level() {
        let cli = parse(&[
            "recipe-rs",
            "--quiet",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "9090",
            "--log-level",
            "trace",
        ]);
        let merged = ConfigurationMerger::new(base()).merge_cli_args(&cli).unwrap();

        assert_eq!(merged.server.address(), "0.0.0.0:9090");
        assert_eq!(merged.logger.level, "trace");
    }

    #[test]
    fn test_verbose_sets_debug() {
        let merged = ConfigurationMerger::new(base())
            .merge_cli_args(&parse(&["recipe-rs", "-v", "migrate"]))
            .unwrap();
        assert_eq!(merged.logger.level, "debug");
    }

    #[test]
    fn test_merged_config_is_validated() {
        let err = ConfigurationMerger::new(Settings::default())
            .merge_cli_args(&parse(&["recipe-rs"]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }

    #[test]
    fn test_from_loader_honours_config_flag() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("single.toml");
        std::fs::write(
            &file,
            "[server]\nport = 7000\n\n[database]\nurl = \"postgres://db/recipes\"\n",
        )
        .unwrap();

        let cli = parse(&["recipe-rs", "--config", file.to_str().unwrap()]);
        let loader = ConfigLoader::from_vars(config::Map::new()).unwrap();
        let merged = ConfigurationMerger::from_loader(loader, &cli)
            .unwrap()
            .merge_cli_args(&cli)
            .unwrap();

        assert_eq!(merged.server.port, 7000);
        assert_eq!(merged.database.url, "postgres://db/recipes");
    }
}
