//! Command-line options and logger setup.

use std::fs::File;
use std::path::PathBuf;

use clap::Parser;

use alien_invasion::config::{ConfigError, Settings};

#[derive(Parser, Debug)]
#[command(name = "alien_invasion")]
#[command(about = "Terminal arcade shooter: hold off the descending alien fleet")]
pub struct Cli {
    /// TOML file with game settings; missing keys use the defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Ships per game (overrides the settings file)
    #[arg(long)]
    pub lives: Option<u32>,
    /// Simulation ticks per second (overrides the settings file)
    #[arg(long)]
    pub tick_rate: Option<u32>,
    /// Write log output here; the terminal itself is taken by the game
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the settings file, then command-line overrides.
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load_from_file(path)?,
            None => Settings::default(),
        };
        if let Some(lives) = self.lives {
            settings.starting_lives = lives;
        }
        if let Some(tick_rate) = self.tick_rate {
            settings.tick_rate = tick_rate;
        }
        Ok(settings)
    }

    /// Route `log` output to `--log-file` (default level `info`).  Without a
    /// log file nothing is logged unless `RUST_LOG` asks for it, since stderr
    /// shares the game's terminal.
    pub fn init_logging(&self) -> std::io::Result<()> {
        let default_filter = if self.log_file.is_some() { "info" } else { "off" };
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
        if let Some(path) = &self.log_file {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        builder.init();
        Ok(())
    }
}
