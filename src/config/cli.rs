use crate::config::toml_config::TomlConfig;
use crate::config::{Overrides, ResolvedOptions};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "customer-fmt")]
#[command(about = "Render customer records with culture-aware, pluggable layouts")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Field specifier: N, C, R, NC, NR, CR or NCR (case-insensitive)
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Culture used for numbers, e.g. de-DE (defaults to LC_ALL / LANG)
    #[arg(short, long, global = true)]
    pub locale: Option<String>,

    /// Use the detailed formatter instead of the specifier layout
    #[arg(short, long, global = true)]
    pub detailed: bool,

    /// Output format: text or json
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Render a single customer given on the command line
    Render {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long, allow_hyphen_values = true)]
        revenue: String,
    },
    /// Render every customer in a CSV file (name,contact_phone,revenue)
    Batch {
        #[arg(short, long)]
        input: String,
    },
    /// Render the customers listed in the config file
    List,
    /// Render the built-in sample customer
    Sample,
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides<'_> {
        Overrides {
            specifier: self.format.as_deref(),
            locale: self.locale.as_deref(),
            detailed: self.detailed.then_some(true),
            output: self.output.as_deref(),
        }
    }

    /// Loads and validates `--config` (if given) and merges it with the flags.
    pub fn load_options(&self) -> Result<(Option<TomlConfig>, ResolvedOptions)> {
        let file_config = match &self.config {
            Some(path) => {
                validate_path("--config", path)?;
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                Some(config)
            }
            None => None,
        };

        let options = ResolvedOptions::resolve(file_config.as_ref(), &self.overrides())?;
        Ok((file_config, options))
    }
}
