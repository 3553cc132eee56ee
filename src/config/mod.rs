#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

use crate::config::toml_config::TomlConfig;
use crate::core::detailed::DetailedFormatter;
use crate::core::locale::Locale;
use crate::core::specifier::Specifier;
use crate::domain::ports::FormatProvider;
use crate::utils::error::{CustomerError, Result};
use crate::utils::validation::validate_one_of;
use std::str::FromStr;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CustomerError;

    fn from_str(s: &str) -> Result<Self> {
        validate_one_of("output.format", s, &OUTPUT_FORMATS)?;
        Ok(match s {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        })
    }
}

/// Rendering settings after merging the config file with command line overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedOptions {
    pub specifier: Specifier,
    pub locale: Locale,
    pub detailed: bool,
    pub output: OutputFormat,
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            specifier: Specifier::default(),
            locale: Locale::current(),
            detailed: false,
            output: OutputFormat::default(),
        }
    }
}

/// Values given explicitly on the command line; `None` keeps the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub specifier: Option<&'a str>,
    pub locale: Option<&'a str>,
    pub detailed: Option<bool>,
    pub output: Option<&'a str>,
}

impl ResolvedOptions {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        Self::resolve(Some(config), &Overrides::default())
    }

    /// 命令列參數優先於設定檔
    pub fn resolve(config: Option<&TomlConfig>, overrides: &Overrides<'_>) -> Result<Self> {
        let output_config = config.map(|c| &c.output);
        let mut options = Self::default();

        let specifier = overrides
            .specifier
            .or_else(|| output_config.and_then(|o| o.specifier.as_deref()));
        if let Some(specifier) = specifier {
            options.specifier = Specifier::parse_or_default(Some(specifier))?;
        }

        let locale = overrides
            .locale
            .or_else(|| output_config.and_then(|o| o.locale.as_deref()));
        if let Some(locale) = locale {
            options.locale = Locale::from_code(locale)?;
        }

        options.detailed = overrides
            .detailed
            .or_else(|| output_config.and_then(|o| o.detailed))
            .unwrap_or(false);

        let output = overrides
            .output
            .or_else(|| output_config.and_then(|o| o.format.as_deref()));
        if let Some(output) = output {
            options.output = output.parse()?;
        }

        tracing::debug!(
            "Resolved options: specifier={}, locale={}, detailed={}, output={:?}",
            options.specifier,
            options.locale,
            options.detailed,
            options.output
        );
        Ok(options)
    }

    /// The detailed formatter when requested, otherwise the plain locale.
    pub fn provider(&self) -> Box<dyn FormatProvider> {
        if self.detailed {
            Box::new(DetailedFormatter::with_locale(self.locale))
        } else {
            Box::new(self.locale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_overrides_win_over_file() {
        let config = TomlConfig::from_toml_str(
            r#"
[output]
specifier = "N"
locale = "de-DE"
detailed = true
format = "json"
"#,
        )
        .unwrap();

        let options = ResolvedOptions::from_toml(&config).unwrap();
        assert_eq!(options.specifier, Specifier::Name);
        assert_eq!(options.locale.code(), "de-DE");
        assert!(options.detailed);
        assert_eq!(options.output, OutputFormat::Json);

        let overrides = Overrides {
            specifier: Some("cr"),
            locale: Some("en-US"),
            detailed: Some(false),
            output: Some("text"),
        };
        let options = ResolvedOptions::resolve(Some(&config), &overrides).unwrap();
        assert_eq!(options.specifier, Specifier::ContactPhoneRevenue);
        assert_eq!(options.locale.code(), "en-US");
        assert!(!options.detailed);
        assert_eq!(options.output, OutputFormat::Text);
    }

    #[test]
    fn test_bad_override_is_rejected() {
        let overrides = Overrides {
            specifier: Some("xyz"),
            ..Overrides::default()
        };
        assert!(matches!(
            ResolvedOptions::resolve(None, &overrides),
            Err(CustomerError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_provider_selection() {
        let mut options = ResolvedOptions {
            specifier: Specifier::Name,
            locale: Locale::INVARIANT,
            detailed: false,
            output: OutputFormat::Text,
        };
        assert!(options.provider().custom_formatter().is_none());

        options.detailed = true;
        assert!(options.provider().custom_formatter().is_some());
    }
}
