use crate::config::OUTPUT_FORMATS;
use crate::core::locale::Locale;
use crate::core::specifier::Specifier;
use crate::domain::model::Customer;
use crate::utils::error::{CustomerError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub specifier: Option<String>,
    pub locale: Option<String>,
    pub detailed: Option<bool>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CustomerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CustomerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CUSTOMER_LOCALE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CustomerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if let Some(specifier) = &self.output.specifier {
            Specifier::parse_or_default(Some(specifier)).map_err(|_| {
                CustomerError::InvalidConfigValueError {
                    field: "output.specifier".to_string(),
                    value: specifier.clone(),
                    reason: "Valid specifiers: N, C, R, NC, NR, CR, NCR".to_string(),
                }
            })?;
        }

        if let Some(locale) = &self.output.locale {
            Locale::from_code(locale).map_err(|_| CustomerError::InvalidConfigValueError {
                field: "output.locale".to_string(),
                value: locale.clone(),
                reason: format!(
                    "Known locales: invariant, {}",
                    Locale::supported().collect::<Vec<_>>().join(", ")
                ),
            })?;
        }

        if let Some(format) = &self.output.format {
            validate_one_of("output.format", format, &OUTPUT_FORMATS)?;
        }

        Ok(())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
