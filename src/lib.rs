pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use crate::core::{
    composite::format, detailed::DetailedFormatter, locale::Locale, specifier::Specifier,
};
pub use domain::model::Customer;
pub use domain::ports::{Capability, CustomFormatter, FormatArg, FormatProvider};
pub use utils::error::{CustomerError, Result};
