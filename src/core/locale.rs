use crate::domain::ports::FormatProvider;
use crate::utils::error::{CustomerError, Result};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

/// Numeric formatting rules of a culture.
///
/// Only the general decimal layout is modelled: no digit grouping, scale kept as stored,
/// `.` swapped for the culture's decimal separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    code: &'static str,
    decimal_separator: char,
    negative_sign: char,
}

const fn culture(code: &'static str, decimal_separator: char) -> Locale {
    Locale {
        code,
        decimal_separator,
        negative_sign: '-',
    }
}

/// 內建文化表
const CULTURES: &[Locale] = &[
    culture("en-US", '.'),
    culture("en-GB", '.'),
    culture("de-DE", ','),
    culture("fr-FR", ','),
    culture("ru-RU", ','),
    culture("be-BY", ','),
    culture("uk-UA", ','),
    culture("es-ES", ','),
    culture("it-IT", ','),
    culture("ja-JP", '.'),
];

impl Locale {
    pub const INVARIANT: Locale = culture("", '.');

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn negative_sign(&self) -> char {
        self.negative_sign
    }

    pub fn is_invariant(&self) -> bool {
        self.code.is_empty()
    }

    pub fn supported() -> impl Iterator<Item = &'static str> {
        CULTURES.iter().map(|c| c.code)
    }

    /// Looks up a culture by code. Matching ignores case and accepts `_` for `-`;
    /// `""` and `"invariant"` name the invariant culture.
    pub fn from_code(code: &str) -> Result<Self> {
        let normalized = code.trim().replace('_', "-");
        if normalized.is_empty() || normalized.eq_ignore_ascii_case("invariant") {
            return Ok(Self::INVARIANT);
        }

        CULTURES
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(&normalized))
            .copied()
            .ok_or_else(|| CustomerError::UnknownLocale {
                code: code.to_string(),
            })
    }

    /// Parses a POSIX locale name such as `de_DE.UTF-8` or `be_BY@latin`.
    pub fn from_posix(value: &str) -> Option<Self> {
        let base = value
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim();

        match base {
            "" => None,
            "C" | "POSIX" => Some(Self::INVARIANT),
            other => Self::from_code(other).ok(),
        }
    }

    /// Ambient culture of the process, taken from `LC_ALL`, `LC_NUMERIC`, then `LANG`.
    pub fn current() -> Self {
        for var in ["LC_ALL", "LC_NUMERIC", "LANG"] {
            let Ok(value) = std::env::var(var) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            if let Some(locale) = Self::from_posix(&value) {
                tracing::trace!("Resolved current locale '{}' from {}", locale, var);
                return locale;
            }
            tracing::debug!("Unrecognized locale '{}' in {}, using invariant", value, var);
            return Self::INVARIANT;
        }
        Self::INVARIANT
    }

    pub fn format_decimal(&self, value: &Decimal) -> String {
        value
            .to_string()
            .chars()
            .map(|ch| match ch {
                '.' => self.decimal_separator,
                '-' => self.negative_sign,
                other => other,
            })
            .collect()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::INVARIANT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_invariant() {
            f.write_str("invariant")
        } else {
            f.write_str(self.code)
        }
    }
}

impl FromStr for Locale {
    type Err = CustomerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

impl FormatProvider for Locale {
    fn locale(&self) -> Locale {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("de-DE").unwrap().decimal_separator(), ',');
        assert_eq!(Locale::from_code("de_de").unwrap().code(), "de-DE");
        assert!(Locale::from_code("").unwrap().is_invariant());
        assert!(Locale::from_code("Invariant").unwrap().is_invariant());
        assert!(matches!(
            Locale::from_code("xx-XX"),
            Err(CustomerError::UnknownLocale { .. })
        ));
    }

    #[test]
    fn test_from_posix() {
        assert_eq!(Locale::from_posix("fr_FR.UTF-8").unwrap().code(), "fr-FR");
        assert_eq!(Locale::from_posix("be_BY@latin").unwrap().code(), "be-BY");
        assert!(Locale::from_posix("C").unwrap().is_invariant());
        assert!(Locale::from_posix("POSIX.UTF-8").unwrap().is_invariant());
        assert!(Locale::from_posix("tlh_XX.UTF-8").is_none());
        assert!(Locale::from_posix("").is_none());
    }

    #[test]
    fn test_format_decimal() {
        let de = Locale::from_code("de-DE").unwrap();
        assert_eq!(de.format_decimal(&Decimal::new(12345, 1)), "1234,5");
        assert_eq!(de.format_decimal(&Decimal::new(-150, 2)), "-1,50");
        assert_eq!(Locale::INVARIANT.format_decimal(&Decimal::new(150, 2)), "1.50");
        assert_eq!(
            Locale::INVARIANT.format_decimal(&Decimal::from(111335656)),
            "111335656"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::INVARIANT.to_string(), "invariant");
        assert_eq!(Locale::from_code("ja-JP").unwrap().to_string(), "ja-JP");
    }
}
