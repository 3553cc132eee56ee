use crate::utils::error::{CustomerError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    ContactPhone,
    Revenue,
}

/// Which customer fields a rendering shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Specifier {
    /// N
    Name,
    /// C
    ContactPhone,
    /// R
    Revenue,
    /// NC
    NameContactPhone,
    /// NR
    NameRevenue,
    /// CR
    ContactPhoneRevenue,
    /// NCR
    #[default]
    Full,
}

impl Specifier {
    pub const ALL: [Specifier; 7] = [
        Specifier::Name,
        Specifier::ContactPhone,
        Specifier::Revenue,
        Specifier::NameContactPhone,
        Specifier::NameRevenue,
        Specifier::ContactPhoneRevenue,
        Specifier::Full,
    ];

    /// Empty or missing input means the full layout.
    pub fn parse_or_default(specifier: Option<&str>) -> Result<Self> {
        match specifier {
            None | Some("") => Ok(Self::default()),
            Some(code) => code.parse(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Specifier::Name => "N",
            Specifier::ContactPhone => "C",
            Specifier::Revenue => "R",
            Specifier::NameContactPhone => "NC",
            Specifier::NameRevenue => "NR",
            Specifier::ContactPhoneRevenue => "CR",
            Specifier::Full => "NCR",
        }
    }

    /// Selected fields in output order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Specifier::Name => &[Field::Name],
            Specifier::ContactPhone => &[Field::ContactPhone],
            Specifier::Revenue => &[Field::Revenue],
            Specifier::NameContactPhone => &[Field::Name, Field::ContactPhone],
            Specifier::NameRevenue => &[Field::Name, Field::Revenue],
            Specifier::ContactPhoneRevenue => &[Field::ContactPhone, Field::Revenue],
            Specifier::Full => &[Field::Name, Field::ContactPhone, Field::Revenue],
        }
    }

    /// Composite template for this layout, e.g. `Customer record: {0}, {1}`.
    pub fn template(&self) -> &'static str {
        match self.fields().len() {
            1 => "Customer record: {0}",
            2 => "Customer record: {0}, {1}",
            _ => "Customer record: {0}, {1}, {2}",
        }
    }
}

impl FromStr for Specifier {
    type Err = CustomerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "N" => Ok(Specifier::Name),
            "C" => Ok(Specifier::ContactPhone),
            "R" => Ok(Specifier::Revenue),
            "NC" => Ok(Specifier::NameContactPhone),
            "NR" => Ok(Specifier::NameRevenue),
            "CR" => Ok(Specifier::ContactPhoneRevenue),
            "NCR" => Ok(Specifier::Full),
            _ => Err(CustomerError::InvalidFormat {
                specifier: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
