use crate::core::locale::Locale;
use crate::domain::model::Customer;
use rust_decimal::Decimal;
use std::fmt;

/// Extension interfaces a provider may be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    CustomFormatter,
}

/// A value handed to the composite formatter.
#[derive(Clone, Copy)]
pub enum FormatArg<'a> {
    Customer(&'a Customer),
    Decimal(Decimal),
    Str(&'a str),
    Display(&'a dyn fmt::Display),
}

impl fmt::Debug for FormatArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Customer(customer) => f.debug_tuple("Customer").field(customer).finish(),
            FormatArg::Decimal(value) => f.debug_tuple("Decimal").field(value).finish(),
            FormatArg::Str(value) => f.debug_tuple("Str").field(value).finish(),
            FormatArg::Display(value) => f.debug_tuple("Display").field(&value.to_string()).finish(),
        }
    }
}

impl<'a> From<&'a Customer> for FormatArg<'a> {
    fn from(customer: &'a Customer) -> Self {
        FormatArg::Customer(customer)
    }
}

impl From<Decimal> for FormatArg<'_> {
    fn from(value: Decimal) -> Self {
        FormatArg::Decimal(value)
    }
}

impl<'a> From<&'a str> for FormatArg<'a> {
    fn from(value: &'a str) -> Self {
        FormatArg::Str(value)
    }
}

impl<'a> From<&'a String> for FormatArg<'a> {
    fn from(value: &'a String) -> Self {
        FormatArg::Str(value)
    }
}

/// Supplies culture rules and, optionally, a formatter that takes over rendering.
pub trait FormatProvider: Send + Sync {
    fn locale(&self) -> Locale;

    fn custom_formatter(&self) -> Option<&dyn CustomFormatter> {
        None
    }
}

pub trait CustomFormatter: Send + Sync {
    fn can_format(&self) -> bool {
        true
    }

    /// `None` means "not applicable here"; the caller falls back to the argument's own
    /// rendering.
    fn format(
        &self,
        specifier: &str,
        arg: Option<&FormatArg<'_>>,
        provider: &dyn FormatProvider,
    ) -> Option<String>;
}
