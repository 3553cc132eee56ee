use crate::core::locale::Locale;
use crate::domain::ports::{Capability, CustomFormatter, FormatArg, FormatProvider};

/// Verbose customer rendering that ignores the field specifier:
/// `Customer info -- Name: Alex, Contact phone: +37800000, Revenue: 123567.`
///
/// Acts as its own provider. Only the instance that is passed as the provider will format;
/// any other provider gets `None` back so the caller can fall back to default rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailedFormatter {
    locale: Locale,
}

impl DetailedFormatter {
    pub fn new() -> Self {
        Self {
            locale: Locale::INVARIANT,
        }
    }

    /// Revenue and other numbers are written with this culture's rules.
    pub fn with_locale(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn query_capability(&self, capability: Capability) -> Option<&Self> {
        match capability {
            Capability::CustomFormatter => Some(self),
        }
    }

    fn is_same_instance(&self, provider: &dyn FormatProvider) -> bool {
        std::ptr::addr_eq(self as *const Self, provider as *const dyn FormatProvider)
    }
}

impl Default for DetailedFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatProvider for DetailedFormatter {
    fn locale(&self) -> Locale {
        self.locale
    }

    fn custom_formatter(&self) -> Option<&dyn CustomFormatter> {
        self.query_capability(Capability::CustomFormatter)
            .map(|formatter| formatter as &dyn CustomFormatter)
    }
}

impl CustomFormatter for DetailedFormatter {
    fn format(
        &self,
        _specifier: &str,
        arg: Option<&FormatArg<'_>>,
        provider: &dyn FormatProvider,
    ) -> Option<String> {
        if !self.is_same_instance(provider) {
            return None;
        }

        let text = match arg {
            Some(FormatArg::Customer(customer)) => format!(
                "Customer info -- Name: {}, Contact phone: {}, Revenue: {}.",
                customer.name(),
                customer.contact_phone(),
                self.locale.format_decimal(&customer.revenue())
            ),
            Some(FormatArg::Decimal(value)) => self.locale.format_decimal(value),
            Some(FormatArg::Str(value)) => (*value).to_string(),
            Some(FormatArg::Display(value)) => value.to_string(),
            None => String::new(),
        };
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Customer;
    use rust_decimal::Decimal;

    fn alex() -> Customer {
        Customer::new("Alex", "+37800000", Decimal::from(123567)).unwrap()
    }

    #[test]
    fn test_capability_query() {
        let formatter = DetailedFormatter::new();
        assert!(formatter.query_capability(Capability::CustomFormatter).is_some());
        assert!(formatter.custom_formatter().is_some());
        assert!(Locale::INVARIANT.custom_formatter().is_none());
    }

    #[test]
    fn test_formats_customer_ignoring_specifier() {
        let formatter = DetailedFormatter::new();
        let customer = alex();
        let arg = FormatArg::Customer(&customer);
        for specifier in ["", "N", "xyz"] {
            assert_eq!(
                formatter.format(specifier, Some(&arg), &formatter).as_deref(),
                Some("Customer info -- Name: Alex, Contact phone: +37800000, Revenue: 123567.")
            );
        }
    }

    #[test]
    fn test_other_values_and_absent_value() {
        let formatter = DetailedFormatter::new();
        let number = 42;
        let arg = FormatArg::Display(&number);
        assert_eq!(formatter.format("", Some(&arg), &formatter).as_deref(), Some("42"));
        assert_eq!(formatter.format("", None, &formatter).as_deref(), Some(""));
    }

    #[test]
    fn test_declines_foreign_provider() {
        let formatter = DetailedFormatter::new();
        let other = DetailedFormatter::new();
        let customer = alex();
        let arg = FormatArg::Customer(&customer);
        assert_eq!(formatter.format("", Some(&arg), &other), None);
        assert_eq!(formatter.format("", Some(&arg), &Locale::INVARIANT), None);
    }

    #[test]
    fn test_customer_render_delegates() {
        let formatter = DetailedFormatter::new();
        assert_eq!(
            alex().render(Some("N"), Some(&formatter)).unwrap(),
            "Customer info -- Name: Alex, Contact phone: +37800000, Revenue: 123567."
        );
    }

    #[test]
    fn test_locale_applies_to_revenue() {
        let formatter = DetailedFormatter::with_locale(Locale::from_code("fr-FR").unwrap());
        let customer = Customer::new("Zoé", "+3312", Decimal::new(995, 1)).unwrap();
        assert_eq!(
            customer.render(None, Some(&formatter)).unwrap(),
            "Customer info -- Name: Zoé, Contact phone: +3312, Revenue: 99,5."
        );
    }
}
