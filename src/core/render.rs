use crate::core::composite;
use crate::core::locale::Locale;
use crate::core::specifier::{Field, Specifier};
use crate::domain::model::Customer;
use crate::domain::ports::{FormatArg, FormatProvider};
use crate::utils::error::Result;
use std::fmt;

impl Customer {
    /// Renders the customer with a field specifier (`N`, `C`, `R`, `NC`, `NR`, `CR`, `NCR`,
    /// case-insensitive; empty or `None` means `NCR`).
    ///
    /// Without a provider the current locale is used. A provider exposing a custom
    /// formatter gets the whole customer and its output is returned as is.
    pub fn render(
        &self,
        specifier: Option<&str>,
        provider: Option<&dyn FormatProvider>,
    ) -> Result<String> {
        let Some(provider) = provider else {
            return self.render_with_locale(specifier, Locale::current());
        };

        if let Some(formatter) = provider.custom_formatter().filter(|f| f.can_format()) {
            let arg = FormatArg::Customer(self);
            if let Some(text) = formatter.format(specifier.unwrap_or_default(), Some(&arg), provider)
            {
                tracing::debug!("Customer '{}' rendered by custom formatter", self.name());
                return Ok(text);
            }
        }

        self.render_with_locale(specifier, provider.locale())
    }

    /// Same as `render(None, None)`.
    pub fn render_default(&self) -> Result<String> {
        self.render(None, None)
    }

    /// Same as `render(Some(specifier), None)`.
    pub fn render_with(&self, specifier: &str) -> Result<String> {
        self.render(Some(specifier), None)
    }

    pub fn render_with_locale(&self, specifier: Option<&str>, locale: Locale) -> Result<String> {
        let specifier = Specifier::parse_or_default(specifier)?;
        self.layout(specifier, locale)
    }

    fn layout(&self, specifier: Specifier, locale: Locale) -> Result<String> {
        let args: Vec<FormatArg<'_>> = specifier
            .fields()
            .iter()
            .map(|field| match field {
                Field::Name => FormatArg::Str(self.name()),
                Field::ContactPhone => FormatArg::Str(self.contact_phone()),
                Field::Revenue => FormatArg::Decimal(self.revenue()),
            })
            .collect();

        composite::format(&locale, specifier.template(), &args)
    }
}

/// The `NCR` layout in the current locale.
impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .layout(Specifier::Full, Locale::current())
            .map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::CustomerError;
    use rust_decimal::Decimal;

    fn alex() -> Customer {
        Customer::new("Alex", "+37800000", Decimal::from(123567)).unwrap()
    }

    #[test]
    fn test_all_layouts() {
        let customer = alex();
        let cases = [
            ("N", "Customer record: Alex"),
            ("C", "Customer record: +37800000"),
            ("R", "Customer record: 123567"),
            ("NC", "Customer record: Alex, +37800000"),
            ("NR", "Customer record: Alex, 123567"),
            ("CR", "Customer record: +37800000, 123567"),
            ("NCR", "Customer record: Alex, +37800000, 123567"),
        ];
        for (specifier, expected) in cases {
            assert_eq!(
                customer
                    .render_with_locale(Some(specifier), Locale::INVARIANT)
                    .unwrap(),
                expected
            );
        }
    }

    #[test]
    fn test_lowercase_and_empty_specifier() {
        let customer = alex();
        assert_eq!(
            customer.render(Some("nc"), Some(&Locale::INVARIANT)).unwrap(),
            "Customer record: Alex, +37800000"
        );
        assert_eq!(
            customer.render(Some(""), Some(&Locale::INVARIANT)).unwrap(),
            customer.render(None, Some(&Locale::INVARIANT)).unwrap()
        );
    }

    #[test]
    fn test_locale_decimal_separator() {
        let customer = Customer::new("Anna", "+4930", Decimal::new(12345, 1)).unwrap();
        let de = Locale::from_code("de-DE").unwrap();
        assert_eq!(
            customer.render(Some("R"), Some(&de)).unwrap(),
            "Customer record: 1234,5"
        );
        assert_eq!(
            customer.render(Some("R"), Some(&Locale::INVARIANT)).unwrap(),
            "Customer record: 1234.5"
        );
    }

    /// 未指定 provider 時使用環境語系；所有 LC_ALL 的修改都集中在這個測試裡
    #[test]
    fn test_missing_provider_uses_current_locale() {
        let previous = std::env::var("LC_ALL").ok();
        let customer = Customer::new("Anna", "+4930", Decimal::new(12345, 1)).unwrap();

        std::env::set_var("LC_ALL", "de_DE.UTF-8");
        assert_eq!(Locale::current().code(), "de-DE");
        assert_eq!(
            customer.render(Some("R"), None).unwrap(),
            "Customer record: 1234,5"
        );
        assert_eq!(customer.render_with("nr").unwrap(), "Customer record: Anna, 1234,5");

        std::env::set_var("LC_ALL", "tlh_XX.UTF-8");
        assert!(Locale::current().is_invariant());
        assert_eq!(
            customer.render(Some("R"), None).unwrap(),
            "Customer record: 1234.5"
        );

        match previous {
            Some(value) => std::env::set_var("LC_ALL", value),
            None => std::env::remove_var("LC_ALL"),
        }
    }

    #[test]
    fn test_invalid_specifier() {
        let err = alex().render(Some("xyz"), Some(&Locale::INVARIANT)).unwrap_err();
        assert!(matches!(err, CustomerError::InvalidFormat { ref specifier } if specifier == "xyz"));
    }

    #[test]
    fn test_braces_in_fields_are_not_reinterpreted() {
        let customer = Customer::new("{0}", "}{", Decimal::ONE).unwrap();
        assert_eq!(
            customer.render_with_locale(Some("NC"), Locale::INVARIANT).unwrap(),
            "Customer record: {0}, }{"
        );
    }
}
