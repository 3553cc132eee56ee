use crate::domain::model::Customer;
use crate::domain::ports::FormatProvider;
use crate::utils::error::{CustomerError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Deserialize)]
struct CustomerRow {
    name: String,
    contact_phone: String,
    revenue: String,
}

impl CustomerRow {
    fn into_customer(self) -> Result<Customer> {
        let revenue_text = self.revenue.trim();
        let revenue =
            Decimal::from_str(revenue_text).map_err(|_| CustomerError::InvalidNumber {
                field: "revenue".to_string(),
                value: self.revenue.clone(),
            })?;
        Customer::new(self.name, self.contact_phone, revenue)
    }
}

/// One rendered customer, as written by JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCustomer {
    pub name: String,
    pub contact_phone: String,
    pub revenue: Decimal,
    pub rendered: String,
}

/// Reads `name,contact_phone,revenue` rows. The first bad row aborts the read; rows are
/// numbered from 1, not counting the header.
pub fn read_customers<R: Read>(reader: R) -> Result<Vec<Customer>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);
    let mut customers = Vec::new();

    for (index, row) in csv_reader.deserialize::<CustomerRow>().enumerate() {
        let row_number = index + 1;
        let customer = row
            .map_err(CustomerError::from)
            .and_then(CustomerRow::into_customer)
            .map_err(|e| CustomerError::InvalidRecord {
                row: row_number,
                source: Box::new(e),
            })?;
        customers.push(customer);
    }

    tracing::debug!("Read {} customer record(s)", customers.len());
    Ok(customers)
}

pub fn read_customers_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Customer>> {
    let file = std::fs::File::open(path)?;
    read_customers(file)
}

pub fn render_all(
    customers: &[Customer],
    specifier: &str,
    provider: &dyn FormatProvider,
) -> Result<Vec<RenderedCustomer>> {
    customers
        .iter()
        .map(|customer| {
            Ok(RenderedCustomer {
                name: customer.name().to_string(),
                contact_phone: customer.contact_phone().to_string(),
                revenue: customer.revenue(),
                rendered: customer.render(Some(specifier), Some(provider))?,
            })
        })
        .collect()
}

pub fn to_json(rendered: &[RenderedCustomer]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rendered)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detailed::DetailedFormatter;
    use crate::core::locale::Locale;

    const CSV: &str = "name,contact_phone,revenue\nAlex,+37800000,123567\nDmitry,+1234235,56476\n";

    #[test]
    fn test_read_customers() {
        let customers = read_customers(CSV.as_bytes()).unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[1].name(), "Dmitry");
        assert_eq!(customers[1].revenue(), Decimal::from(56476));
    }

    #[test]
    fn test_bad_row_reports_row_number() {
        let data = "name,contact_phone,revenue\nAlex,+37800000,1\nVictor,,43435\n";
        let err = read_customers(data.as_bytes()).unwrap_err();
        match err {
            CustomerError::InvalidRecord { row, source } => {
                assert_eq!(row, 2);
                assert!(matches!(*source, CustomerError::InvalidArgument { ref field } if field == "contactPhone"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_revenue() {
        let data = "name,contact_phone,revenue\nAlex,+37800000,lots\n";
        let err = read_customers(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            CustomerError::InvalidRecord { ref source, .. }
                if matches!(**source, CustomerError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_render_all_plain_and_detailed() {
        let customers = read_customers(CSV.as_bytes()).unwrap();

        let plain = render_all(&customers, "N", &Locale::INVARIANT).unwrap();
        assert_eq!(plain[0].rendered, "Customer record: Alex");
        assert_eq!(plain[1].rendered, "Customer record: Dmitry");

        let formatter = DetailedFormatter::new();
        let detailed = render_all(&customers, "N", &formatter).unwrap();
        assert_eq!(
            detailed[0].rendered,
            "Customer info -- Name: Alex, Contact phone: +37800000, Revenue: 123567."
        );
    }

    #[test]
    fn test_to_json() {
        let customers = read_customers(CSV.as_bytes()).unwrap();
        let rendered = render_all(&customers[..1], "R", &Locale::INVARIANT).unwrap();
        let json: serde_json::Value = serde_json::from_str(&to_json(&rendered).unwrap()).unwrap();
        assert_eq!(json[0]["name"], "Alex");
        assert_eq!(json[0]["rendered"], "Customer record: 123567");
    }
}
