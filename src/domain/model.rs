use crate::utils::error::{CustomerError, Result};
use crate::utils::validation::{validate_non_negative, validate_required_argument};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer record: name, contact phone and revenue.
///
/// Fields are validated once in [`Customer::new`] and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CustomerFields")]
pub struct Customer {
    name: String,
    contact_phone: String,
    revenue: Decimal,
}

#[derive(Debug, Deserialize)]
struct CustomerFields {
    name: String,
    contact_phone: String,
    revenue: Decimal,
}

impl TryFrom<CustomerFields> for Customer {
    type Error = CustomerError;

    fn try_from(fields: CustomerFields) -> Result<Self> {
        Customer::new(fields.name, fields.contact_phone, fields.revenue)
    }
}

impl Customer {
    /// Checks name, then contact phone, then revenue; the first violation is reported.
    pub fn new(
        name: impl Into<String>,
        contact_phone: impl Into<String>,
        revenue: Decimal,
    ) -> Result<Self> {
        let name = name.into();
        let contact_phone = contact_phone.into();

        validate_required_argument("name", &name)?;
        validate_required_argument("contactPhone", &contact_phone)?;
        validate_non_negative("revenue", revenue)?;

        Ok(Self {
            name,
            contact_phone,
            revenue,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contact_phone(&self) -> &str {
        &self.contact_phone
    }

    pub fn revenue(&self) -> Decimal {
        self.revenue
    }
}

impl Default for Customer {
    fn default() -> Self {
        Self {
            name: "Jeffrey Richter".to_string(),
            contact_phone: "+1(425) 555 - 0100".to_string(),
            revenue: Decimal::from(1_000_000),
        }
    }
}
