pub mod batch;
pub mod composite;
pub mod detailed;
pub mod locale;
pub mod render;
pub mod specifier;

pub use crate::domain::model::Customer;
pub use crate::domain::ports::{Capability, CustomFormatter, FormatArg, FormatProvider};
pub use crate::utils::error::Result;
