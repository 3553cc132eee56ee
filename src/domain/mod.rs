// Domain layer: the customer record and the formatting ports (provider / custom formatter).

pub mod model;
pub mod ports;
