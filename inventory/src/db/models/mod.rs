//! Database records, independent of the JSON wire format.

pub mod products;
