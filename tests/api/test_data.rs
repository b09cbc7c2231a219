//! Inputs the mock API echoes back as part of a created tourist

pub const TOURIST_LOCATION: &str = "Terra";
pub const CREATED_AT: &str = "2023-06-14T11:59:58.024Z";
