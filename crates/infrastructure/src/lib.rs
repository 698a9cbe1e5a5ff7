//! dohq infrastructure layer
pub mod dns;
