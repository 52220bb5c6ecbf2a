pub mod admin;
pub mod aggregator;
pub mod delimited;
pub mod handlers;
pub mod ordering;
pub mod validation;
