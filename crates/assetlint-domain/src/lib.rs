//! Pure naming-rule evaluation (no IO).
//!
//! The rule engine (`rules::validate`, `rules::suggest`) maps a single name request to a
//! verdict. `evaluate` runs it over an asset model constructed elsewhere and produces
//! findings + verdict + summary data.

#![forbid(unsafe_code)]

pub mod fingerprint;
pub mod model;
pub mod policy;
pub mod report;
pub mod rules;

mod engine;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use model::{AssetKind, NamingRequest, NamingVerdict};
pub use rules::{Rule, is_pascal_case, suggest, to_pascal_case, validate};
