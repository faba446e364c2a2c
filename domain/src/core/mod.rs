//! Core domain concepts shared across all subdomains.
//!
//! - [`ordered_set::OrderedSet`]: first-seen-order set used for aggregation

pub mod ordered_set;
