//! Supporting utilities used by the exchanger models.
//!
//! These modules are public because they are useful on their own (building
//! mixtures, looking up component properties, working with constrained
//! quantities), but their APIs are not yet stable.

pub mod constraint;
pub mod hx;
pub mod mixture;
pub mod units;
