//! # Twine Mixture HX
//!
//! Mixture-aware heat exchanger models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Two streams exchange heat in one of five flow-contact topologies. Each
//! stream is a mixture of components that may boil or condense between its
//! inlet and outlet. Given whatever subset of temperatures, flow rates and
//! heat duty is known, the models derive the missing duty or hot outlet
//! temperature, an aggregate heat transfer coefficient, and the entropy
//! production.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module and moves to
//! [`support`] once it is useful across models or outside this crate.

pub mod models;
pub mod support;
