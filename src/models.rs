//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into domain-specific submodules (currently only
//! `thermal`). This organization may evolve as more models are added.
//!
//! # Model structure
//!
//! Each model lives in its own module and contains an internal `core` submodule
//! where the actual computation and domain logic lives. The `core` module is an
//! implementation detail and is **not** re-exported as part of the public API;
//! the types callers need are re-exported by the model module itself.
//!
//! The [`twine_core::Model`] implementation is a thin adapter that delegates to
//! the model-specific core API.

pub mod thermal;
