//! Numeric constraints checked once, at construction.
//!
//! Engine inputs arrive from forms that are often half filled in, so the
//! solver itself tolerates missing values. The *records* it consumes still
//! carry a few hard physical bounds, and those are enforced here:
//!
//! - [`NonNegative`]: mass rates, specific heats, latent heats
//! - [`StrictlyPositive`]: absolute threshold temperatures, capacitance rates
//! - [`UnitInterval`]: component shares, `0 ≤ x ≤ 1`
//!
//! Each marker is paired with the generic [`Constrained<T, C>`] wrapper.
//! Once built, a constrained value is read back with [`AsRef`] or
//! [`Constrained::into_inner`] and costs nothing at runtime.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitInterval;

/// A numeric bound that a [`Constrained`] value must satisfy.
pub trait Constraint<T> {
    /// Checks that `value` satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violated bound.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Result alias for fallible constrained construction.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value that is known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use twine_mixture_hx::support::constraint::{Constrained, UnitInterval};
///
/// let share = Constrained::<f64, UnitInterval>::new(0.4).unwrap();
/// assert_eq!(share.into_inner(), 0.4);
/// assert!(Constrained::<f64, UnitInterval>::new(1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
