use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for fractions in the closed interval `0 ≤ x ≤ 1`.
///
/// Used for component shares. Whether the shares of a mixture add up to one
/// is a property of the whole mixture and is checked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs a [`Constrained<f64, UnitInterval>`].
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if `NaN`.
    pub fn new(value: f64) -> Result<Constrained<f64, UnitInterval>, ConstraintError> {
        Constrained::<f64, UnitInterval>::new(value)
    }
}

impl Constraint<f64> for UnitInterval {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&0.0), value.partial_cmp(&1.0)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
