use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that are zero or greater.
///
/// A stream with zero mass rate is allowed; it simply contributes no
/// capacitance rate.
///
/// ```
/// use twine_mixture_hx::support::constraint::NonNegative;
/// use uom::si::{f64::MassRate, mass_rate::kilogram_per_second};
///
/// assert!(NonNegative::new(MassRate::new::<kilogram_per_second>(0.0)).is_ok());
/// assert!(NonNegative::new(MassRate::new::<kilogram_per_second>(-0.1)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
