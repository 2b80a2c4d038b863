use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker for values of zero or greater.
///
/// Used for wall roughness and relative roughness, where zero is a
/// hydraulically smooth surface.
///
/// # Examples
///
/// ```
/// use ductulator_models::support::constraint::NonNegative;
///
/// assert_eq!(NonNegative::new(0.0).unwrap().into_inner(), 0.0);
/// assert!(NonNegative::new(-1e-4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
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

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::foot};

    #[test]
    fn roughness() {
        assert!(NonNegative::new(Length::new::<foot>(0.0007)).is_ok());
        assert!(NonNegative::new(Length::new::<foot>(0.0)).is_ok());
        assert_eq!(
            NonNegative::new(Length::new::<foot>(-0.0007)),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn relative_roughness() {
        assert!(NonNegative::new(7.0e-4).is_ok());
        assert_eq!(NonNegative::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
