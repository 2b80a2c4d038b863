use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, ConstraintResult};

/// Marker for values greater than zero.
///
/// Duct dimensions, flow rates, densities, and viscosities all carry this
/// constraint.
///
/// # Examples
///
/// ```
/// use ductulator_models::support::constraint::StrictlyPositive;
///
/// assert_eq!(StrictlyPositive::new(12.0).unwrap().into_inner(), 12.0);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-8.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> ConstraintResult<Constrained<T, Self>> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Length, VolumeRate},
        length::inch,
        volume_rate::cubic_foot_per_minute,
    };

    #[test]
    fn duct_dimensions() {
        assert!(StrictlyPositive::new(Length::new::<inch>(0.5)).is_ok());
        assert_eq!(
            StrictlyPositive::new(Length::new::<inch>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            StrictlyPositive::new(Length::new::<inch>(-10.0)),
            Err(ConstraintError::Negative)
        );
    }

    #[test]
    fn flow_rates() {
        let q = VolumeRate::new::<cubic_foot_per_minute>(400.0);
        assert_eq!(*StrictlyPositive::new(q).unwrap().as_ref(), q);

        let nan = VolumeRate::new::<cubic_foot_per_minute>(f64::NAN);
        assert_eq!(StrictlyPositive::new(nan), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn infinity_passes() {
        // Finiteness is left to callers; see `ConstraintError::NotFinite`.
        assert!(StrictlyPositive::new(f64::INFINITY).is_ok());
    }
}
