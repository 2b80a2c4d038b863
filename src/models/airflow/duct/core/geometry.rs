use std::f64::consts::PI;

use uom::si::{
    area::square_foot,
    f64::{Area, Length},
    length::foot,
};

use crate::support::constraint::{Constrained, ConstraintError, ConstraintResult, StrictlyPositive};

use super::DuctError;

/// Cross-section of a straight duct run.
///
/// Every dimension is guaranteed to be strictly positive.
/// Prefer [`DuctGeometry::round`] and [`DuctGeometry::rectangular`], which
/// also reject infinite dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DuctGeometry {
    /// Circular duct.
    Round {
        /// Inside diameter.
        diameter: Constrained<Length, StrictlyPositive>,
    },

    /// Rectangular duct.
    Rectangular {
        /// Inside width.
        width: Constrained<Length, StrictlyPositive>,

        /// Inside height.
        height: Constrained<Length, StrictlyPositive>,
    },
}

/// Shape tag carried by a [`ResolvedGeometry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DuctShape {
    /// Circular cross-section.
    Round,

    /// Rectangular cross-section, reduced to an equivalent diameter.
    Rectangular,
}

/// Hydraulic parameters of a duct cross-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedGeometry {
    /// Shape of the duct that was resolved.
    pub shape: DuctShape,

    /// Characteristic diameter.
    ///
    /// The actual diameter of a round duct, or the equal-friction equivalent
    /// diameter of a rectangular one.
    pub diameter: Length,

    /// Flow area of a round duct with [`diameter`](Self::diameter).
    pub flow_area: Area,
}

impl DuctGeometry {
    /// Constructs a round duct.
    ///
    /// # Errors
    ///
    /// Returns an error if the diameter is not strictly positive and finite.
    pub fn round(diameter: Length) -> ConstraintResult<Self> {
        Ok(Self::Round {
            diameter: positive_finite(diameter)?,
        })
    }

    /// Constructs a rectangular duct.
    ///
    /// # Errors
    ///
    /// Returns an error if either side is not strictly positive and finite.
    pub fn rectangular(width: Length, height: Length) -> ConstraintResult<Self> {
        Ok(Self::Rectangular {
            width: positive_finite(width)?,
            height: positive_finite(height)?,
        })
    }

    /// Returns the shape of this duct.
    #[must_use]
    pub fn shape(&self) -> DuctShape {
        match self {
            Self::Round { .. } => DuctShape::Round,
            Self::Rectangular { .. } => DuctShape::Rectangular,
        }
    }

    /// Returns the characteristic diameter used for friction calculations.
    ///
    /// For a rectangular duct this is the ASHRAE equal-friction equivalent
    /// diameter, `1.3·(a·b)^0.625 / (a + b)^0.25`.
    #[must_use]
    pub fn equivalent_diameter(&self) -> Length {
        match self {
            Self::Round { diameter } => *diameter.as_ref(),
            Self::Rectangular { width, height } => {
                let a = width.as_ref().get::<foot>();
                let b = height.as_ref().get::<foot>();
                Length::new::<foot>(1.3 * (a * b).powf(0.625) / (a + b).powf(0.25))
            }
        }
    }

    /// Returns the flow area of a round duct with the characteristic diameter.
    #[must_use]
    pub fn flow_area(&self) -> Area {
        let d = self.equivalent_diameter().get::<foot>();
        Area::new::<square_foot>(PI / 4.0 * d * d)
    }

    /// Resolves this cross-section into its hydraulic parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DuctError::InvalidInput`] if a dimension is infinite and
    /// [`DuctError::DivisionByZero`] if the flow area underflows to zero.
    pub fn resolve(&self) -> Result<ResolvedGeometry, DuctError> {
        let diameter = self.equivalent_diameter();
        let flow_area = self.flow_area();

        if !diameter.is_finite() || !flow_area.is_finite() {
            return Err(DuctError::invalid("duct dimension", ConstraintError::NotFinite));
        }
        if flow_area.get::<square_foot>() == 0.0 {
            return Err(DuctError::DivisionByZero);
        }

        Ok(ResolvedGeometry {
            shape: self.shape(),
            diameter,
            flow_area,
        })
    }
}

/// Validates a duct dimension.
fn positive_finite(value: Length) -> ConstraintResult<Constrained<Length, StrictlyPositive>> {
    let value = StrictlyPositive::new(value)?;
    if value.as_ref().is_finite() {
        Ok(value)
    } else {
        Err(ConstraintError::NotFinite)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::inch;

    fn inches(value: f64) -> Length {
        Length::new::<inch>(value)
    }

    #[test]
    fn round_area_is_quarter_pi_d_squared() {
        for d_in in [4.0, 12.0, 17.5, 48.0] {
            let duct = DuctGeometry::round(inches(d_in)).unwrap();
            let d_ft = d_in / 12.0;

            assert_relative_eq!(
                duct.flow_area().get::<square_foot>(),
                PI / 4.0 * d_ft * d_ft,
                epsilon = 1e-9
            );
            assert_relative_eq!(duct.equivalent_diameter().get::<inch>(), d_in, epsilon = 1e-9);
        }
    }

    #[test]
    fn rectangular_equivalent_diameter_is_symmetric() {
        let wide = DuctGeometry::rectangular(inches(24.0), inches(10.0)).unwrap();
        let tall = DuctGeometry::rectangular(inches(10.0), inches(24.0)).unwrap();

        assert_relative_eq!(
            wide.equivalent_diameter().get::<inch>(),
            tall.equivalent_diameter().get::<inch>(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rectangular_matches_ashrae_table() {
        // ASHRAE tables list 12x8 as 10.7 in and a 10x10 square as 10.9 in.
        let duct = DuctGeometry::rectangular(inches(12.0), inches(8.0)).unwrap();
        assert_relative_eq!(duct.equivalent_diameter().get::<inch>(), 10.7, epsilon = 0.05);

        let square = DuctGeometry::rectangular(inches(10.0), inches(10.0)).unwrap();
        assert_relative_eq!(square.equivalent_diameter().get::<inch>(), 10.9, epsilon = 0.05);
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(DuctGeometry::round(inches(0.0)), Err(ConstraintError::Zero));
        assert_eq!(DuctGeometry::round(inches(-6.0)), Err(ConstraintError::Negative));
        assert_eq!(
            DuctGeometry::rectangular(inches(12.0), inches(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
        assert_eq!(
            DuctGeometry::rectangular(inches(f64::INFINITY), inches(8.0)),
            Err(ConstraintError::NotFinite)
        );
    }

    #[test]
    fn resolve_reports_shape_and_diameter() {
        let resolved = DuctGeometry::rectangular(inches(12.0), inches(8.0))
            .unwrap()
            .resolve()
            .unwrap();

        assert_eq!(resolved.shape, DuctShape::Rectangular);
        assert!(resolved.diameter > inches(8.0));
        assert!(resolved.flow_area.get::<square_foot>() > 0.0);
    }

    #[test]
    fn resolve_rejects_underflowing_area() {
        let duct = DuctGeometry::round(Length::new::<foot>(1e-200)).unwrap();
        assert!(matches!(duct.resolve(), Err(DuctError::DivisionByZero)));
    }
}
