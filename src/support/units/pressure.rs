unit! {
    system: uom::si;
    quantity: uom::si::pressure;

    /// Head of one inch of water at 62.4 lbm/ft³ under standard gravity.
    @inch_of_water_column: 62.4 * 4.448_222 / (3.048_E-1 * 3.048_E-1) / 12.0;
        "inWC", "inch of water column", "inches of water column";
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::Pressure,
        pressure::{pascal, pound_force_per_square_inch},
    };

    #[test]
    fn matches_five_point_two_psf() {
        // 62.4 lbf/ft³ over 1/12 ft is 5.2 lbf/ft², or 5.2/144 psi.
        let p = Pressure::new::<inch_of_water_column>(1.0);
        assert_relative_eq!(
            p.get::<pound_force_per_square_inch>(),
            5.2 / 144.0,
            max_relative = 1e-6
        );
    }

    #[test]
    fn round_trips_through_pascals() {
        let p = Pressure::new::<inch_of_water_column>(0.082);
        let back = Pressure::new::<pascal>(p.get::<pascal>());
        assert_relative_eq!(back.get::<inch_of_water_column>(), 0.082, epsilon = 1e-15);
    }
}
