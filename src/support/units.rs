//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., length, flow rate, pressure).
//! This module adds the customary HVAC units that duct sizing relies on but
//! that [`uom`] doesn't ship:
//!
//! - [`inch_of_water_column`]: pressure, the head of a 1 in column of water
//!   at 62.4 lbm/ft³ (the "inWC" of duct friction charts).
//! - [`pound_per_foot_hour`]: dynamic viscosity, lbm/(ft·h).
//!
//! ```
//! use ductulator_models::support::units::inch_of_water_column;
//! use uom::si::{f64::Pressure, pressure::pascal};
//!
//! let p = Pressure::new::<inch_of_water_column>(1.0);
//! assert!((p.get::<pascal>() - 248.98).abs() < 0.01);
//! ```

mod dynamic_viscosity;
mod pressure;

pub use dynamic_viscosity::pound_per_foot_hour;
pub use pressure::inch_of_water_column;
