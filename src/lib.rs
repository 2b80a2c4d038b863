//! # Ductulator Models
//!
//! Airflow performance models for HVAC duct design, built for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! Given a volumetric flow rate and a round or rectangular duct, the models
//! in this crate compute flow area, velocity, velocity pressure, Reynolds
//! number, Darcy friction factor, and pressure drop per 100 ft of straight
//! duct, the same numbers a "ductulator" slide rule gives.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use ductulator_models::models::airflow::duct::{AirProperties, DuctGeometry, compute};
//! use ductulator_models::support::constraint::StrictlyPositive;
//! use uom::si::{f64::{Length, VolumeRate}, length::inch, volume_rate::cubic_foot_per_minute};
//!
//! let duct = DuctGeometry::round(Length::new::<inch>(12.0)).unwrap();
//! let cfm = StrictlyPositive::new(VolumeRate::new::<cubic_foot_per_minute>(1000.0)).unwrap();
//!
//! let performance = compute(&duct, cfm, &AirProperties::default()).unwrap();
//! assert!(performance.friction.is_turbulent());
//! ```
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

#[macro_use]
extern crate uom;

pub mod models;
pub mod support;
