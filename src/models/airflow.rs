//! Airflow models.
//!
//! This module contains models for air distribution systems, starting with
//! straight duct runs sized the way an HVAC ductulator sizes them.

pub mod duct;
