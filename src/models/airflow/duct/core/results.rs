//! Results type for duct performance calculations.

use super::{FlowState, FrictionResult, PressureDropResult, ResolvedGeometry};

/// Airflow performance of a straight duct run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DuctPerformance {
    /// Characteristic diameter and flow area.
    pub geometry: ResolvedGeometry,

    /// Flow rate, velocity, and velocity pressure.
    pub flow: FlowState,

    /// Reynolds number, regime, and Darcy friction factor.
    pub friction: FrictionResult,

    /// Frictional pressure loss.
    pub pressure_drop: PressureDropResult,
}
