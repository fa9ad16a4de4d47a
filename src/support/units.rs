//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for physical quantities at its public boundary.
//! A cylindrical shell is modeled per unit tube length, which yields a few
//! quantities [`uom`] has no names for. They are defined here.

use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, N3, P1, Z0},
};

/// Heat capacity per unit length, J/(m·K) in SI.
pub type HeatCapacityPerLength = Quantity<ISQ<P1, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Heat flow rate per unit length, W/m in SI.
pub type PowerPerLength = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Energy per unit length, J/m in SI.
pub type EnergyPerLength = Quantity<ISQ<P1, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
