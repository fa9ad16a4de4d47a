//! Input parameters for a pipe wall simulation.

use uom::si::f64::{
    HeatTransfer, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity,
    ThermodynamicTemperature, Time,
};

/// Everything needed to build a [`Behavior`](super::Behavior).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub geometry: Geometry,
    pub material: Material,

    /// Convective coupling at the inner face (`r = inner_radius`).
    pub inner: Convection,

    /// Convective coupling at the outer face (`r = outer_radius`).
    pub outer: Convection,

    pub discretization: Discretization,
}

/// Radial extent of the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// May be zero for a solid cylinder.
    pub inner_radius: Length,

    /// Must exceed `inner_radius`.
    pub outer_radius: Length,
}

/// Wall material properties, uniform across the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
    pub conductivity: ThermalConductivity,
}

/// Newton's law of cooling at one face of the shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convection {
    /// Heat transfer coefficient; zero insulates the face.
    pub coefficient: HeatTransfer,

    /// Temperature of the fluid on the far side of the film.
    pub ambient: ThermodynamicTemperature,
}

impl Convection {
    #[must_use]
    pub fn new(coefficient: HeatTransfer, ambient: ThermodynamicTemperature) -> Self {
        Self {
            coefficient,
            ambient,
        }
    }
}

/// Spatial and temporal resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Discretization {
    /// Number of annular cells between the faces.
    pub cells: usize,

    /// Total simulated time.
    pub duration: Time,

    /// Number of explicit steps covering `duration`.
    ///
    /// Zero is allowed and leaves the initial field untouched.
    pub steps: usize,
}
