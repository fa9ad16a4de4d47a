//! Transient conduction through a pipe wall.
//!
//! The wall is a cylindrical shell exchanging heat with a fluid on each face
//! by convection. [`PipeWall`] implements [`twine_core::Model`], mapping an
//! initial node temperature profile to the profile after the configured
//! duration. The computational core is in the internal `core` module.

mod core;

use twine_core::Model;
use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

pub use self::core::{
    Behavior, BehaviorError, Convection, Discretization, Geometry, Material, Parameters,
    RunError, State, run,
};

/// A pipe wall with validated parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeWall {
    params: Parameters,
    behavior: Behavior,
}

impl PipeWall {
    /// Creates a pipe wall model.
    ///
    /// # Errors
    ///
    /// Returns a [`BehaviorError`] if the parameters do not describe a
    /// valid shell.
    pub fn new(params: Parameters) -> Result<Self, BehaviorError> {
        let behavior = Behavior::new(&params)?;
        Ok(Self { params, behavior })
    }

    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.params
    }

    /// Returns the discretized coefficients of this wall.
    #[must_use]
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }
}

impl Model for PipeWall {
    /// Initial temperatures at the `cells + 1` nodes, inner surface first.
    type Input = Vec<ThermodynamicTemperature>;

    /// Temperatures at the `cells + 1` nodes after the last step.
    type Output = Vec<ThermodynamicTemperature>;

    type Error = RunError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let initial = State::from_node_temperatures(
            &self.behavior,
            input.iter().map(|t| t.get::<kelvin>()),
        )?;

        Ok(initial
            .advance(self.params.discretization.steps)
            .node_temperatures()
            .into_iter()
            .map(|t| ThermodynamicTemperature::new::<kelvin>(t))
            .collect())
    }
}
