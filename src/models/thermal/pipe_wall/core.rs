//! Explicit finite-volume conduction through a cylindrical shell.
//!
//! The shell between the inner and outer radius is split into `n` annular
//! cells of equal width. Every face carries a power per unit tube length:
//! Newton's law of cooling at the two surfaces and a conduction term across
//! the `n - 1` interfaces. Each cell's temperature changes by the power
//! booked into it minus the power booked out of it, times the time step,
//! divided by its heat capacity, which grows with the cell's mean radius.
//! The time step is not checked for stability.

mod behavior;
mod error;
mod params;
mod state;
mod steady_state;

#[cfg(test)]
pub(crate) mod test_support;

pub use behavior::Behavior;
pub use error::{BehaviorError, RunError};
pub use params::{Convection, Discretization, Geometry, Material, Parameters};
pub use state::State;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::kelvin};

/// Runs a simulation from node temperatures to node temperatures.
///
/// `nodes` holds the `cells + 1` initial temperatures at the cell
/// boundaries, inner surface first, and is consumed in a single pass.
/// Cells start at the mean of their bounding nodes and are advanced
/// `discretization.steps` times. The result holds `cells + 1` values: the
/// inner ambient, the mean of each pair of adjacent cells, and the outer
/// ambient.
///
/// # Errors
///
/// Returns a [`RunError`] if the parameters are invalid or `nodes` does not
/// hold exactly `cells + 1` values.
pub fn run<I>(params: &Parameters, nodes: I) -> Result<Vec<ThermodynamicTemperature>, RunError>
where
    I: IntoIterator<Item = ThermodynamicTemperature>,
{
    let behavior = Behavior::new(params)?;

    let initial =
        State::from_node_temperatures(&behavior, nodes.into_iter().map(|t| t.get::<kelvin>()))?;
    let last = initial.advance(params.discretization.steps);

    Ok(last
        .node_temperatures()
        .into_iter()
        .map(|t| ThermodynamicTemperature::new::<kelvin>(t))
        .collect())
}
