//! Temperature field snapshots and the explicit transition between them.

use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    pairwise::adjacent_pairs,
    units::{EnergyPerLength, PowerPerLength},
};

use super::{Behavior, RunError};

/// Cell temperatures at one instant.
///
/// A state is never modified in place: [`State::step`] returns a new state
/// and leaves `self` valid, so earlier states can be kept for comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct State<'a> {
    time: usize,
    field: Vec<f64>,
    behavior: &'a Behavior,
}

impl<'a> State<'a> {
    /// Creates a state at step 0 from cell-centered temperatures in kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::SequenceLengthMismatch`] unless `field` holds
    /// exactly one value per cell.
    pub fn new(behavior: &'a Behavior, field: Vec<f64>) -> Result<Self, RunError> {
        if field.len() != behavior.cells() {
            return Err(RunError::SequenceLengthMismatch {
                expected: behavior.cells(),
                actual: field.len(),
            });
        }

        Ok(Self {
            time: 0,
            field,
            behavior,
        })
    }

    /// Creates a state at step 0 from node temperatures in kelvin.
    ///
    /// Each cell starts at the mean of its two bounding nodes. `nodes` is
    /// read once, so it may be a single-pass source such as a parser.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::SequenceLengthMismatch`] unless `nodes` yields
    /// exactly `cells + 1` values.
    pub fn from_node_temperatures<I>(behavior: &'a Behavior, nodes: I) -> Result<Self, RunError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut count = 0;
        let field: Vec<f64> = adjacent_pairs(nodes.into_iter().inspect(|_| count += 1))
            .map(|(a, b)| (a + b) / 2.0)
            .collect();

        if count != behavior.cells() + 1 {
            return Err(RunError::SequenceLengthMismatch {
                expected: behavior.cells() + 1,
                actual: count,
            });
        }

        Self::new(behavior, field)
    }

    /// Number of steps taken since the initial state.
    #[must_use]
    pub fn time(&self) -> usize {
        self.time
    }

    /// Cell temperatures in kelvin, innermost first.
    #[must_use]
    pub fn field(&self) -> &[f64] {
        &self.field
    }

    #[must_use]
    pub fn behavior(&self) -> &'a Behavior {
        self.behavior
    }

    /// Cell temperatures as typed values, innermost first.
    pub fn temperatures(&self) -> impl Iterator<Item = ThermodynamicTemperature> + '_ {
        self.field
            .iter()
            .map(|&t| ThermodynamicTemperature::new::<kelvin>(t))
    }

    /// Power booked through every face, W/m.
    ///
    /// Entry `0` enters cell 0 from the inner fluid and entry `cells` leaves
    /// the last cell to the outer fluid. Entry `i` in between is
    /// [`Behavior::interface_power`] for cells `i - 1` and `i`, taken out of
    /// cell `i - 1` and into cell `i`.
    #[must_use]
    pub fn powers(&self) -> Vec<f64> {
        let b = self.behavior;
        let t = &self.field;

        let mut powers = Vec::with_capacity(t.len() + 1);
        powers.push(b.inner_boundary_power(t[0]));
        powers.extend(
            t.windows(2)
                .enumerate()
                .map(|(i, pair)| b.interface_power(i, pair[0], pair[1])),
        );
        powers.push(b.outer_boundary_power(t[t.len() - 1]));
        powers
    }

    /// Advances one explicit Euler step.
    #[must_use]
    pub fn step(&self) -> State<'a> {
        let b = self.behavior;
        let powers = self.powers();

        let field = self
            .field
            .iter()
            .enumerate()
            .map(|(i, &t)| t + b.temperature_change(i, powers[i], powers[i + 1]))
            .collect();

        State {
            time: self.time + 1,
            field,
            behavior: b,
        }
    }

    /// Advances `steps` explicit Euler steps.
    #[must_use]
    pub fn advance(&self, steps: usize) -> State<'a> {
        let mut state = self.clone();
        for _ in 0..steps {
            state = state.step();
        }
        state
    }

    /// Node temperatures in kelvin, `cells + 1` values.
    ///
    /// The surfaces report the ambient temperatures; interior nodes are the
    /// mean of the two adjacent cells.
    #[must_use]
    pub fn node_temperatures(&self) -> Vec<f64> {
        let b = self.behavior;

        let mut nodes = Vec::with_capacity(self.field.len() + 1);
        nodes.push(b.inner_ambient().get::<kelvin>());
        nodes.extend(self.field.windows(2).map(|pair| (pair[0] + pair[1]) / 2.0));
        nodes.push(b.outer_ambient().get::<kelvin>());
        nodes
    }

    /// Heat stored in the shell per unit tube length, relative to 0 K.
    #[must_use]
    pub fn heat_content(&self) -> EnergyPerLength {
        let b = self.behavior;
        let weighted: f64 = self
            .field
            .iter()
            .enumerate()
            .map(|(i, &t)| t * b.capacity_ratio(i))
            .sum();

        b.reference_heat_capacity() * TemperatureInterval::new::<delta_kelvin>(weighted)
    }

    /// Power absorbed by the whole shell: inflow at the inner surface minus
    /// outflow at the outer surface.
    #[must_use]
    pub fn net_power(&self) -> PowerPerLength {
        let t = &self.field;
        self.behavior.absorbed_power(t[0], t[t.len() - 1])
    }
}
