//! Fixed coefficients and flux laws of the discretized shell.

use std::f64::consts::TAU;

use uom::si::{
    f64::{HeatTransfer, Length, TemperatureInterval, ThermodynamicTemperature, Time},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    temperature_interval::kelvin as delta_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    time::second,
};

use crate::support::{
    constraint::{NonNegative, StrictlyPositive},
    units::{HeatCapacityPerLength, PowerPerLength},
};

use super::{BehaviorError, Parameters};

/// Geometry, material and boundary constants shared by every [`State`](super::State).
///
/// All flux methods work per unit tube length in SI base units: radii in m,
/// temperatures in K, powers in W/m. Cell `i` spans radii
/// `[r1 + i·dr, r1 + (i + 1)·dr)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Behavior {
    pub(super) cells: usize,
    pub(super) rad1: f64,
    pub(super) rad2: f64,
    pub(super) dr: f64,
    pub(super) dt: f64,
    pub(super) conductivity: f64,
    pub(super) alpha1: f64,
    pub(super) alpha2: f64,
    pub(super) t1: f64,
    pub(super) t2: f64,

    /// Heat capacity of cell 0, the reference for [`Behavior::capacity_ratio`].
    heat_capacity: HeatCapacityPerLength,
}

impl Behavior {
    /// Validates parameters and derives the discretization constants.
    ///
    /// The time step is `duration / steps`, or zero when `steps` is zero.
    ///
    /// # Errors
    ///
    /// Returns a [`BehaviorError`] if the cell count is zero, the radii are
    /// inverted, or a material or boundary parameter is out of range.
    pub fn new(params: &Parameters) -> Result<Self, BehaviorError> {
        let Parameters {
            geometry,
            material,
            inner,
            outer,
            discretization,
        } = *params;

        let cells = StrictlyPositive::new(discretization.cells)
            .map_err(|_| BehaviorError::InvalidCellCount {
                cells: discretization.cells,
            })?
            .into_inner();

        let inner_radius = NonNegative::new(geometry.inner_radius)
            .map_err(BehaviorError::parameter("inner radius"))?
            .into_inner();
        let outer_radius = geometry.outer_radius;
        if !(outer_radius > inner_radius) {
            return Err(BehaviorError::InvertedRadii);
        }

        let density = StrictlyPositive::new(material.density)
            .map_err(BehaviorError::parameter("density"))?
            .into_inner();
        let specific_heat = StrictlyPositive::new(material.specific_heat)
            .map_err(BehaviorError::parameter("specific heat"))?
            .into_inner();
        let conductivity = NonNegative::new(material.conductivity)
            .map_err(BehaviorError::parameter("thermal conductivity"))?
            .into_inner();
        let alpha1 = NonNegative::new(inner.coefficient)
            .map_err(BehaviorError::parameter("inner heat transfer coefficient"))?
            .into_inner();
        let alpha2 = NonNegative::new(outer.coefficient)
            .map_err(BehaviorError::parameter("outer heat transfer coefficient"))?
            .into_inner();
        let duration = NonNegative::new(discretization.duration)
            .map_err(BehaviorError::parameter("duration"))?
            .into_inner();

        #[allow(clippy::cast_precision_loss)]
        let cell_width = (outer_radius - inner_radius) / cells as f64;
        let mean_radius = inner_radius + cell_width / 2.0;
        let heat_capacity: HeatCapacityPerLength =
            cell_width * mean_radius * TAU * density * specific_heat;

        #[allow(clippy::cast_precision_loss)]
        let dt = if discretization.steps == 0 {
            0.0
        } else {
            duration.get::<second>() / discretization.steps as f64
        };

        Ok(Self {
            cells,
            rad1: inner_radius.get::<meter>(),
            rad2: outer_radius.get::<meter>(),
            dr: cell_width.get::<meter>(),
            dt,
            conductivity: conductivity.get::<watt_per_meter_kelvin>(),
            alpha1: alpha1.get::<watt_per_square_meter_kelvin>(),
            alpha2: alpha2.get::<watt_per_square_meter_kelvin>(),
            t1: inner.ambient.get::<kelvin>(),
            t2: outer.ambient.get::<kelvin>(),
            heat_capacity,
        })
    }

    /// Number of cells.
    #[must_use]
    pub fn cells(&self) -> usize {
        self.cells
    }

    #[must_use]
    pub fn inner_radius(&self) -> Length {
        Length::new::<meter>(self.rad1)
    }

    #[must_use]
    pub fn outer_radius(&self) -> Length {
        Length::new::<meter>(self.rad2)
    }

    /// Radial thickness of every cell.
    #[must_use]
    pub fn cell_width(&self) -> Length {
        Length::new::<meter>(self.dr)
    }

    /// Duration of one explicit step.
    #[must_use]
    pub fn time_step(&self) -> Time {
        Time::new::<second>(self.dt)
    }

    #[must_use]
    pub fn inner_ambient(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.t1)
    }

    #[must_use]
    pub fn outer_ambient(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(self.t2)
    }

    /// Heat capacity of cell 0 per unit tube length.
    #[must_use]
    pub fn reference_heat_capacity(&self) -> HeatCapacityPerLength {
        self.heat_capacity
    }

    /// Power entering cell 0 from the inner ambient, W/m.
    #[must_use]
    pub fn inner_boundary_power(&self, t0: f64) -> f64 {
        newton_power(self.alpha1, self.t1, t0, self.rad1)
    }

    /// Power leaving the last cell to the outer ambient, W/m.
    #[must_use]
    pub fn outer_boundary_power(&self, t_last: f64) -> f64 {
        newton_power(self.alpha2, t_last, self.t2, self.rad2)
    }

    /// Circumference of the interface between cells `i` and `i + 1`, m.
    #[must_use]
    pub fn interface_circumference(&self, i: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let fraction = (i + 1) as f64 / self.cells as f64;
        TAU * (self.rad1 + (self.rad2 - self.rad1) * fraction)
    }

    /// Conductive power across the interface between cells `i` and `i + 1`,
    /// W/m.
    ///
    /// Proportional to `t_next - t_i`. [`State::step`](super::State::step)
    /// books it as leaving cell `i` and entering cell `i + 1`.
    #[must_use]
    pub fn interface_power(&self, i: usize, t_i: f64, t_next: f64) -> f64 {
        (t_next - t_i) * self.interface_circumference(i) * self.conductivity / self.dr
    }

    /// Net power absorbed through both faces with the edge cells at
    /// `t_first` and `t_last` (K).
    #[must_use]
    pub fn absorbed_power(&self, t_first: f64, t_last: f64) -> PowerPerLength {
        let inner: PowerPerLength = HeatTransfer::new::<watt_per_square_meter_kelvin>(self.alpha1)
            * Length::new::<meter>(TAU * self.rad1)
            * TemperatureInterval::new::<delta_kelvin>(self.t1 - t_first);
        let outer: PowerPerLength = HeatTransfer::new::<watt_per_square_meter_kelvin>(self.alpha2)
            * Length::new::<meter>(TAU * self.rad2)
            * TemperatureInterval::new::<delta_kelvin>(t_last - self.t2);

        inner - outer
    }

    /// Heat capacity of cell `i` relative to cell 0.
    ///
    /// A shell's volume per unit length grows with its mean radius, so this
    /// is the ratio of the two mean radii.
    #[must_use]
    pub fn capacity_ratio(&self, i: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let mean = self.rad1 + self.dr * (0.5 + i as f64);
        mean / (self.rad1 + self.dr / 2.0)
    }

    /// Temperature change of cell `i` over one step, K.
    ///
    /// `p_in` enters through the inner face of the cell and `p_out` leaves
    /// through the outer face.
    #[must_use]
    pub fn temperature_change(&self, i: usize, p_in: f64, p_out: f64) -> f64 {
        (p_in - p_out) * self.dt / (self.heat_capacity.value * self.capacity_ratio(i))
    }
}

/// Newton's law of cooling per unit tube length.
fn newton_power(alpha: f64, t_from: f64, t_to: f64, radius: f64) -> f64 {
    alpha * (t_from - t_to) * TAU * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::PI;

    use approx::assert_relative_eq;

    use crate::models::thermal::pipe_wall::core::test_support::RawParameters;

    #[test]
    fn rejects_zero_cells() {
        let params = RawParameters {
            cells: 0,
            ..RawParameters::default()
        };
        assert_eq!(
            Behavior::new(&params.build()),
            Err(BehaviorError::InvalidCellCount { cells: 0 })
        );
    }

    #[test]
    fn accepts_any_positive_cell_count() {
        for cells in [1, 2, 7, 100, 10_000] {
            let params = RawParameters {
                cells,
                ..RawParameters::default()
            };
            let behavior = Behavior::new(&params.build()).expect("valid parameters");
            assert_eq!(behavior.cells(), cells);
        }
    }

    #[test]
    fn rejects_non_physical_parameters() {
        let inverted = RawParameters {
            rad1: 2.0,
            rad2: 1.0,
            ..RawParameters::default()
        };
        assert_eq!(
            Behavior::new(&inverted.build()),
            Err(BehaviorError::InvertedRadii)
        );

        let zero_density = RawParameters {
            density: 0.0,
            ..RawParameters::default()
        };
        assert!(matches!(
            Behavior::new(&zero_density.build()),
            Err(BehaviorError::InvalidParameter {
                name: "density",
                ..
            })
        ));

        let negative_alpha = RawParameters {
            alpha2: -1.0,
            ..RawParameters::default()
        };
        assert!(matches!(
            Behavior::new(&negative_alpha.build()),
            Err(BehaviorError::InvalidParameter {
                name: "outer heat transfer coefficient",
                ..
            })
        ));
    }

    #[test]
    fn derived_constants() {
        let params = RawParameters {
            rad1: 1.0,
            rad2: 2.0,
            cells: 4,
            duration: 10.0,
            steps: 40,
            density: 2.0,
            specific_heat: 3.0,
            ..RawParameters::default()
        };
        let behavior = Behavior::new(&params.build()).unwrap();

        assert_relative_eq!(behavior.cell_width().get::<meter>(), 0.25);
        assert_relative_eq!(behavior.time_step().get::<second>(), 0.25);

        // ρ·c·dr·2π·(r1 + dr/2)
        assert_relative_eq!(
            behavior.reference_heat_capacity().value,
            2.0 * 3.0 * 0.25 * 2.0 * PI * 1.125
        );
    }

    #[test]
    fn zero_steps_give_zero_time_step() {
        let params = RawParameters {
            steps: 0,
            ..RawParameters::default()
        };
        let behavior = Behavior::new(&params.build()).unwrap();
        assert_eq!(behavior.time_step().get::<second>(), 0.0);
    }

    #[test]
    fn boundary_powers_follow_newton() {
        let params = RawParameters {
            rad1: 1.0,
            rad2: 2.0,
            alpha1: 3.0,
            alpha2: 5.0,
            t1: 400.0,
            t2: 300.0,
            ..RawParameters::default()
        };
        let behavior = Behavior::new(&params.build()).unwrap();

        // Hotter inside: heat flows into cell 0.
        assert_relative_eq!(
            behavior.inner_boundary_power(350.0),
            3.0 * 50.0 * 2.0 * PI * 1.0
        );
        // Warmer than the outside: heat flows out of the last cell.
        assert_relative_eq!(
            behavior.outer_boundary_power(350.0),
            5.0 * 50.0 * 2.0 * PI * 2.0
        );
    }

    #[test]
    fn interfaces_widen_outward() {
        let params = RawParameters {
            rad1: 1.0,
            rad2: 2.0,
            cells: 4,
            conductivity: 2.0,
            ..RawParameters::default()
        };
        let behavior = Behavior::new(&params.build()).unwrap();

        assert_relative_eq!(behavior.interface_circumference(0), 2.0 * PI * 1.25);
        assert_relative_eq!(behavior.interface_circumference(2), 2.0 * PI * 1.75);
        // The last index lands on the outer face.
        assert_relative_eq!(behavior.interface_circumference(3), 2.0 * PI * 2.0);

        let power = behavior.interface_power(1, 300.0, 310.0);
        assert_relative_eq!(power, 10.0 * 2.0 * PI * 1.5 * 2.0 / 0.25, max_relative = 1e-12);
        assert_relative_eq!(behavior.interface_power(1, 310.0, 300.0), -power);
    }

    #[test]
    fn interface_power_follows_next_minus_current() {
        let params = RawParameters {
            rad1: 1.0,
            rad2: 2.0,
            cells: 2,
            conductivity: 1.0,
            ..RawParameters::default()
        };
        let behavior = Behavior::new(&params.build()).unwrap();

        // (T[i+1] - T[i]) · S(0) · λ / dr with S(0) = 2π·1.5 and dr = 0.5.
        assert_relative_eq!(
            behavior.interface_power(0, 300.0, 310.0),
            (310.0 - 300.0) * 2.0 * PI * 1.5 * 1.0 / 0.5,
            max_relative = 1e-12
        );
        assert!(behavior.interface_power(0, 310.0, 300.0) < 0.0);
        assert_eq!(behavior.interface_power(0, 305.0, 305.0), 0.0);
    }

    #[test]
    fn absorbed_power_matches_boundary_powers() {
        let params = RawParameters {
            rad1: 1.0,
            rad2: 2.0,
            alpha1: 3.0,
            alpha2: 5.0,
            t1: 400.0,
            t2: 300.0,
            ..RawParameters::default()
        };
        let behavior = Behavior::new(&params.build()).unwrap();

        let absorbed = behavior.absorbed_power(350.0, 320.0);
        assert_relative_eq!(
            absorbed.value,
            behavior.inner_boundary_power(350.0) - behavior.outer_boundary_power(320.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            absorbed.value,
            3.0 * 50.0 * 2.0 * PI - 5.0 * 20.0 * 4.0 * PI,
            max_relative = 1e-12
        );
    }

    #[test]
    fn capacity_ratio_tracks_mean_radius() {
        let params = RawParameters {
            rad1: 1.0,
            rad2: 2.0,
            cells: 2,
            ..RawParameters::default()
        };
        let behavior = Behavior::new(&params.build()).unwrap();

        assert_relative_eq!(behavior.capacity_ratio(0), 1.0);
        assert_relative_eq!(behavior.capacity_ratio(1), 1.75 / 1.25);
    }

    #[test]
    fn temperature_change_scales_with_capacity() {
        let params = RawParameters {
            rad1: 1.0,
            rad2: 2.0,
            cells: 2,
            duration: 2.0,
            steps: 1,
            ..RawParameters::default()
        };
        let behavior = Behavior::new(&params.build()).unwrap();
        let c0 = behavior.reference_heat_capacity().value;

        assert_relative_eq!(behavior.temperature_change(0, 10.0, 4.0), 6.0 * 2.0 / c0);
        assert_relative_eq!(
            behavior.temperature_change(1, 10.0, 4.0),
            6.0 * 2.0 / (c0 * 1.75 / 1.25)
        );
        assert_relative_eq!(behavior.temperature_change(1, 4.0, 4.0), 0.0);
    }
}
