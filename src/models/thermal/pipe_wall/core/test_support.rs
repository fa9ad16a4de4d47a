use uom::si::{
    f64::{
        HeatTransfer, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature, Time,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    time::second,
};

use super::{Convection, Discretization, Geometry, Material, Parameters};

/// Plain SI numbers for building [`Parameters`] in tests.
///
/// Temperatures are kelvin.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawParameters {
    pub(crate) rad1: f64,
    pub(crate) rad2: f64,
    pub(crate) duration: f64,
    pub(crate) steps: usize,
    pub(crate) density: f64,
    pub(crate) specific_heat: f64,
    pub(crate) conductivity: f64,
    pub(crate) cells: usize,
    pub(crate) alpha1: f64,
    pub(crate) alpha2: f64,
    pub(crate) t1: f64,
    pub(crate) t2: f64,
}

impl Default for RawParameters {
    /// A thin steel pipe carrying hot water through still air.
    fn default() -> Self {
        Self {
            rad1: 0.05,
            rad2: 0.06,
            duration: 1.0,
            steps: 10,
            density: 7850.0,
            specific_heat: 490.0,
            conductivity: 45.0,
            cells: 5,
            alpha1: 500.0,
            alpha2: 10.0,
            t1: 360.0,
            t2: 290.0,
        }
    }
}

impl RawParameters {
    pub(crate) fn build(&self) -> Parameters {
        Parameters {
            geometry: Geometry {
                inner_radius: Length::new::<meter>(self.rad1),
                outer_radius: Length::new::<meter>(self.rad2),
            },
            material: Material {
                density: MassDensity::new::<kilogram_per_cubic_meter>(self.density),
                specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(
                    self.specific_heat,
                ),
                conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                    self.conductivity,
                ),
            },
            inner: Convection::new(
                HeatTransfer::new::<watt_per_square_meter_kelvin>(self.alpha1),
                ThermodynamicTemperature::new::<kelvin>(self.t1),
            ),
            outer: Convection::new(
                HeatTransfer::new::<watt_per_square_meter_kelvin>(self.alpha2),
                ThermodynamicTemperature::new::<kelvin>(self.t2),
            ),
            discretization: Discretization {
                cells: self.cells,
                duration: Time::new::<second>(self.duration),
                steps: self.steps,
            },
        }
    }
}

/// Node temperatures in kelvin as typed values.
pub(crate) fn temperatures(kelvins: &[f64]) -> Vec<ThermodynamicTemperature> {
    kelvins
        .iter()
        .map(|&t| ThermodynamicTemperature::new::<kelvin>(t))
        .collect()
}
