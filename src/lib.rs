//! # Radial Conduction
//!
//! Transient radial heat conduction through a cylindrical shell, such as a
//! pipe wall, with convective heat transfer on both faces.
//!
//! The shell between the inner and outer radius is split into `n` concentric
//! annular cells. Cell temperatures are advanced with an explicit
//! finite-volume scheme whose areas and heat capacities scale with radius.
//!
//! ## Crate layout
//!
//! - [`models`]: The pipe wall model and its [`twine_core::Model`] adapter.
//! - [`support`]: Supporting utilities used by models.
//! - [`config`]: Parameter file and initial-condition parsing.
//!
//! ## Example
//!
//! ```
//! use radial_conduction::models::thermal::pipe_wall::{
//!     Convection, Discretization, Geometry, Material, Parameters, run,
//! };
//! use uom::si::{
//!     f64::{
//!         HeatTransfer, Length, MassDensity, SpecificHeatCapacity, ThermalConductivity,
//!         ThermodynamicTemperature, Time,
//!     },
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     length::meter,
//!     mass_density::kilogram_per_cubic_meter,
//!     specific_heat_capacity::joule_per_kilogram_kelvin,
//!     thermal_conductivity::watt_per_meter_kelvin,
//!     thermodynamic_temperature::kelvin,
//!     time::second,
//! };
//!
//! let ambient = ThermodynamicTemperature::new::<kelvin>(300.0);
//! let params = Parameters {
//!     geometry: Geometry {
//!         inner_radius: Length::new::<meter>(0.05),
//!         outer_radius: Length::new::<meter>(0.06),
//!     },
//!     material: Material {
//!         density: MassDensity::new::<kilogram_per_cubic_meter>(7800.0),
//!         specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(460.0),
//!         conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(45.0),
//!     },
//!     inner: Convection::new(HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0), ambient),
//!     outer: Convection::new(HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0), ambient),
//!     discretization: Discretization {
//!         cells: 4,
//!         duration: Time::new::<second>(10.0),
//!         steps: 100,
//!     },
//! };
//!
//! let profile = run(&params, vec![ambient; 5]).unwrap();
//! assert_eq!(profile.len(), 5);
//! ```

pub mod config;
pub mod models;
pub mod support;
