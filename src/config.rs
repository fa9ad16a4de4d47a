//! Parameter files and initial temperature samples.
//!
//! A parameter file is a JSON object using the short keys below. Unknown
//! keys are ignored.
//!
//! | key         | meaning                          | unit      |
//! |-------------|----------------------------------|-----------|
//! | `R_1`       | inner radius                     | m         |
//! | `R_2`       | outer radius                     | m         |
//! | `Deltat`    | total simulated time             | s         |
//! | `dtime_int` | number of time steps             |           |
//! | `ro`        | density                          | kg/m³     |
//! | `C_ro`      | specific heat                    | J/(kg·K)  |
//! | `lambda`    | thermal conductivity             | W/(m·K)   |
//! | `n`         | number of cells                  |           |
//! | `alpha_1`   | inner heat transfer coefficient  | W/(m²·K)  |
//! | `alpha_2`   | outer heat transfer coefficient  | W/(m²·K)  |
//! | `T_1`       | inner ambient temperature        | see below |
//! | `T_2`       | outer ambient temperature        | see below |
//!
//! Initial samples are the first line of a delimited text file.
//!
//! Temperatures are passed to the model unchanged, as kelvin. Conduction
//! and convection depend only on temperature differences, so a file written
//! in degrees Celsius yields a profile in degrees Celsius, and the ambient
//! values come back exactly as written.

use std::{
    fs,
    num::ParseFloatError,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
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

use crate::models::thermal::pipe_wall::{
    Convection, Discretization, Geometry, Material, Parameters,
};

/// Errors that can occur while reading parameters or samples.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The parameter file is not a valid JSON parameter object.
    #[error("malformed parameter file")]
    Json(#[from] serde_json::Error),

    /// A count parameter is negative.
    #[error("`{key}` must not be negative, got {value}")]
    NegativeCount { key: &'static str, value: i64 },

    /// A sample field is not a number.
    #[error("sample {index} is not a number: {text:?}")]
    InvalidSample {
        /// Zero-based position of the field on the line.
        index: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    /// The sample file has no lines.
    #[error("no samples in {}", path.display())]
    MissingSamples { path: PathBuf },
}

/// Raw contents of a parameter file.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ParameterFile {
    #[serde(rename = "R_1")]
    pub inner_radius: f64,

    #[serde(rename = "R_2")]
    pub outer_radius: f64,

    #[serde(rename = "Deltat")]
    pub duration: f64,

    #[serde(rename = "dtime_int")]
    pub steps: i64,

    #[serde(rename = "ro")]
    pub density: f64,

    #[serde(rename = "C_ro")]
    pub specific_heat: f64,

    #[serde(rename = "lambda")]
    pub conductivity: f64,

    #[serde(rename = "n")]
    pub cells: i64,

    #[serde(rename = "alpha_1")]
    pub inner_coefficient: f64,

    #[serde(rename = "alpha_2")]
    pub outer_coefficient: f64,

    #[serde(rename = "T_1")]
    pub inner_ambient: f64,

    #[serde(rename = "T_2")]
    pub outer_ambient: f64,
}

impl ParameterFile {
    /// Parses a parameter file from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the text is not a JSON object
    /// holding every key with a value of the right type.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a parameter file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Json`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json(&read(path.as_ref())?)
    }

    /// Converts to typed model parameters.
    ///
    /// Physical ranges are checked later, when the model is built.
    /// Temperatures are taken as kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NegativeCount`] if `n` or `dtime_int` is
    /// negative.
    pub fn to_parameters(&self) -> Result<Parameters, ConfigError> {
        Ok(Parameters {
            geometry: Geometry {
                inner_radius: Length::new::<meter>(self.inner_radius),
                outer_radius: Length::new::<meter>(self.outer_radius),
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
                HeatTransfer::new::<watt_per_square_meter_kelvin>(self.inner_coefficient),
                ThermodynamicTemperature::new::<kelvin>(self.inner_ambient),
            ),
            outer: Convection::new(
                HeatTransfer::new::<watt_per_square_meter_kelvin>(self.outer_coefficient),
                ThermodynamicTemperature::new::<kelvin>(self.outer_ambient),
            ),
            discretization: Discretization {
                cells: count("n", self.cells)?,
                duration: Time::new::<second>(self.duration),
                steps: count("dtime_int", self.steps)?,
            },
        })
    }
}

fn count(key: &'static str, value: i64) -> Result<usize, ConfigError> {
    usize::try_from(value).map_err(|_| ConfigError::NegativeCount { key, value })
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses one delimited line of temperatures.
///
/// Fields are trimmed before parsing. A blank line holds no samples.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSample`] for the first field that is not a
/// number.
pub fn parse_samples(line: &str, delimiter: char) -> Result<Vec<f64>, ConfigError> {
    if line.trim().is_empty() {
        return Ok(Vec::new());
    }

    line.split(delimiter)
        .enumerate()
        .map(|(index, field)| {
            let text = field.trim();
            text.parse().map_err(|source| ConfigError::InvalidSample {
                index,
                text: text.to_owned(),
                source,
            })
        })
        .collect()
}

/// Reads the samples on the first line of a file.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read,
/// [`ConfigError::MissingSamples`] if it is empty, or
/// [`ConfigError::InvalidSample`] if a field is not a number.
pub fn read_samples(path: impl AsRef<Path>, delimiter: char) -> Result<Vec<f64>, ConfigError> {
    let path = path.as_ref();
    let text = read(path)?;

    let line = text.lines().next().ok_or_else(|| ConfigError::MissingSamples {
        path: path.to_path_buf(),
    })?;
    parse_samples(line, delimiter)
}

/// Converts sample values to model temperatures, taking them as kelvin.
#[must_use]
pub fn temperatures(samples: &[f64]) -> Vec<ThermodynamicTemperature> {
    samples
        .iter()
        .map(|&t| ThermodynamicTemperature::new::<kelvin>(t))
        .collect()
}

/// Joins a profile into one delimited line.
///
/// Values print in the scale they were read in, using the shortest form
/// that reads back exactly. Whole numbers keep a decimal point (`20.0`).
#[must_use]
pub fn format_profile(profile: &[ThermodynamicTemperature], delimiter: char) -> String {
    profile
        .iter()
        .map(|t| format!("{:?}", t.get::<kelvin>()))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string())
}
