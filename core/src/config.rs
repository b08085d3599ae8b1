use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use na::Vector3;
use serde::{Deserialize, Serialize};
use crate::Parameters;

/// Initial state of the system as it appears in the configuration file.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InitialConditions {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl InitialConditions {
    pub fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }
}

/// Step algorithm identifier as it appears in the configuration file.
///
/// An unknown identifier or a non-string value fails deserialization,
/// so the solver never sees an unvalidated method name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Method {
    /// Dormand-Prince 5(4) embedded pair
    #[serde(rename = "RK45")]
    Rk45,
    /// Bogacki-Shampine 3(2) embedded pair
    #[serde(rename = "RK23")]
    Rk23,
}

impl Default for Method {
    fn default() -> Self {
        Method::Rk45
    }
}

/// Integration options.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntegrationOptions {
    /// end time; integration always starts at t = 0
    pub t_final: f64,
    /// step algorithm, "RK45" unless stated otherwise
    #[serde(default)]
    pub method: Method,
    /// request a continuous interpolant instead of raw accepted steps
    #[serde(default)]
    pub dense_output: bool,
    /// number of evenly spaced samples to extract from the interpolant;
    /// required when `dense_output` is set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<usize>,
}

/// Full simulation configuration.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub initial_conditions: InitialConditions,
    pub parameters: Parameters,
    pub integration: IntegrationOptions,
}

#[derive(Debug)]
pub enum ConfigError {
    CantOpen(std::io::Error),
    CantCreate(std::io::Error),
    CantRead(serde_json::Error),
    CantWrite(serde_json::Error),
    NonPositiveFinalTime(f64),
    MissingPoints,
    ZeroPoints,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CantOpen(e) => write!(f, "can't open configuration file: {}", e),
            Self::CantCreate(e) => write!(f, "can't create configuration file: {}", e),
            Self::CantRead(e) => write!(f, "configuration file is not valid: {}", e),
            Self::CantWrite(e) => write!(f, "can't write configuration file: {}", e),
            Self::NonPositiveFinalTime(t) => {
                write!(f, "integration.t_final must be a positive finite number, got {}", t)
            }
            Self::MissingPoints => {
                write!(f, "integration.points is required when dense_output is set")
            }
            Self::ZeroPoints => write!(f, "integration.points must be at least 1"),
        }
    }
}

impl Config {
    /// Load and validate a configuration.
    ///
    /// All schema and range checks happen here, once; downstream code
    /// works with the typed value only.
    pub fn load_from_file(path: &Path) -> Result<Config, ConfigError> {
        let file = File::open(path).map_err(ConfigError::CantOpen)?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::de::from_reader(reader).map_err(ConfigError::CantRead)?;
        config.validate()?;
        log::debug!("configuration loaded from {:?}", path);
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let file = if !path.exists() {
            File::create(path)
        } else {
            OpenOptions::new().truncate(true).write(true).open(path)
        };
        let file = file.map_err(ConfigError::CantCreate)?;
        let writer = BufWriter::new(file);
        serde_json::ser::to_writer_pretty(writer, self).map_err(ConfigError::CantWrite)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let integration = &self.integration;
        if !integration.t_final.is_finite() || integration.t_final <= 0.0 {
            return Err(ConfigError::NonPositiveFinalTime(integration.t_final));
        }
        if integration.dense_output {
            match integration.points {
                None => return Err(ConfigError::MissingPoints),
                Some(0) => return Err(ConfigError::ZeroPoints),
                Some(_) => {}
            }
        }
        Ok(())
    }
}
