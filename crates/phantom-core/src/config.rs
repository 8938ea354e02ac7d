//! Simulation request shared by the command line and JSON config files.

use crate::common::constants::{COIL_DIM, MAX_COILS, PHS1_DIM, PHS2_DIM, READ_DIM, TRAJ_COMPONENTS};
use crate::domain::{SampleDomain, SimuError, SimuResult};
use crate::multind::{Dims, checked_size, singleton_dims};
use crate::simu::Preset;
use num_complex::Complex32;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SIZE: usize = 128;
pub const DEFAULT_COILS: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    #[serde(default)]
    pub preset: Preset,
    #[serde(default)]
    pub domain: SampleDomain,
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_coils")]
    pub coils: usize,
    /// Trajectory file (cfl base name); switches to non-Cartesian sampling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trajectory: Option<PathBuf>,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

fn default_coils() -> usize {
    DEFAULT_COILS
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            preset: Preset::default(),
            domain: SampleDomain::default(),
            size: DEFAULT_SIZE,
            coils: DEFAULT_COILS,
            trajectory: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> SimuResult<()> {
        if self.size == 0 {
            return Err(SimuError::input_validation(
                "INPUT.SIZE",
                "grid size must be at least 1",
            ));
        }

        if self.coils == 0 || self.coils > MAX_COILS {
            return Err(SimuError::input_validation(
                "INPUT.COILS",
                format!(
                    "coil count must be between 1 and {MAX_COILS}, got {}",
                    self.coils
                ),
            ));
        }

        if !fits_in_memory(&self.cartesian_dims()) {
            return Err(SimuError::input_validation(
                "INPUT.SIZE",
                format!(
                    "a {size}x{size} grid with {} coils exceeds the addressable sample count",
                    self.coils,
                    size = self.size
                ),
            ));
        }

        if self.trajectory.is_some() && !self.domain.is_kspace() {
            return Err(SimuError::input_validation(
                "INPUT.TRAJECTORY_DOMAIN",
                "non-Cartesian sampling is only available in k-space",
            ));
        }

        if !self.preset.supports_kspace() && self.domain.is_kspace() {
            return Err(SimuError::input_validation(
                "INPUT.PRESET_DOMAIN",
                format!("preset '{}' is only defined in image domain", self.preset),
            ));
        }

        Ok(())
    }

    /// `[1, size, size, coils]` padded with singleton axes.
    pub fn cartesian_dims(&self) -> Dims {
        let mut dims = singleton_dims();
        dims[PHS1_DIM] = self.size;
        dims[PHS2_DIM] = self.size;
        dims[COIL_DIM] = self.coils;
        dims
    }

    /// Request shape for a trajectory shaped `[3, samples, lines]`.
    pub fn noncart_dims(&self, trajectory_dims: &Dims) -> Dims {
        let mut dims = singleton_dims();
        dims[READ_DIM] = TRAJ_COMPONENTS;
        dims[PHS1_DIM] = trajectory_dims[PHS1_DIM];
        dims[PHS2_DIM] = trajectory_dims[PHS2_DIM];
        dims[COIL_DIM] = self.coils;
        dims
    }
}

fn fits_in_memory(dims: &Dims) -> bool {
    checked_size(dims)
        .and_then(|samples| samples.checked_mul(size_of::<Complex32>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read simulation config '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse simulation config '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl From<ConfigError> for SimuError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::Read { .. } => SimuError::io_system("IO.CONFIG", error.to_string()),
            ConfigError::Parse { .. } => {
                SimuError::input_validation("INPUT.CONFIG", error.to_string())
            }
        }
    }
}

pub fn load_simulation_config(
    config_path: impl AsRef<Path>,
) -> Result<SimulationConfig, ConfigError> {
    let config_path = config_path.as_ref();
    let source = fs::read_to_string(config_path).map_err(|source| ConfigError::Read {
        path: config_path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&source).map_err(|source| ConfigError::Parse {
        path: config_path.to_path_buf(),
        source,
    })
}
