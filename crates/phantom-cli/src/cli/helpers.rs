use super::CliError;
use super::commands::PhantomArgs;
use anyhow::Context;
use phantom_core::config::{SimulationConfig, load_simulation_config};
use phantom_core::domain::{SampleDomain, SimuError};
use phantom_core::multind::{ComplexArray, calc_size};
use phantom_core::simu::{Preset, SensitivityModel};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file (if any) overlaid with the flags given on the command line.
pub(super) fn resolve_config(args: &PhantomArgs) -> Result<SimulationConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => load_simulation_config(path).map_err(SimuError::from)?,
        None => SimulationConfig::default(),
    };

    if let Some(size) = args.size {
        config.size = size;
    }
    if let Some(coils) = args.coils {
        config.coils = coils;
    }
    if let Some(shape) = args.shape {
        config.preset = shape.into();
    }
    if args.sens {
        config.preset = Preset::Sensitivity;
    }
    if args.kspace {
        config.domain = SampleDomain::KSpace;
    }
    if let Some(trajectory) = &args.traj {
        config.trajectory = Some(trajectory.clone());
        config.domain = SampleDomain::KSpace;
    }

    config.validate()?;
    Ok(config)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RunReport {
    preset: Preset,
    domain: SampleDomain,
    sensitivity: &'static str,
    dims: Vec<usize>,
    samples: usize,
    max_magnitude: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    trajectory: Option<PathBuf>,
    output: PathBuf,
}

impl RunReport {
    pub(super) fn new(config: &SimulationConfig, array: &ComplexArray, output: &Path) -> Self {
        let model = match config.preset {
            Preset::Sensitivity => SensitivityModel::ObjectModulation,
            _ => SensitivityModel::select(config.coils, config.domain),
        };
        let rank = array
            .dims()
            .iter()
            .rposition(|extent| *extent > 1)
            .map_or(1, |axis| axis + 1);

        Self {
            preset: config.preset,
            domain: config.domain,
            sensitivity: model.as_str(),
            dims: array.dims()[..rank].to_vec(),
            samples: calc_size(array.dims()),
            max_magnitude: array
                .data()
                .iter()
                .map(|sample| sample.norm())
                .fold(0.0, f32::max),
            trajectory: config.trajectory.clone(),
            output: output.to_path_buf(),
        }
    }
}

pub(super) fn write_report(path: &Path, report: &RunReport) -> Result<(), CliError> {
    let rendered =
        serde_json::to_string_pretty(report).context("failed to serialize run report")?;
    fs::write(path, rendered)
        .with_context(|| format!("failed to write run report '{}'", path.display()))?;
    Ok(())
}
