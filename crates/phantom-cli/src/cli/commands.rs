use super::CliError;
use super::helpers::{RunReport, resolve_config, write_report};
use phantom_core::domain::SimuError;
use phantom_core::io::{cfl_paths, read_cfl, write_cfl};
use phantom_core::multind::{ComplexArray, calc_size};
use phantom_core::simu::{Preset, Trajectory, noncart_output_dims};
use std::path::PathBuf;
use tracing::info;

#[derive(clap::Args)]
pub(super) struct PhantomArgs {
    /// Output array (cfl base name)
    #[arg(value_name = "OUTPUT")]
    pub(super) output: PathBuf,

    /// Sample in k-space instead of image domain
    #[arg(short = 'k', long)]
    pub(super) kspace: bool,

    /// Grid size along both spatial axes [default: 128]
    #[arg(short = 'x', long, value_name = "n")]
    pub(super) size: Option<usize>,

    /// Number of simulated receive coils [default: 1]
    #[arg(short = 's', long, value_name = "n")]
    pub(super) coils: Option<usize>,

    /// Output coil sensitivity maps instead of a phantom
    #[arg(short = 'S', long, conflicts_with_all = ["shape", "traj"])]
    pub(super) sens: bool,

    /// Phantom geometry
    #[arg(long, value_enum)]
    pub(super) shape: Option<ShapeArg>,

    /// k-space trajectory (cfl base name); implies --kspace
    #[arg(short = 't', long, value_name = "file")]
    pub(super) traj: Option<PathBuf>,

    /// JSON simulation config; explicit flags take precedence
    #[arg(long, value_name = "json")]
    pub(super) config: Option<PathBuf>,

    /// Write a JSON run report
    #[arg(long, value_name = "json")]
    pub(super) report: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum ShapeArg {
    SheppLogan,
    SheppLoganClassic,
    Disc,
    Ring,
}

impl From<ShapeArg> for Preset {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::SheppLogan => Preset::SheppLogan,
            ShapeArg::SheppLoganClassic => Preset::SheppLoganClassic,
            ShapeArg::Disc => Preset::Disc,
            ShapeArg::Ring => Preset::Ring,
        }
    }
}

pub(super) fn run_phantom_command(args: PhantomArgs) -> Result<i32, CliError> {
    let config = resolve_config(&args)?;

    let array = match &config.trajectory {
        Some(trajectory_path) => {
            let trajectory_array = read_cfl(trajectory_path).map_err(SimuError::from)?;
            let trajectory = Trajectory::new(trajectory_array.dims(), trajectory_array.data())
                .map_err(SimuError::from)?;
            let request = config.noncart_dims(trajectory.dims());
            let mut out = ComplexArray::zeros(noncart_output_dims(&request));
            config
                .preset
                .run_noncart(&request, out.data_mut(), &trajectory)
                .map_err(SimuError::from)?;
            out
        }
        None => {
            let dims = config.cartesian_dims();
            let mut out = ComplexArray::zeros(dims);
            config
                .preset
                .run(&dims, out.data_mut(), config.domain)
                .map_err(SimuError::from)?;
            out
        }
    };

    ensure_finite(&array)?;
    write_cfl(&args.output, &array).map_err(SimuError::from)?;
    let (header_path, data_path) = cfl_paths(&args.output);
    info!(
        header = %header_path.display(),
        data = %data_path.display(),
        samples = calc_size(array.dims()),
        "wrote phantom array"
    );

    if let Some(report_path) = &args.report {
        write_report(report_path, &RunReport::new(&config, &array, &data_path))?;
    }

    println!(
        "Wrote {} {} samples to '{}'.",
        calc_size(array.dims()),
        config.preset,
        data_path.display()
    );
    Ok(0)
}

fn ensure_finite(array: &ComplexArray) -> Result<(), SimuError> {
    match array.first_non_finite() {
        Some(index) => Err(SimuError::computation(
            "COMP.NON_FINITE",
            format!("sample {index} is not a finite complex value"),
        )),
        None => Ok(()),
    }
}
