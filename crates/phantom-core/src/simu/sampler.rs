use super::coordinates::CoordinateMapper;
use super::sensitivity::SensitivityModel;
use super::trajectory::Trajectory;
use crate::common::constants::{COIL_DIM, MAX_COILS, PHS1_DIM, PHS2_DIM, READ_DIM, TRAJ_COMPONENTS};
use crate::domain::{SampleDomain, SimuError};
use crate::multind::{Dims, checked_size, select_dims, zsample};
use crate::phantom::BaseEvaluator;
use num_complex::{Complex32, Complex64};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SamplingError {
    #[error("coil axis extent {coils} exceeds the {max} simulated coils")]
    TooManyCoils { coils: usize, max: usize },
    #[error("output buffer holds {actual} samples, shape requires {expected}")]
    BufferLength { expected: usize, actual: usize },
    #[error("trajectory leading axis must have extent {expected}, got {actual}")]
    TrajectoryComponents { expected: usize, actual: usize },
    #[error("trajectory axis {axis} has extent {actual}, expected 1 or {expected}")]
    TrajectoryShape {
        axis: usize,
        expected: usize,
        actual: usize,
    },
    #[error("trajectory buffer holds {actual} values, shape requires {expected}")]
    TrajectoryLength { expected: usize, actual: usize },
    #[error("preset '{preset}' is only defined in image domain")]
    ImageDomainOnly { preset: &'static str },
    #[error("shape {dims:?} exceeds the addressable sample count")]
    SizeOverflow { dims: Vec<usize> },
}

impl From<SamplingError> for SimuError {
    fn from(error: SamplingError) -> Self {
        let placeholder = match error {
            SamplingError::TooManyCoils { .. } => "INPUT.COILS",
            SamplingError::BufferLength { .. } => "SYS.OUTPUT_BUFFER",
            SamplingError::TrajectoryComponents { .. }
            | SamplingError::TrajectoryShape { .. }
            | SamplingError::TrajectoryLength { .. } => "INPUT.TRAJECTORY",
            SamplingError::ImageDomainOnly { .. } => "INPUT.PRESET_DOMAIN",
            SamplingError::SizeOverflow { .. } => "INPUT.SIZE",
        };

        match error {
            SamplingError::BufferLength { .. } => {
                SimuError::internal(placeholder, error.to_string())
            }
            _ => SimuError::input_validation(placeholder, error.to_string()),
        }
    }
}

/// Per-call sampling configuration shared by every output position.
#[derive(Debug)]
pub struct SampleKernel<'a, E: ?Sized> {
    mapper: CoordinateMapper<'a>,
    model: SensitivityModel,
    evaluator: &'a E,
}

impl<'a, E> SampleKernel<'a, E>
where
    E: BaseEvaluator + ?Sized,
{
    pub fn new(mapper: CoordinateMapper<'a>, model: SensitivityModel, evaluator: &'a E) -> Self {
        Self {
            mapper,
            model,
            evaluator,
        }
    }

    pub const fn model(&self) -> SensitivityModel {
        self.model
    }

    pub fn sample_at(&self, pos: &Dims) -> Complex64 {
        let point = self.mapper.coordinate(pos);
        self.model
            .encode(pos[COIL_DIM], point, self.evaluator, self.mapper.domain())
    }

    /// Fills `out`, shaped `dims`, after checking the coil count, the buffer
    /// size and, for trajectory sampling, the trajectory shape.
    pub fn fill(&self, dims: &Dims, out: &mut [Complex32]) -> Result<(), SamplingError> {
        check_coils(dims)?;
        check_buffer(dims, out)?;
        self.mapper.check_shape(dims)?;

        debug!(
            shape = ?&dims[..=COIL_DIM],
            strategy = self.model.as_str(),
            domain = %self.mapper.domain(),
            "sampling phantom"
        );

        zsample(dims, out, |pos| {
            let value = self.sample_at(pos);
            Complex32::new(value.re as f32, value.im as f32)
        });
        Ok(())
    }
}

/// Samples `evaluator` on the Cartesian grid `dims` in the given domain.
///
/// More than one coil along the coil axis switches on the coil model
/// matching `domain`.
pub fn sample<E>(
    dims: &Dims,
    out: &mut [Complex32],
    evaluator: &E,
    domain: SampleDomain,
) -> Result<(), SamplingError>
where
    E: BaseEvaluator + ?Sized,
{
    let model = SensitivityModel::select(dims[COIL_DIM], domain);
    SampleKernel::new(CoordinateMapper::cartesian(dims, domain), model, evaluator).fill(dims, out)
}

/// Output shape of [`sample_noncart`]: the sample, line and coil axes of `dims`.
pub fn noncart_output_dims(dims: &Dims) -> Dims {
    select_dims(
        (1 << PHS1_DIM) | (1 << PHS2_DIM) | (1 << COIL_DIM),
        dims,
    )
}

/// Samples `evaluator` in k-space at the points of `trajectory`.
///
/// `dims` describes the trajectory-shaped request: axis 0 must be the three
/// trajectory components, axes 1 and 2 the sample and line axes, axis 3 the
/// coils. `out` is shaped [`noncart_output_dims`].
pub fn sample_noncart<E>(
    dims: &Dims,
    out: &mut [Complex32],
    trajectory: &Trajectory<'_>,
    evaluator: &E,
) -> Result<(), SamplingError>
where
    E: BaseEvaluator + ?Sized,
{
    if dims[READ_DIM] != TRAJ_COMPONENTS {
        return Err(SamplingError::TrajectoryComponents {
            expected: TRAJ_COMPONENTS,
            actual: dims[READ_DIM],
        });
    }

    let out_dims = noncart_output_dims(dims);
    let model = SensitivityModel::select(dims[COIL_DIM], SampleDomain::KSpace);
    SampleKernel::new(CoordinateMapper::non_cartesian(trajectory), model, evaluator)
        .fill(&out_dims, out)
}

fn check_coils(dims: &Dims) -> Result<(), SamplingError> {
    let coils = dims[COIL_DIM];
    if coils > MAX_COILS {
        return Err(SamplingError::TooManyCoils {
            coils,
            max: MAX_COILS,
        });
    }
    Ok(())
}

fn check_buffer(dims: &Dims, out: &[Complex32]) -> Result<(), SamplingError> {
    let expected = checked_size(dims).ok_or_else(|| SamplingError::SizeOverflow {
        dims: dims.to_vec(),
    })?;
    if out.len() != expected {
        return Err(SamplingError::BufferLength {
            expected,
            actual: out.len(),
        });
    }
    Ok(())
}
