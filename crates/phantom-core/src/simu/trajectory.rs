use super::sampler::SamplingError;
use crate::common::constants::{DIMS, PHS1_DIM, PHS2_DIM, READ_DIM, TRAJ_COMPONENTS};
use crate::multind::{Dims, calc_offset, calc_strides, checked_size};
use num_complex::Complex32;

/// Borrowed view of a k-space trajectory shaped `[3, samples, lines]`.
///
/// Axis 0 holds the x, y, z components; only their real parts are read.
/// Singleton sample or line axes broadcast over the output.
#[derive(Debug, Clone, Copy)]
pub struct Trajectory<'a> {
    dims: Dims,
    strides: Dims,
    points: &'a [Complex32],
}

impl<'a> Trajectory<'a> {
    pub fn new(dims: &Dims, points: &'a [Complex32]) -> Result<Self, SamplingError> {
        if dims[READ_DIM] != TRAJ_COMPONENTS {
            return Err(SamplingError::TrajectoryComponents {
                expected: TRAJ_COMPONENTS,
                actual: dims[READ_DIM],
            });
        }

        if let Some(axis) = (PHS2_DIM + 1..DIMS).find(|axis| dims[*axis] != 1) {
            return Err(SamplingError::TrajectoryShape {
                axis,
                expected: 1,
                actual: dims[axis],
            });
        }

        let expected = checked_size(dims).ok_or_else(|| SamplingError::SizeOverflow {
            dims: dims.to_vec(),
        })?;
        if points.len() != expected {
            return Err(SamplingError::TrajectoryLength {
                expected,
                actual: points.len(),
            });
        }

        Ok(Self {
            dims: *dims,
            strides: calc_strides(dims),
            points,
        })
    }

    pub fn dims(&self) -> &Dims {
        &self.dims
    }

    /// Checks that the sample and line axes match `dims` or broadcast.
    pub fn check_compatible(&self, dims: &Dims) -> Result<(), SamplingError> {
        for axis in [PHS1_DIM, PHS2_DIM] {
            let extent = self.dims[axis];
            if extent != 1 && extent != dims[axis] {
                return Err(SamplingError::TrajectoryShape {
                    axis,
                    expected: dims[axis],
                    actual: extent,
                });
            }
        }
        Ok(())
    }

    /// Trajectory point addressed by the sample and line axes of `pos`.
    pub fn point(&self, pos: &Dims) -> [f64; 3] {
        let base = calc_offset(
            &self.strides[PHS1_DIM..=PHS2_DIM],
            &pos[PHS1_DIM..=PHS2_DIM],
        );
        let step = self.strides[READ_DIM];
        [0, 1, 2].map(|component| f64::from(self.points[base + component * step].re))
    }
}
