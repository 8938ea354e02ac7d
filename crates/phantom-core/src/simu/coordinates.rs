use super::sampler::SamplingError;
use super::trajectory::Trajectory;
use crate::common::constants::{COIL_SUPPORT, PHS1_DIM, PHS2_DIM};
use crate::domain::{Coordinate, SampleDomain};
use crate::multind::Dims;

/// Offset from the grid center in units of half the extent: `[-1, 1)`.
pub fn image_coordinate(index: usize, extent: usize) -> f64 {
    (2.0 * index as f64 - extent as f64) / extent as f64
}

/// Cartesian k-space position; independent of the grid size.
pub fn kspace_coordinate(index: usize, extent: usize) -> f64 {
    (2.0 * index as f64 - extent as f64) / COIL_SUPPORT
}

/// Turns an output position into a sample coordinate.
#[derive(Debug, Clone, Copy)]
pub enum CoordinateMapper<'a> {
    Image { extent: [usize; 2] },
    KSpace { extent: [usize; 2] },
    NonCartesian { trajectory: &'a Trajectory<'a> },
}

impl<'a> CoordinateMapper<'a> {
    pub fn cartesian(dims: &Dims, domain: SampleDomain) -> Self {
        let extent = [dims[PHS1_DIM], dims[PHS2_DIM]];
        match domain {
            SampleDomain::Image => Self::Image { extent },
            SampleDomain::KSpace => Self::KSpace { extent },
        }
    }

    pub fn non_cartesian(trajectory: &'a Trajectory<'a>) -> Self {
        Self::NonCartesian { trajectory }
    }

    pub const fn domain(&self) -> SampleDomain {
        match self {
            Self::Image { .. } => SampleDomain::Image,
            Self::KSpace { .. } | Self::NonCartesian { .. } => SampleDomain::KSpace,
        }
    }

    /// Checks that every position of `dims` maps to a coordinate.
    pub fn check_shape(&self, dims: &Dims) -> Result<(), SamplingError> {
        match self {
            Self::Image { .. } | Self::KSpace { .. } => Ok(()),
            Self::NonCartesian { trajectory } => trajectory.check_compatible(dims),
        }
    }

    pub fn coordinate(&self, pos: &Dims) -> Coordinate {
        match self {
            Self::Image { extent } => [
                image_coordinate(pos[PHS1_DIM], extent[0]),
                image_coordinate(pos[PHS2_DIM], extent[1]),
            ],
            Self::KSpace { extent } => [
                kspace_coordinate(pos[PHS1_DIM], extent[0]),
                kspace_coordinate(pos[PHS2_DIM], extent[1]),
            ],
            // The z component is not used by the 2D phantoms.
            Self::NonCartesian { trajectory } => {
                let point = trajectory.point(pos);
                [point[0] / 2.0, point[1] / 2.0]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoordinateMapper, image_coordinate, kspace_coordinate};
    use crate::common::constants::{COIL_DIM, DIMS};
    use crate::domain::SampleDomain;
    use crate::multind::dims_from_slice;
    use crate::simu::trajectory::Trajectory;
    use num_complex::Complex32;

    #[test]
    fn image_coordinates_span_minus_one_to_one() {
        assert_eq!(image_coordinate(0, 64), -1.0);
        assert_eq!(image_coordinate(32, 64), 0.0);
        assert_eq!(image_coordinate(63, 64), 62.0 / 64.0);
        assert_eq!(image_coordinate(1, 3), -1.0 / 3.0);
    }

    #[test]
    fn kspace_coordinates_do_not_scale_with_resolution() {
        assert_eq!(kspace_coordinate(0, 64), -16.0);
        assert_eq!(kspace_coordinate(33, 64), 0.5);
        assert_eq!(kspace_coordinate(33, 128) - kspace_coordinate(32, 128), 0.5);
    }

    #[test]
    fn cartesian_mapper_ignores_coil_axis() {
        let dims = dims_from_slice(&[1, 8, 4, 3]).expect("dims");
        let mapper = CoordinateMapper::cartesian(&dims, SampleDomain::Image);
        let mut pos = [0; DIMS];
        pos[1] = 6;
        pos[2] = 1;
        let first = mapper.coordinate(&pos);
        pos[COIL_DIM] = 2;
        assert_eq!(mapper.coordinate(&pos), first);
        assert_eq!(first, [0.5, -0.5]);
        assert_eq!(mapper.domain(), SampleDomain::Image);
    }

    #[test]
    fn kspace_mapper_uses_coil_support() {
        let dims = dims_from_slice(&[1, 8, 4]).expect("dims");
        let mapper = CoordinateMapper::cartesian(&dims, SampleDomain::KSpace);
        let mut pos = [0; DIMS];
        pos[1] = 6;
        pos[2] = 1;
        assert_eq!(mapper.coordinate(&pos), [1.0, -0.5]);
        assert_eq!(mapper.domain(), SampleDomain::KSpace);
    }

    #[test]
    fn non_cartesian_mapper_halves_trajectory_points() {
        let dims = dims_from_slice(&[3, 2]).expect("dims");
        let points = [1.0, -3.0, 7.0, 0.5, 4.0, 9.0].map(|v| Complex32::new(v, 0.25));
        let trajectory = Trajectory::new(&dims, &points).expect("trajectory");
        let mapper = CoordinateMapper::non_cartesian(&trajectory);

        let mut pos = [0; DIMS];
        assert_eq!(mapper.coordinate(&pos), [0.5, -1.5]);
        pos[1] = 1;
        assert_eq!(mapper.coordinate(&pos), [0.25, 2.0]);
        assert_eq!(mapper.domain(), SampleDomain::KSpace);
    }
}
