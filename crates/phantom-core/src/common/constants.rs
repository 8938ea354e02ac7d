//! Array layout and coil-model constants shared by the sampling engine.
//!
//! Axis indices follow the usual MRI array convention: read, two phase
//! encoding axes, then the receive coil axis.

pub const PI: f64 = std::f64::consts::PI;
pub const PI2: f64 = 2.0 * PI;

/// Rank of every simulated array.
pub const DIMS: usize = 16;

pub const READ_DIM: usize = 0;
pub const PHS1_DIM: usize = 1;
pub const PHS2_DIM: usize = 2;
pub const COIL_DIM: usize = 3;

pub const MAX_COILS: usize = 8;
pub const COIL_COEFF: usize = 5;
/// Index of the zero-order harmonic inside the coefficient window.
pub const COIL_COEFF_CENTER: usize = (COIL_COEFF - 1) / 2;
/// Spatial period of the harmonic coil model.
pub const COIL_SUPPORT: f64 = 4.0;

/// Stored components per trajectory point (x, y, z).
pub const TRAJ_COMPONENTS: usize = 3;

#[cfg(test)]
mod tests {
    use super::{
        COIL_COEFF, COIL_COEFF_CENTER, COIL_DIM, COIL_SUPPORT, DIMS, PHS1_DIM, PHS2_DIM, PI, PI2,
        READ_DIM,
    };

    #[test]
    fn constants_match_expected_relationships() {
        assert!((PI2 - 2.0 * PI).abs() <= 1.0e-15);
        assert_eq!(COIL_COEFF_CENTER, 2);
        assert_eq!(COIL_COEFF % 2, 1);
        assert_eq!(COIL_SUPPORT, 4.0);
    }

    #[test]
    fn axis_roles_are_distinct_and_inside_rank() {
        let axes = [READ_DIM, PHS1_DIM, PHS2_DIM, COIL_DIM];
        for (index, axis) in axes.iter().enumerate() {
            assert!(*axis < DIMS);
            assert!(!axes[index + 1..].contains(axis));
        }
    }
}
