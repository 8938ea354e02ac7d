//! Sampling engine: coordinate mapping, coil encoding and the array fill.

pub mod coordinates;
pub mod presets;
pub mod sampler;
pub mod sensitivity;
pub mod trajectory;

pub use coordinates::{CoordinateMapper, image_coordinate, kspace_coordinate};
pub use presets::{
    Preset, calc_circ, calc_phantom, calc_phantom_noncart, calc_ring, calc_sens,
};
pub use sampler::{SampleKernel, SamplingError, noncart_output_dims, sample, sample_noncart};
pub use sensitivity::{SensitivityModel, coil_coefficients, coil_profile};
pub use trajectory::Trajectory;
