pub mod bessel;

pub use bessel::{bessel_j1, jinc};
