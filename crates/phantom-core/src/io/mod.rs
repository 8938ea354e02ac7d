pub mod cfl;

pub use cfl::{CflError, cfl_paths, read_cfl, write_cfl};
