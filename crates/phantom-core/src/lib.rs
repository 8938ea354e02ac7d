pub mod common;
pub mod config;
pub mod domain;
pub mod io;
pub mod multind;
pub mod numerics;
pub mod phantom;
pub mod simu;
