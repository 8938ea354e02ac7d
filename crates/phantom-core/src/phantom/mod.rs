//! Analytic ellipse phantoms evaluated in image or k-space domain.

pub mod evaluator;
pub mod shapes;

pub use evaluator::{BaseEvaluator, ConstantOne, ShapeSet, phantom};
pub use shapes::{Ellipse, PHANTOM_DISC, PHANTOM_RING, SHEPP_LOGAN, SHEPP_LOGAN_MOD};
