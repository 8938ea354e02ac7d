use super::shapes::Ellipse;
use crate::domain::{Coordinate, SampleDomain};
use num_complex::Complex64;

/// Pure point evaluator driven by the sampling engine.
///
/// Implementations must be deterministic; the engine calls them from many
/// threads at once.
pub trait BaseEvaluator: Sync {
    fn evaluate(&self, point: Coordinate, domain: SampleDomain) -> Complex64;
}

/// Sum of the ellipse contributions of `ellipses` at `point`.
pub fn phantom(ellipses: &[Ellipse], point: Coordinate, domain: SampleDomain) -> Complex64 {
    ellipses
        .iter()
        .map(|ellipse| match domain {
            SampleDomain::Image => ellipse.image_value(point),
            SampleDomain::KSpace => ellipse.kspace_value(point),
        })
        .sum()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeSet<'a> {
    ellipses: &'a [Ellipse],
}

impl<'a> ShapeSet<'a> {
    pub const fn new(ellipses: &'a [Ellipse]) -> Self {
        Self { ellipses }
    }

    pub const fn len(&self) -> usize {
        self.ellipses.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.ellipses.is_empty()
    }
}

impl BaseEvaluator for ShapeSet<'_> {
    fn evaluate(&self, point: Coordinate, domain: SampleDomain) -> Complex64 {
        phantom(self.ellipses, point, domain)
    }
}

/// Evaluates to one everywhere; sampling it yields the raw coil profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConstantOne;

impl BaseEvaluator for ConstantOne {
    fn evaluate(&self, _point: Coordinate, _domain: SampleDomain) -> Complex64 {
        Complex64::new(1.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::{BaseEvaluator, ConstantOne, ShapeSet, phantom};
    use crate::domain::SampleDomain;
    use crate::phantom::shapes::{PHANTOM_DISC, SHEPP_LOGAN, SHEPP_LOGAN_MOD};

    #[test]
    fn modified_shepp_logan_center_is_skull_minus_brain() {
        let value = phantom(&SHEPP_LOGAN_MOD, [0.0, 0.0], SampleDomain::Image);
        assert!((value.re - 0.2).abs() < 1.0e-12);
        assert_eq!(value.im, 0.0);

        let classic = phantom(&SHEPP_LOGAN, [0.0, 0.0], SampleDomain::Image);
        assert!((classic.re - 0.02).abs() < 1.0e-12);
    }

    #[test]
    fn phantom_is_zero_outside_the_head() {
        let value = phantom(&SHEPP_LOGAN_MOD, [0.95, 0.95], SampleDomain::Image);
        assert_eq!(value.re, 0.0);
    }

    #[test]
    fn shape_set_delegates_to_phantom() {
        let shapes = ShapeSet::new(&PHANTOM_DISC);
        assert_eq!(shapes.len(), 1);
        assert!(!shapes.is_empty());
        for domain in [SampleDomain::Image, SampleDomain::KSpace] {
            let point = [0.125, -0.25];
            assert_eq!(
                shapes.evaluate(point, domain),
                phantom(&PHANTOM_DISC, point, domain)
            );
        }
    }

    #[test]
    fn constant_one_ignores_point_and_domain() {
        assert_eq!(ConstantOne.evaluate([3.0, -2.0], SampleDomain::KSpace).re, 1.0);
        assert_eq!(ConstantOne.evaluate([0.0, 0.0], SampleDomain::Image).im, 0.0);
    }
}
