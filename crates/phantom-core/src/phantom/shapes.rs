use crate::common::constants::{PI, PI2};
use crate::domain::Coordinate;
use crate::numerics::jinc;
use num_complex::Complex64;

/// One ellipse of a piecewise-constant phantom.
///
/// `axis` holds the two semi-axes and `angle` the rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub intensity: f64,
    pub axis: [f64; 2],
    pub center: [f64; 2],
    pub angle: f64,
}

impl Ellipse {
    pub const fn new(intensity: f64, axis: [f64; 2], center: [f64; 2], angle: f64) -> Self {
        Self {
            intensity,
            axis,
            center,
            angle,
        }
    }

    pub fn area(&self) -> f64 {
        PI * self.axis[0] * self.axis[1]
    }

    /// Image-domain value: the intensity inside the ellipse, zero outside.
    pub fn image_value(&self, point: Coordinate) -> Complex64 {
        let local = rotate(
            self.angle,
            [point[0] - self.center[0], point[1] - self.center[1]],
        );
        let radius2 = (local[0] / self.axis[0]).powi(2) + (local[1] / self.axis[1]).powi(2);

        if radius2 <= 1.0 {
            Complex64::new(self.intensity, 0.0)
        } else {
            Complex64::new(0.0, 0.0)
        }
    }

    /// Continuous Fourier transform of [`Ellipse::image_value`] with kernel
    /// `exp(+2πi k·x)`.
    pub fn kspace_value(&self, point: Coordinate) -> Complex64 {
        let local = rotate(self.angle, point);
        let radius = ((local[0] * self.axis[0]).powi(2) + (local[1] * self.axis[1]).powi(2)).sqrt();
        let magnitude = self.intensity * self.axis[0] * self.axis[1] * PI2 * jinc(PI2 * radius);
        let phase = PI2 * (point[0] * self.center[0] + point[1] * self.center[1]);

        Complex64::from_polar(magnitude, phase)
    }
}

fn rotate(angle: f64, point: Coordinate) -> Coordinate {
    let (sin, cos) = angle.sin_cos();
    [
        cos * point[0] - sin * point[1],
        sin * point[0] + cos * point[1],
    ]
}

const TILT: f64 = 18.0 / 360.0 * PI2;

pub const SHEPP_LOGAN: [Ellipse; 10] = [
    Ellipse::new(1.0, [0.69, 0.92], [0.0, 0.0], 0.0),
    Ellipse::new(-0.98, [0.6624, 0.8740], [0.0, -0.0184], 0.0),
    Ellipse::new(-0.02, [0.1100, 0.3100], [0.22, 0.0], -TILT),
    Ellipse::new(-0.02, [0.1600, 0.4100], [-0.22, 0.0], TILT),
    Ellipse::new(0.01, [0.2100, 0.2500], [0.0, 0.35], 0.0),
    Ellipse::new(0.01, [0.0460, 0.0460], [0.0, 0.1], 0.0),
    Ellipse::new(0.01, [0.0460, 0.0460], [0.0, -0.1], 0.0),
    Ellipse::new(0.01, [0.0460, 0.0230], [-0.08, -0.605], 0.0),
    Ellipse::new(0.01, [0.0230, 0.0230], [0.0, -0.606], 0.0),
    Ellipse::new(0.01, [0.0230, 0.0460], [0.06, -0.605], 0.0),
];

/// Shepp-Logan with the contrast-enhanced intensities of Toft.
pub const SHEPP_LOGAN_MOD: [Ellipse; 10] = [
    Ellipse::new(1.0, [0.69, 0.92], [0.0, 0.0], 0.0),
    Ellipse::new(-0.8, [0.6624, 0.8740], [0.0, -0.0184], 0.0),
    Ellipse::new(-0.2, [0.1100, 0.3100], [0.22, 0.0], -TILT),
    Ellipse::new(-0.2, [0.1600, 0.4100], [-0.22, 0.0], TILT),
    Ellipse::new(0.1, [0.2100, 0.2500], [0.0, 0.35], 0.0),
    Ellipse::new(0.1, [0.0460, 0.0460], [0.0, 0.1], 0.0),
    Ellipse::new(0.1, [0.0460, 0.0460], [0.0, -0.1], 0.0),
    Ellipse::new(0.1, [0.0460, 0.0230], [-0.08, -0.605], 0.0),
    Ellipse::new(0.1, [0.0230, 0.0230], [0.0, -0.606], 0.0),
    Ellipse::new(0.1, [0.0230, 0.0460], [0.06, -0.605], 0.0),
];

pub const PHANTOM_DISC: [Ellipse; 1] = [Ellipse::new(1.0, [0.4, 0.4], [0.0, 0.0], 0.0)];

/// Two concentric annuli of different intensity.
pub const PHANTOM_RING: [Ellipse; 4] = [
    Ellipse::new(1.0, [0.75, 0.75], [0.0, 0.0], 0.0),
    Ellipse::new(-1.0, [0.6, 0.6], [0.0, 0.0], 0.0),
    Ellipse::new(0.5, [0.4, 0.4], [0.0, 0.0], 0.0),
    Ellipse::new(-0.5, [0.3, 0.3], [0.0, 0.0], 0.0),
];
