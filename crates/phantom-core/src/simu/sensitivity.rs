//! Harmonic coil-sensitivity model.
//!
//! Each coil profile is a truncated 2D Fourier series with period
//! [`COIL_SUPPORT`] in both directions:
//!
//! `s_c(x, y) = Σ_ij coeff[c][i][j] · exp(2πi((i − 2)x + (j − 2)y) / 4)`
//!
//! In image domain the profile multiplies the object directly. In k-space the
//! same product becomes a sum of shifted object spectra, so no discrete
//! transform is ever needed (Guerquin-Kern et al., IEEE TMI 31:626-636, 2012).

use crate::common::constants::{COIL_COEFF, COIL_COEFF_CENTER, COIL_SUPPORT, MAX_COILS, PI2};
use crate::domain::{Coordinate, SampleDomain};
use crate::phantom::BaseEvaluator;
use num_complex::Complex64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensitivityModel {
    /// Single channel, no modulation.
    Identity,
    /// Object value times the coil profile.
    ObjectModulation,
    /// Coil-weighted sum of shifted k-space evaluations.
    KSpaceShift,
}

impl SensitivityModel {
    pub const fn select(coils: usize, domain: SampleDomain) -> Self {
        if coils <= 1 {
            return Self::Identity;
        }

        match domain {
            SampleDomain::Image => Self::ObjectModulation,
            SampleDomain::KSpace => Self::KSpaceShift,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::ObjectModulation => "object-modulation",
            Self::KSpaceShift => "kspace-shift",
        }
    }

    /// # Panics
    ///
    /// Panics when `coil >= MAX_COILS` for the two multi-coil strategies.
    pub fn encode<E>(
        self,
        coil: usize,
        point: Coordinate,
        evaluator: &E,
        domain: SampleDomain,
    ) -> Complex64
    where
        E: BaseEvaluator + ?Sized,
    {
        match self {
            Self::Identity => evaluator.evaluate(point, domain),
            Self::ObjectModulation => coil_profile(coil, point) * evaluator.evaluate(point, domain),
            Self::KSpaceShift => shifted_sum(coil, point, evaluator, domain),
        }
    }
}

/// Coefficient window of one coil, `None` past [`MAX_COILS`].
pub fn coil_coefficients(coil: usize) -> Option<&'static [[Complex64; COIL_COEFF]; COIL_COEFF]> {
    SENS_COEFF.get(coil)
}

/// Image-domain sensitivity of `coil` at `point`.
pub fn coil_profile(coil: usize, point: Coordinate) -> Complex64 {
    let coefficients = checked_coefficients(coil);
    let mut value = Complex64::new(0.0, 0.0);

    for (i, row) in coefficients.iter().enumerate() {
        for (j, coefficient) in row.iter().enumerate() {
            let phase = PI2 * (harmonic(i) * point[0] + harmonic(j) * point[1]) / COIL_SUPPORT;
            value += coefficient * Complex64::from_polar(1.0, phase);
        }
    }

    value
}

fn shifted_sum<E>(coil: usize, point: Coordinate, evaluator: &E, domain: SampleDomain) -> Complex64
where
    E: BaseEvaluator + ?Sized,
{
    let coefficients = checked_coefficients(coil);
    let mut value = Complex64::new(0.0, 0.0);

    for (i, row) in coefficients.iter().enumerate() {
        for (j, coefficient) in row.iter().enumerate() {
            let shifted = [
                point[0] + harmonic(i) / COIL_SUPPORT,
                point[1] + harmonic(j) / COIL_SUPPORT,
            ];
            value += coefficient * evaluator.evaluate(shifted, domain);
        }
    }

    value
}

fn checked_coefficients(coil: usize) -> &'static [[Complex64; COIL_COEFF]; COIL_COEFF] {
    assert!(
        coil < MAX_COILS,
        "coil index {coil} exceeds the {MAX_COILS} simulated coils"
    );
    &SENS_COEFF[coil]
}

fn harmonic(index: usize) -> f64 {
    index as f64 - COIL_COEFF_CENTER as f64
}

const fn c(re: f64, im: f64) -> Complex64 {
    Complex64::new(re, im)
}

// Fourier coefficients of smooth profiles peaking at radius 1.3 around the
// field of view, coil c at angle 2πc/8, with a linear phase across the coil.
const SENS_COEFF: [[[Complex64; COIL_COEFF]; COIL_COEFF]; MAX_COILS] = [
    // coil 0
    [
        [c(-0.000010, -0.000011), c(-0.000714, -0.000769), c(-0.001784, -0.001923), c(-0.000714, -0.000769), c(-0.000010, -0.000011)],
        [c(-0.000171, 0.000332), c(-0.012025, 0.023324), c(-0.030062, 0.058311), c(-0.012025, 0.023324), c(-0.000171, 0.000332)],
        [c(0.001627, -0.000002), c(0.114162, -0.000125), c(0.285416, -0.000313), c(0.114162, -0.000125), c(0.001627, -0.000002)],
        [c(-0.000477, -0.000939), c(-0.033434, -0.065893), c(-0.083587, -0.164737), c(-0.033434, -0.065893), c(-0.000477, -0.000939)],
        [c(-0.000027, 0.000040), c(-0.001901, 0.002830), c(-0.004754, 0.007075), c(-0.001901, 0.002830), c(-0.000027, 0.000040)],
    ],
    // coil 1
    [
        [c(0.000013, -0.000004), c(-0.000036, -0.000526), c(-0.001926, -0.000109), c(-0.000200, 0.001071), c(0.000034, 0.000010)],
        [c(-0.000036, -0.000526), c(-0.021100, -0.003039), c(-0.020606, 0.075241), c(0.040650, 0.016981), c(0.000668, -0.001248)],
        [c(-0.001926, -0.000109), c(-0.020606, 0.075241), c(0.263869, 0.108957), c(0.080102, -0.139906), c(-0.004228, -0.002990)],
        [c(-0.000200, 0.001071), c(0.040650, 0.016981), c(0.080102, -0.139906), c(-0.072565, -0.054978), c(-0.001981, 0.002152)],
        [c(0.000034, 0.000010), c(0.000668, -0.001248), c(-0.004228, -0.002990), c(-0.001981, 0.002152), c(0.000063, 0.000070)],
    ],
    // coil 2
    [
        [c(0.000001, -0.000015), c(-0.000356, 0.000114), c(0.001152, 0.001149), c(0.000327, -0.001001), c(-0.000048, 0.000009)],
        [c(0.000039, -0.001048), c(-0.024995, 0.007990), c(0.080813, 0.080637), c(0.022952, -0.070234), c(-0.003345, 0.000656)],
        [c(0.000098, -0.002621), c(-0.062490, 0.019975), c(0.202041, 0.201599), c(0.057382, -0.175592), c(-0.008364, 0.001641)],
        [c(0.000039, -0.001048), c(-0.024995, 0.007990), c(0.080813, 0.080637), c(0.022952, -0.070234), c(-0.003345, 0.000656)],
        [c(0.000001, -0.000015), c(-0.000356, 0.000114), c(0.001152, 0.001149), c(0.000327, -0.001001), c(-0.000048, 0.000009)],
    ],
    // coil 3
    [
        [c(0.000017, 0.000031), c(0.001354, -0.000410), c(-0.000875, -0.005104), c(-0.002922, 0.000121), c(-0.000005, 0.000094)],
        [c(-0.000899, 0.000616), c(0.016737, 0.040751), c(0.155569, -0.042288), c(-0.012436, -0.090186), c(-0.002922, 0.000121)],
        [c(-0.001285, -0.001439), c(-0.067774, 0.038633), c(0.109539, 0.263628), c(0.155569, -0.042288), c(-0.000875, -0.005104)],
        [c(0.000347, -0.000397), c(-0.012772, -0.017069), c(-0.067774, 0.038633), c(0.016737, 0.040751), c(0.001354, -0.000410)],
        [c(0.000011, 0.000006), c(0.000347, -0.000397), c(-0.001285, -0.001439), c(-0.000899, 0.000616), c(0.000017, 0.000031)],
    ],
    // coil 4
    [
        [c(-0.000040, -0.000027), c(-0.002830, -0.001901), c(-0.007075, -0.004754), c(-0.002830, -0.001901), c(-0.000040, -0.000027)],
        [c(0.000939, -0.000477), c(0.065893, -0.033434), c(0.164737, -0.083587), c(0.065893, -0.033434), c(0.000939, -0.000477)],
        [c(0.000002, 0.001627), c(0.000125, 0.114162), c(0.000313, 0.285416), c(0.000125, 0.114162), c(0.000002, 0.001627)],
        [c(-0.000332, -0.000171), c(-0.023324, -0.012025), c(-0.058311, -0.030062), c(-0.023324, -0.012025), c(-0.000332, -0.000171)],
        [c(0.000011, -0.000010), c(0.000769, -0.000714), c(0.001923, -0.001784), c(0.000769, -0.000714), c(0.000011, -0.000010)],
    ],
    // coil 5
    [
        [c(-0.000070, 0.000063), c(-0.002152, -0.001981), c(0.002990, -0.004228), c(0.001248, 0.000668), c(-0.000010, 0.000034)],
        [c(-0.002152, -0.001981), c(0.054978, -0.072565), c(0.139906, 0.080102), c(-0.016981, 0.040650), c(-0.001071, -0.000200)],
        [c(0.002990, -0.004228), c(0.139906, 0.080102), c(-0.108957, 0.263869), c(-0.075241, -0.020606), c(0.000109, -0.001926)],
        [c(0.001248, 0.000668), c(-0.016981, 0.040650), c(-0.075241, -0.020606), c(0.003039, -0.021100), c(0.000526, -0.000036)],
        [c(-0.000010, 0.000034), c(-0.001071, -0.000200), c(0.000109, -0.001926), c(0.000526, -0.000036), c(0.000004, 0.000013)],
    ],
    // coil 6
    [
        [c(-0.000009, -0.000048), c(0.001001, 0.000327), c(-0.001149, 0.001152), c(-0.000114, -0.000356), c(0.000015, 0.000001)],
        [c(-0.000656, -0.003345), c(0.070234, 0.022952), c(-0.080637, 0.080813), c(-0.007990, -0.024995), c(0.001048, 0.000039)],
        [c(-0.001641, -0.008364), c(0.175592, 0.057382), c(-0.201599, 0.202041), c(-0.019975, -0.062490), c(0.002621, 0.000098)],
        [c(-0.000656, -0.003345), c(0.070234, 0.022952), c(-0.080637, 0.080813), c(-0.007990, -0.024995), c(0.001048, 0.000039)],
        [c(-0.000009, -0.000048), c(0.001001, 0.000327), c(-0.001149, 0.001152), c(-0.000114, -0.000356), c(0.000015, 0.000001)],
    ],
    // coil 7
    [
        [c(-0.000031, 0.000017), c(-0.000616, -0.000899), c(0.001439, -0.001285), c(0.000397, 0.000347), c(-0.000006, 0.000011)],
        [c(0.000410, 0.001354), c(-0.040751, 0.016737), c(-0.038633, -0.067774), c(0.017069, -0.012772), c(0.000397, 0.000347)],
        [c(0.005104, -0.000875), c(0.042288, 0.155569), c(-0.263628, 0.109539), c(-0.038633, -0.067774), c(0.001439, -0.001285)],
        [c(-0.000121, -0.002922), c(0.090186, -0.012436), c(0.042288, 0.155569), c(-0.040751, 0.016737), c(-0.000616, -0.000899)],
        [c(-0.000094, -0.000005), c(-0.000121, -0.002922), c(0.005104, -0.000875), c(0.000410, 0.001354), c(-0.000031, 0.000017)],
    ],
];
