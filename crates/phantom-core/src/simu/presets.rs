//! Named phantom presets on top of the sampling engine.

use super::coordinates::CoordinateMapper;
use super::sampler::{SampleKernel, SamplingError, sample, sample_noncart};
use super::sensitivity::SensitivityModel;
use super::trajectory::Trajectory;
use crate::domain::SampleDomain;
use crate::multind::Dims;
use crate::phantom::{
    ConstantOne, PHANTOM_DISC, PHANTOM_RING, SHEPP_LOGAN, SHEPP_LOGAN_MOD, ShapeSet,
};
use num_complex::Complex32;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Modified Shepp-Logan phantom on a Cartesian grid.
pub fn calc_phantom(
    dims: &Dims,
    out: &mut [Complex32],
    domain: SampleDomain,
) -> Result<(), SamplingError> {
    sample(dims, out, &ShapeSet::new(&SHEPP_LOGAN_MOD), domain)
}

/// Modified Shepp-Logan phantom in k-space at the points of `trajectory`.
pub fn calc_phantom_noncart(
    dims: &Dims,
    out: &mut [Complex32],
    trajectory: &Trajectory<'_>,
) -> Result<(), SamplingError> {
    sample_noncart(dims, out, trajectory, &ShapeSet::new(&SHEPP_LOGAN_MOD))
}

/// Image-domain coil profiles, one per index of the coil axis.
pub fn calc_sens(dims: &Dims, out: &mut [Complex32]) -> Result<(), SamplingError> {
    let mapper = CoordinateMapper::cartesian(dims, SampleDomain::Image);
    SampleKernel::new(mapper, SensitivityModel::ObjectModulation, &ConstantOne).fill(dims, out)
}

/// Centered disc of radius 0.4 on a Cartesian grid.
pub fn calc_circ(
    dims: &Dims,
    out: &mut [Complex32],
    domain: SampleDomain,
) -> Result<(), SamplingError> {
    sample(dims, out, &ShapeSet::new(&PHANTOM_DISC), domain)
}

/// Two concentric annuli on a Cartesian grid.
pub fn calc_ring(
    dims: &Dims,
    out: &mut [Complex32],
    domain: SampleDomain,
) -> Result<(), SamplingError> {
    sample(dims, out, &ShapeSet::new(&PHANTOM_RING), domain)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Preset {
    #[default]
    SheppLogan,
    SheppLoganClassic,
    Disc,
    Ring,
    Sensitivity,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Self::SheppLogan,
        Self::SheppLoganClassic,
        Self::Disc,
        Self::Ring,
        Self::Sensitivity,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SheppLogan => "shepp-logan",
            Self::SheppLoganClassic => "shepp-logan-classic",
            Self::Disc => "disc",
            Self::Ring => "ring",
            Self::Sensitivity => "sensitivity",
        }
    }

    /// Ellipse table of the preset; `None` for the coil profiles.
    pub const fn shapes(self) -> Option<ShapeSet<'static>> {
        match self {
            Self::SheppLogan => Some(ShapeSet::new(&SHEPP_LOGAN_MOD)),
            Self::SheppLoganClassic => Some(ShapeSet::new(&SHEPP_LOGAN)),
            Self::Disc => Some(ShapeSet::new(&PHANTOM_DISC)),
            Self::Ring => Some(ShapeSet::new(&PHANTOM_RING)),
            Self::Sensitivity => None,
        }
    }

    pub const fn supports_kspace(self) -> bool {
        !matches!(self, Self::Sensitivity)
    }

    pub fn run(
        self,
        dims: &Dims,
        out: &mut [Complex32],
        domain: SampleDomain,
    ) -> Result<(), SamplingError> {
        match self {
            Self::SheppLogan => calc_phantom(dims, out, domain),
            Self::Disc => calc_circ(dims, out, domain),
            Self::Ring => calc_ring(dims, out, domain),
            Self::SheppLoganClassic => sample(dims, out, &ShapeSet::new(&SHEPP_LOGAN), domain),
            Self::Sensitivity if domain.is_kspace() => Err(SamplingError::ImageDomainOnly {
                preset: self.as_str(),
            }),
            Self::Sensitivity => calc_sens(dims, out),
        }
    }

    pub fn run_noncart(
        self,
        dims: &Dims,
        out: &mut [Complex32],
        trajectory: &Trajectory<'_>,
    ) -> Result<(), SamplingError> {
        match self {
            Self::SheppLogan => calc_phantom_noncart(dims, out, trajectory),
            other => {
                let shapes = other.shapes().ok_or(SamplingError::ImageDomainOnly {
                    preset: other.as_str(),
                })?;
                sample_noncart(dims, out, trajectory, &shapes)
            }
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{Preset, calc_circ, calc_phantom, calc_ring, calc_sens};
    use crate::common::constants::COIL_DIM;
    use crate::domain::SampleDomain;
    use crate::multind::{calc_size, dims_from_slice, position_from_index};
    use crate::phantom::{PHANTOM_DISC, PHANTOM_RING, phantom};
    use crate::simu::coordinates::CoordinateMapper;
    use crate::simu::sampler::SamplingError;
    use crate::simu::sensitivity::coil_profile;
    use num_complex::{Complex32, Complex64};

    fn zeros(len: usize) -> Vec<Complex32> {
        vec![Complex32::new(0.0, 0.0); len]
    }

    fn to_c32(value: Complex64) -> Complex32 {
        Complex32::new(value.re as f32, value.im as f32)
    }

    #[test]
    fn phantom_center_is_sum_of_covering_ellipses() {
        let dims = dims_from_slice(&[1, 64, 64, 1]).expect("dims");
        let mut out = zeros(calc_size(&dims));
        calc_phantom(&dims, &mut out, SampleDomain::Image).expect("phantom");

        let center = 32 + 64 * 32;
        assert!((out[center].re - 0.2).abs() < 1.0e-7);
        assert_eq!(out[center].im, 0.0);
        assert_eq!(out[0], Complex32::new(0.0, 0.0));
    }

    #[test]
    fn single_coil_circ_and_ring_match_direct_evaluation() {
        for domain in [SampleDomain::Image, SampleDomain::KSpace] {
            let dims = dims_from_slice(&[1, 16, 12, 1]).expect("dims");
            let mapper = CoordinateMapper::cartesian(&dims, domain);

            let mut disc = zeros(calc_size(&dims));
            calc_circ(&dims, &mut disc, domain).expect("circ");
            let mut ring = zeros(calc_size(&dims));
            calc_ring(&dims, &mut ring, domain).expect("ring");

            for index in 0..disc.len() {
                let point = mapper.coordinate(&position_from_index(&dims, index));
                assert_eq!(disc[index], to_c32(phantom(&PHANTOM_DISC, point, domain)));
                assert_eq!(ring[index], to_c32(phantom(&PHANTOM_RING, point, domain)));
            }
        }
    }

    #[test]
    fn sensitivity_maps_are_raw_coil_profiles() {
        let dims = dims_from_slice(&[1, 8, 8, 4]).expect("dims");
        let mut out = zeros(calc_size(&dims));
        calc_sens(&dims, &mut out).expect("sens");

        let mapper = CoordinateMapper::cartesian(&dims, SampleDomain::Image);
        for (index, value) in out.iter().enumerate() {
            let pos = position_from_index(&dims, index);
            let expected = coil_profile(pos[COIL_DIM], mapper.coordinate(&pos));
            assert_eq!(*value, to_c32(expected));
        }
    }

    #[test]
    fn sensitivity_with_single_coil_still_modulates() {
        let dims = dims_from_slice(&[1, 4, 4, 1]).expect("dims");
        let mut out = zeros(calc_size(&dims));
        calc_sens(&dims, &mut out).expect("sens");

        let center = 2 + 4 * 2;
        assert_eq!(out[center], to_c32(coil_profile(0, [0.0, 0.0])));
    }

    #[test]
    fn sensitivity_preset_is_image_only() {
        let dims = dims_from_slice(&[1, 4, 4, 2]).expect("dims");
        let mut out = zeros(calc_size(&dims));
        assert_eq!(
            Preset::Sensitivity.run(&dims, &mut out, SampleDomain::KSpace),
            Err(SamplingError::ImageDomainOnly {
                preset: "sensitivity"
            })
        );
        assert!(!Preset::Sensitivity.supports_kspace());
    }

    #[test]
    fn preset_run_dispatches_to_named_functions() {
        let dims = dims_from_slice(&[1, 8, 8, 2]).expect("dims");
        let mut via_preset = zeros(calc_size(&dims));
        let mut direct = zeros(calc_size(&dims));

        Preset::Ring
            .run(&dims, &mut via_preset, SampleDomain::KSpace)
            .expect("preset");
        calc_ring(&dims, &mut direct, SampleDomain::KSpace).expect("direct");
        assert_eq!(via_preset, direct);
    }

    #[test]
    fn preset_names_round_trip_through_serde() {
        for preset in Preset::ALL {
            let encoded = serde_json::to_string(&preset).expect("serialize");
            assert_eq!(encoded, format!("\"{}\"", preset.as_str()));
            let decoded: Preset = serde_json::from_str(&encoded).expect("deserialize");
            assert_eq!(decoded, preset);
        }
        assert_eq!(Preset::default(), Preset::SheppLogan);
    }
}
