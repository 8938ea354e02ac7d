//! Fixed-rank dense array helpers.
//!
//! Arrays are column-major: axis 0 varies fastest. Strides are counted in
//! elements, and singleton axes get a zero stride so an array with extent 1
//! broadcasts along that axis when addressed with a larger position.

use crate::common::constants::DIMS;
use num_complex::Complex32;
use rayon::prelude::*;

pub type Dims = [usize; DIMS];

pub const fn singleton_dims() -> Dims {
    [1; DIMS]
}

/// Extends a short dimension list with trailing singleton axes.
pub fn dims_from_slice(dims: &[usize]) -> Option<Dims> {
    if dims.len() > DIMS {
        return None;
    }

    let mut full = singleton_dims();
    full[..dims.len()].copy_from_slice(dims);
    Some(full)
}

/// Element count of a shape that is known to fit in memory.
pub fn calc_size(dims: &[usize]) -> usize {
    dims.iter().product()
}

/// Element count, or `None` when the product overflows `usize`.
pub fn checked_size(dims: &[usize]) -> Option<usize> {
    dims.iter()
        .try_fold(1_usize, |size, &extent| size.checked_mul(extent))
}

pub fn calc_strides(dims: &Dims) -> Dims {
    let mut strides = [0; DIMS];
    let mut stride = 1;
    for (axis, &extent) in dims.iter().enumerate() {
        strides[axis] = if extent == 1 { 0 } else { stride };
        stride *= extent;
    }
    strides
}

pub fn calc_offset(strides: &[usize], pos: &[usize]) -> usize {
    strides
        .iter()
        .zip(pos)
        .map(|(stride, index)| stride * index)
        .sum()
}

/// Keeps the axes whose bit is set in `mask` and collapses the others to 1.
pub fn select_dims(mask: u32, dims: &Dims) -> Dims {
    let mut selected = singleton_dims();
    for (axis, extent) in dims.iter().enumerate() {
        if mask & (1 << axis) != 0 {
            selected[axis] = *extent;
        }
    }
    selected
}

pub fn position_from_index(dims: &Dims, mut index: usize) -> Dims {
    let mut pos = [0; DIMS];
    for (axis, &extent) in dims.iter().enumerate() {
        if extent > 1 {
            pos[axis] = index % extent;
            index /= extent;
        }
    }
    pos
}

/// Evaluates `kernel` once for every position of `dims` and stores the
/// result at the matching column-major offset of `out`.
///
/// Positions are independent, so the fill runs on the rayon thread pool.
///
/// # Panics
///
/// Panics when `out` does not hold exactly `calc_size(dims)` elements.
pub fn zsample<F>(dims: &Dims, out: &mut [Complex32], kernel: F)
where
    F: Fn(&Dims) -> Complex32 + Sync,
{
    assert_eq!(
        out.len(),
        calc_size(dims),
        "output buffer does not match the sampled shape"
    );

    out.par_iter_mut()
        .enumerate()
        .for_each(|(index, sample)| {
            let pos = position_from_index(dims, index);
            *sample = kernel(&pos);
        });
}

/// Owned complex array with its dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexArray {
    dims: Dims,
    data: Vec<Complex32>,
}

impl ComplexArray {
    pub fn zeros(dims: Dims) -> Self {
        Self {
            dims,
            data: vec![Complex32::new(0.0, 0.0); calc_size(&dims)],
        }
    }

    pub fn from_vec(dims: Dims, data: Vec<Complex32>) -> Option<Self> {
        (data.len() == calc_size(&dims)).then_some(Self { dims, data })
    }

    pub fn dims(&self) -> &Dims {
        &self.dims
    }

    pub fn data(&self) -> &[Complex32] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [Complex32] {
        &mut self.data
    }

    /// Linear index of the first sample with a NaN or infinite component.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.data
            .iter()
            .position(|sample| !sample.re.is_finite() || !sample.im.is_finite())
    }
}
