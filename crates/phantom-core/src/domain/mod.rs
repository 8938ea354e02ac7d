pub mod errors;

pub use errors::{SimuError, SimuErrorCategory, SimuResult};

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Normalized 2D sample position (image or k-space units depending on the domain).
pub type Coordinate = [f64; 2];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SampleDomain {
    #[default]
    Image,
    KSpace,
}

impl SampleDomain {
    pub const fn is_kspace(self) -> bool {
        matches!(self, Self::KSpace)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::KSpace => "k-space",
        }
    }
}

impl Display for SampleDomain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).as_str())
    }
}
