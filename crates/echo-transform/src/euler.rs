// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::error::TransformError;

/// Sequence of elemental-axis rotations composing an Euler rotation.
///
/// Order `ABC` builds `R = R_A · R_B · R_C` from elementary right-handed
/// rotations. For the six Tait–Bryan orders the Euler triple `(x, y, z)` holds
/// the angles about X, Y and Z whatever their position in the order. For
/// [`EulerOrder::Zyz`] the triple is positional: `x` is the first rotation
/// about Z, `y` the rotation about Y, `z` the second rotation about Z.
///
/// Tags parse case-sensitively from their upper-case names:
/// ```
/// use echo_transform::EulerOrder;
/// assert_eq!("ZYX".parse::<EulerOrder>(), Ok(EulerOrder::Zyx));
/// assert!("BAD".parse::<EulerOrder>().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum EulerOrder {
    /// X, then Y, then Z.
    #[default]
    Xyz,
    /// Y, then X, then Z.
    Yxz,
    /// Z, then X, then Y.
    Zxy,
    /// Z, then Y, then X.
    Zyx,
    /// Y, then Z, then X.
    Yzx,
    /// X, then Z, then Y.
    Xzy,
    /// Z, then Y, then Z again (proper Euler angles).
    Zyz,
}

impl EulerOrder {
    /// Every supported order.
    pub const ALL: [Self; 7] = [
        Self::Xyz,
        Self::Yxz,
        Self::Zxy,
        Self::Zyx,
        Self::Yzx,
        Self::Xzy,
        Self::Zyz,
    ];

    /// Canonical upper-case tag for the order.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xyz => "XYZ",
            Self::Yxz => "YXZ",
            Self::Zxy => "ZXY",
            Self::Zyx => "ZYX",
            Self::Yzx => "YZX",
            Self::Xzy => "XZY",
            Self::Zyz => "ZYZ",
        }
    }
}

impl fmt::Display for EulerOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EulerOrder {
    type Err = TransformError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == tag)
            .ok_or_else(|| {
                debug!(tag, "rejecting unsupported euler order");
                TransformError::UnsupportedOrder(tag.to_owned())
            })
    }
}

impl TryFrom<&str> for EulerOrder {
    type Error = TransformError;

    fn try_from(tag: &str) -> Result<Self, Self::Error> {
        tag.parse()
    }
}
