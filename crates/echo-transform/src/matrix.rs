// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use std::f64::consts::PI;

use tracing::{debug, trace};

use crate::error::TransformError;
use crate::euler::EulerOrder;
use crate::quat::Quat;
use crate::scalar::{clamp, degrees, radians, round};

/// `|element|` at or above which Euler extraction treats the rotation as
/// gimbal locked.
pub const GIMBAL_THRESHOLD: f64 = 0.9999999;

/// Rounded middle angle (radians) that marks the flipped ZYZ singularity.
pub const ZYZ_FLIP_RADIANS: f64 = 3.1416;

/// Decimal places used when comparing the ZYZ middle angle to
/// [`ZYZ_FLIP_RADIANS`].
pub const ZYZ_FLIP_SCALE: i32 = 4;

/// Column‑major 4×4 homogeneous transform.
///
/// - Element `m_rc` (row `r`, column `c`) lives at index `c * 4 + r`.
/// - Translation occupies indices 12, 13, 14; the top-left 3×3 block holds
///   rotation and scale.
/// - The bottom row is conventionally `(0, 0, 0, 1)`, but nothing enforces
///   it; [`TransformMatrix::from_array`] accepts any 16 values.
///
/// Mutating methods (`set_*`, [`multiply`](Self::multiply),
/// [`transform`](Self::transform), [`rotate`](Self::rotate)) take `&mut self`
/// and return it for chaining. [`multiplied`](Self::multiplied),
/// [`apply_quaternion`](Self::apply_quaternion) and
/// [`rotated`](Self::rotated) leave the receiver alone and return a new value.
///
/// # Examples
/// ```
/// use echo_transform::{EulerOrder, TransformMatrix};
/// let mut m = TransformMatrix::identity();
/// m.set_rotation(30.0, 45.0, 60.0, EulerOrder::Xyz).set_position(1.0, 2.0, 3.0);
/// let [x, y, z] = m.to_euler(EulerOrder::Xyz);
/// assert!((x - 30.0).abs() < 1e-9 && (y - 45.0).abs() < 1e-9 && (z - 60.0).abs() < 1e-9);
/// assert_eq!(m.position(), [1.0, 2.0, 3.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TransformMatrix {
    data: [f64; 16],
}

impl TransformMatrix {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0, // col 0
                0.0, 1.0, 0.0, 0.0, // col 1
                0.0, 0.0, 1.0, 0.0, // col 2
                0.0, 0.0, 0.0, 1.0, // col 3
            ],
        }
    }

    /// Creates a matrix from 16 column-major elements, verbatim.
    ///
    /// No validation: the bottom row and the orthogonality of the rotation
    /// block are the caller's business. Use `TryFrom<&[f64]>` when the element
    /// count is only known at runtime.
    pub const fn from_array(data: [f64; 16]) -> Self {
        Self { data }
    }

    /// Builds a pure translation.
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut m = Self::identity();
        m.set_position(x, y, z);
        m
    }

    /// Returns a copy of the 16 column-major elements.
    pub fn to_array(self) -> [f64; 16] {
        self.data
    }

    /// Alias for [`to_array`](Self::to_array).
    pub fn elements(&self) -> [f64; 16] {
        self.data
    }

    /// Returns elements `[0, 1, 2, 4, 5, 6, 2, 6, 10]` in that order.
    ///
    /// Slot 6 repeats element 2 instead of carrying element 8. Callers depend
    /// on this exact layout, so it is not a general 3×3 extraction.
    pub fn to_3x3(&self) -> [f64; 9] {
        let e = &self.data;
        [e[0], e[1], e[2], e[4], e[5], e[6], e[2], e[6], e[10]]
    }

    /// Translation column `(m03, m13, m23)`.
    pub fn position(&self) -> [f64; 3] {
        [self.data[12], self.data[13], self.data[14]]
    }

    /// Overwrites the translation column; nothing else is touched.
    pub fn set_position(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.data[12] = x;
        self.data[13] = y;
        self.data[14] = z;
        self
    }

    fn at(&self, row: usize, col: usize) -> f64 {
        self.data[col * 4 + row]
    }

    /// Fills the rotation block from Euler angles in degrees.
    ///
    /// Only elements 0, 1, 2, 4, 5, 6, 8, 9, 10 are written. See
    /// [`EulerOrder`] for how `x`, `y`, `z` map onto each order.
    ///
    /// [`EulerOrder::Zyz`] collapses to a single in-plane rotation when the
    /// middle angle is exactly zero or rounds (4 places, radians) to
    /// [`ZYZ_FLIP_RADIANS`]. In those cases only elements 0, 1, 4, 5 are
    /// written; 2, 6, 8, 9, 10 keep whatever the matrix held before.
    pub fn set_rotation(&mut self, x: f64, y: f64, z: f64, order: EulerOrder) -> &mut Self {
        let (sx, cx) = radians(x).sin_cos();
        let (sy, cy) = radians(y).sin_cos();
        let (sz, cz) = radians(z).sin_cos();
        let e = &mut self.data;

        match order {
            EulerOrder::Xyz => {
                let (cxcz, cxsz, sxcz, sxsz) = (cx * cz, cx * sz, sx * cz, sx * sz);
                e[0] = cy * cz;
                e[4] = -cy * sz;
                e[8] = sy;
                e[1] = cxsz + sxcz * sy;
                e[5] = cxcz - sxsz * sy;
                e[9] = -sx * cy;
                e[2] = sxsz - cxcz * sy;
                e[6] = sxcz + cxsz * sy;
                e[10] = cx * cy;
            }
            EulerOrder::Yxz => {
                let (cycz, cysz, sycz, sysz) = (cy * cz, cy * sz, sy * cz, sy * sz);
                e[0] = cycz + sysz * sx;
                e[4] = sycz * sx - cysz;
                e[8] = cx * sy;
                e[1] = cx * sz;
                e[5] = cx * cz;
                e[9] = -sx;
                e[2] = cysz * sx - sycz;
                e[6] = sysz + cycz * sx;
                e[10] = cx * cy;
            }
            EulerOrder::Zxy => {
                let (cycz, cysz, sycz, sysz) = (cy * cz, cy * sz, sy * cz, sy * sz);
                e[0] = cycz - sysz * sx;
                e[4] = -cx * sz;
                e[8] = sycz + cysz * sx;
                e[1] = cysz + sycz * sx;
                e[5] = cx * cz;
                e[9] = sysz - cycz * sx;
                e[2] = -cx * sy;
                e[6] = sx;
                e[10] = cx * cy;
            }
            EulerOrder::Zyx => {
                let (cxcz, cxsz, sxcz, sxsz) = (cx * cz, cx * sz, sx * cz, sx * sz);
                e[0] = cy * cz;
                e[4] = sxcz * sy - cxsz;
                e[8] = cxcz * sy + sxsz;
                e[1] = cy * sz;
                e[5] = sxsz * sy + cxcz;
                e[9] = cxsz * sy - sxcz;
                e[2] = -sy;
                e[6] = sx * cy;
                e[10] = cx * cy;
            }
            EulerOrder::Yzx => {
                let (cxcy, cxsy, sxcy, sxsy) = (cx * cy, cx * sy, sx * cy, sx * sy);
                e[0] = cy * cz;
                e[4] = sxsy - cxcy * sz;
                e[8] = sxcy * sz + cxsy;
                e[1] = sz;
                e[5] = cx * cz;
                e[9] = -sx * cz;
                e[2] = -sy * cz;
                e[6] = cxsy * sz + sxcy;
                e[10] = cxcy - sxsy * sz;
            }
            EulerOrder::Xzy => {
                let (cxcy, cxsy, sxcy, sxsy) = (cx * cy, cx * sy, sx * cy, sx * sy);
                e[0] = cy * cz;
                e[4] = -sz;
                e[8] = sy * cz;
                e[1] = cxcy * sz + sxsy;
                e[5] = cx * cz;
                e[9] = cxsy * sz - sxcy;
                e[2] = sxcy * sz - cxsy;
                e[6] = sx * cz;
                e[10] = sxsy * sz + cxcy;
            }
            EulerOrder::Zyz => return self.set_rotation_zyz(radians(x), radians(y), radians(z)),
        }
        self
    }

    #[allow(clippy::float_cmp)]
    fn set_rotation_zyz(&mut self, a: f64, b: f64, c: f64) -> &mut Self {
        let e = &mut self.data;

        if b == 0.0 {
            debug!(middle = b, "zyz rotation degenerates to a single z turn");
            let (s, co) = (a + c).sin_cos();
            e[0] = co;
            e[4] = -s;
            e[1] = s;
            e[5] = co;
            return self;
        }

        if round(b, ZYZ_FLIP_SCALE) == ZYZ_FLIP_RADIANS {
            debug!(middle = b, "zyz rotation degenerates to a flipped z turn");
            let (s, co) = (a - c).sin_cos();
            e[0] = -co;
            e[4] = -s;
            e[1] = -s;
            e[5] = co;
            return self;
        }

        let (sa, ca) = a.sin_cos();
        let (sb, cb) = b.sin_cos();
        let (sc, cc) = c.sin_cos();
        e[0] = ca * cb * cc - sa * sc;
        e[4] = -ca * cb * sc - sa * cc;
        e[8] = ca * sb;
        e[1] = sa * cb * cc + ca * sc;
        e[5] = ca * cc - sa * cb * sc;
        e[9] = sa * sb;
        e[2] = -sb * cc;
        e[6] = sb * sc;
        e[10] = cb;
        self
    }

    /// Fills the rotation block from a quaternion.
    ///
    /// Writes elements 0, 1, 2, 4, 5, 6, 8, 9, 10. The quaternion is not
    /// normalized, so a non-unit input yields a scaled block.
    pub fn set_rotation_from_quaternion(&mut self, q: &Quat) -> &mut Self {
        let [x, y, z, w] = q.to_array();
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, xy, xz) = (x * x2, x * y2, x * z2);
        let (yy, yz, zz) = (y * y2, y * z2, z * z2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        let e = &mut self.data;
        e[0] = 1.0 - (yy + zz);
        e[4] = xy - wz;
        e[8] = xz + wy;
        e[1] = xy + wz;
        e[5] = 1.0 - (xx + zz);
        e[9] = yz - wx;
        e[2] = xz - wy;
        e[6] = yz + wx;
        e[10] = 1.0 - (xx + yy);
        self
    }

    /// Returns `self * rhs` as a new matrix.
    ///
    /// Applied to a column vector, `rhs` acts first and `self` second.
    ///
    /// # Examples
    /// ```
    /// use echo_transform::TransformMatrix;
    /// let t = TransformMatrix::translation(1.0, 2.0, 3.0);
    /// assert_eq!(TransformMatrix::identity().multiplied(&t), t);
    /// ```
    pub fn multiplied(&self, rhs: &Self) -> Self {
        let mut out = [0.0; 16];
        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.at(row, k) * rhs.at(k, col);
                }
                out[col * 4 + row] = sum;
            }
        }
        Self::from_array(out)
    }

    /// Replaces `self` with `self * rhs`.
    pub fn multiply(&mut self, rhs: &Self) -> &mut Self {
        *self = self.multiplied(rhs);
        self
    }

    /// Alias for [`multiply`](Self::multiply).
    pub fn transform(&mut self, rhs: &Self) -> &mut Self {
        self.multiply(rhs)
    }

    /// Composes the current rotation with `q` and returns a pure rotation.
    ///
    /// The result is the identity with its rotation block set from
    /// `self.to_quaternion() * q`. Translation, scale and the bottom row of
    /// `self` do not carry over.
    pub fn apply_quaternion(&self, q: &Quat) -> Self {
        let composed = self.to_quaternion().multiply(q);
        let mut out = Self::identity();
        out.set_rotation_from_quaternion(&composed);
        out
    }

    /// Applies an Euler rotation through [`apply_quaternion`](Self::apply_quaternion).
    pub fn rotated(&self, x: f64, y: f64, z: f64, order: EulerOrder) -> Self {
        let mut delta = Self::identity();
        delta.set_rotation(x, y, z, order);
        self.apply_quaternion(&delta.to_quaternion())
    }

    /// In-place form of [`rotated`](Self::rotated).
    ///
    /// The receiver becomes the pure rotation returned by `rotated`, so any
    /// translation it held is dropped.
    pub fn rotate(&mut self, x: f64, y: f64, z: f64, order: EulerOrder) -> &mut Self {
        *self = self.rotated(x, y, z, order);
        self
    }

    /// Extracts the rotation block as a quaternion.
    ///
    /// Branches on the trace of the 3×3 block, falling back to the dominant
    /// diagonal element when the trace is not positive.
    pub fn to_quaternion(&self) -> Quat {
        let (m00, m01, m02) = (self.at(0, 0), self.at(0, 1), self.at(0, 2));
        let (m10, m11, m12) = (self.at(1, 0), self.at(1, 1), self.at(1, 2));
        let (m20, m21, m22) = (self.at(2, 0), self.at(2, 1), self.at(2, 2));
        let trace = m00 + m11 + m22;

        if trace > 0.0 {
            trace!(trace, "quaternion from trace");
            let s = 0.5 / (trace + 1.0).sqrt();
            Quat::new((m21 - m12) * s, (m02 - m20) * s, (m10 - m01) * s, 0.25 / s)
        } else if m00 > m11 && m00 > m22 {
            trace!(trace, "quaternion from dominant x");
            let s = 2.0 * (1.0 + m00 - m11 - m22).sqrt();
            Quat::new(0.25 * s, (m01 + m10) / s, (m02 + m20) / s, (m21 - m12) / s)
        } else if m11 > m22 {
            trace!(trace, "quaternion from dominant y");
            let s = 2.0 * (1.0 + m11 - m00 - m22).sqrt();
            Quat::new((m01 + m10) / s, 0.25 * s, (m12 + m21) / s, (m02 - m20) / s)
        } else {
            trace!(trace, "quaternion from dominant z");
            let s = 2.0 * (1.0 + m22 - m00 - m11).sqrt();
            Quat::new((m02 + m20) / s, (m12 + m21) / s, 0.25 * s, (m10 - m01) / s)
        }
    }

    /// Decomposes the rotation block into Euler angles in degrees.
    ///
    /// Assumes an unscaled rotation block. Near gimbal lock (the pivot element
    /// reaching [`GIMBAL_THRESHOLD`]) one angle is pinned to zero and the
    /// rotation is folded into the other.
    pub fn to_euler(&self, order: EulerOrder) -> [f64; 3] {
        let (m00, m01, m02) = (self.at(0, 0), self.at(0, 1), self.at(0, 2));
        let (m10, m11, m12) = (self.at(1, 0), self.at(1, 1), self.at(1, 2));
        let (m20, m21, m22) = (self.at(2, 0), self.at(2, 1), self.at(2, 2));

        let locked = |pivot: f64| {
            let hit = pivot.abs() >= GIMBAL_THRESHOLD;
            if hit {
                debug!(%order, pivot, "euler extraction hit gimbal lock");
            }
            hit
        };

        let (x, y, z) = match order {
            EulerOrder::Xyz => {
                let y = clamp(m02, -1.0, 1.0).asin();
                if locked(m02) {
                    (m21.atan2(m11), y, 0.0)
                } else {
                    ((-m12).atan2(m22), y, (-m01).atan2(m00))
                }
            }
            EulerOrder::Yxz => {
                let x = (-clamp(m12, -1.0, 1.0)).asin();
                if locked(m12) {
                    (x, (-m20).atan2(m00), 0.0)
                } else {
                    (x, m02.atan2(m22), m10.atan2(m11))
                }
            }
            EulerOrder::Zxy => {
                let x = clamp(m21, -1.0, 1.0).asin();
                if locked(m21) {
                    (x, 0.0, m10.atan2(m00))
                } else {
                    (x, (-m20).atan2(m22), (-m01).atan2(m11))
                }
            }
            EulerOrder::Zyx => {
                let y = (-clamp(m20, -1.0, 1.0)).asin();
                if locked(m20) {
                    (0.0, y, (-m01).atan2(m11))
                } else {
                    (m21.atan2(m22), y, m10.atan2(m00))
                }
            }
            EulerOrder::Yzx => {
                let z = clamp(m10, -1.0, 1.0).asin();
                if locked(m10) {
                    (0.0, m02.atan2(m22), z)
                } else {
                    ((-m12).atan2(m11), (-m20).atan2(m00), z)
                }
            }
            EulerOrder::Xzy => {
                let z = (-clamp(m01, -1.0, 1.0)).asin();
                if locked(m01) {
                    ((-m12).atan2(m22), 0.0, z)
                } else {
                    (m21.atan2(m11), m02.atan2(m00), z)
                }
            }
            EulerOrder::Zyz => {
                if m22 < 1.0 && m22 > -1.0 {
                    (m12.atan2(m02), m22.acos(), m21.atan2(-m20))
                } else if m22 <= -1.0 {
                    debug!(%order, pivot = m22, "euler extraction hit flipped zyz singularity");
                    ((-m10).atan2(m11), PI, 0.0)
                } else {
                    debug!(%order, pivot = m22, "euler extraction hit zyz singularity");
                    (m10.atan2(m00), 0.0, 0.0)
                }
            }
        };

        [degrees(x), degrees(y), degrees(z)]
    }
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<[f64; 16]> for TransformMatrix {
    fn from(value: [f64; 16]) -> Self {
        Self::from_array(value)
    }
}

/// Rejects any slice that does not hold exactly 16 elements; never pads or
/// truncates.
impl TryFrom<&[f64]> for TransformMatrix {
    type Error = TransformError;

    fn try_from(value: &[f64]) -> Result<Self, Self::Error> {
        let data: [f64; 16] = value
            .try_into()
            .map_err(|_| TransformError::ElementCount {
                expected: 16,
                actual: value.len(),
            })?;
        Ok(Self::from_array(data))
    }
}

impl core::ops::Mul for TransformMatrix {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiplied(&rhs)
    }
}

impl core::ops::Mul<&TransformMatrix> for TransformMatrix {
    type Output = Self;
    fn mul(self, rhs: &TransformMatrix) -> Self::Output {
        self.multiplied(rhs)
    }
}

impl core::ops::MulAssign for TransformMatrix {
    fn mul_assign(&mut self, rhs: Self) {
        self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&TransformMatrix> for TransformMatrix {
    fn mul_assign(&mut self, rhs: &TransformMatrix) {
        self.multiply(rhs);
    }
}
