// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Quaternion stored as `(x, y, z, w)`.
///
/// Rotations are expected to be unit quaternions, but nothing here
/// normalizes; a non-unit input flows through every operation unchanged.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Quat {
    data: [f64; 4],
}

impl Quat {
    /// Creates a quaternion from components, verbatim.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Returns the identity quaternion.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Vector part, X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Vector part, Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Vector part, Z component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    /// Scalar part.
    pub const fn w(&self) -> f64 {
        self.data[3]
    }

    /// Returns the quaternion as an `(x, y, z, w)` array.
    pub fn to_array(self) -> [f64; 4] {
        self.data
    }

    /// Euclidean norm of the four components.
    pub fn length(&self) -> f64 {
        let [x, y, z, w] = self.data;
        (x * x + y * y + z * z + w * w).sqrt()
    }

    /// Hamilton product of two quaternions (`self * other`).
    ///
    /// Non-commutative. When both operands are unit quaternions the result is
    /// the composed rotation and stays unit up to floating-point error.
    ///
    /// # Examples
    /// ```
    /// use echo_transform::Quat;
    /// let half = core::f64::consts::FRAC_1_SQRT_2;
    /// let about_x = Quat::new(half, 0.0, 0.0, half);
    /// let about_y = Quat::new(0.0, half, 0.0, half);
    /// assert_ne!(about_x.multiply(&about_y), about_y.multiply(&about_x));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let [ax, ay, az, aw] = self.data;
        let [bx, by, bz, bw] = other.data;

        Self::new(
            ax * bw + aw * bx + ay * bz - az * by,
            ay * bw + aw * by + az * bx - ax * bz,
            az * bw + aw * bz + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Components are taken verbatim as `(x, y, z, w)`.
impl From<[f64; 4]> for Quat {
    fn from(value: [f64; 4]) -> Self {
        Self { data: value }
    }
}

impl core::ops::Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}
