// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! echo-transform: rigid-transform math for Echo.
//!
//! The crate centers on [`TransformMatrix`], a column-major 4×4 homogeneous
//! matrix that can be built from translations, Euler angles in any of the
//! supported [`EulerOrder`]s, or a [`Quat`], composed by multiplication, and
//! converted back to Euler angles or a quaternion.
//!
//! All scalars are `f64`. Angles cross the public API in degrees; quaternions
//! are `(x, y, z, w)` with `w` as the scalar part.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::use_self
)]

mod error;
mod euler;
mod matrix;
mod quat;
/// Scalar helpers: angle-unit conversion, clamping, and decimal rounding.
pub mod scalar;

pub use error::{Result, TransformError};
pub use euler::EulerOrder;
pub use matrix::{TransformMatrix, GIMBAL_THRESHOLD, ZYZ_FLIP_RADIANS, ZYZ_FLIP_SCALE};
pub use quat::Quat;
