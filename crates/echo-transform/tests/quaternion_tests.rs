// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs, clippy::float_cmp)]
use core::f64::consts::FRAC_1_SQRT_2;

use echo_transform::{EulerOrder, Quat, TransformMatrix};

const EPS: f64 = 1e-9;

fn euler(x: f64, y: f64, z: f64, order: EulerOrder) -> TransformMatrix {
    let mut m = TransformMatrix::identity();
    m.set_rotation(x, y, z, order);
    m
}

fn from_quat(q: &Quat) -> TransformMatrix {
    let mut m = TransformMatrix::identity();
    m.set_rotation_from_quaternion(q);
    m
}

fn approx_eq4(a: [f64; 4], b: [f64; 4]) {
    for i in 0..4 {
        assert!((a[i] - b[i]).abs() <= EPS, "component {i}: {a:?} vs {b:?}");
    }
}

fn approx_eq16(a: [f64; 16], b: [f64; 16]) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= EPS, "index {i}: {a:?} vs {b:?}");
    }
}

#[test]
fn identity_matrix_yields_identity_quaternion() {
    let q = TransformMatrix::identity().to_quaternion();
    assert_eq!(q.to_array(), [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(q, Quat::identity());
    assert_eq!(Quat::default(), Quat::identity());
}

#[test]
fn half_turns_select_the_dominant_axis_branch() {
    let cases = [
        (euler(180.0, 0.0, 0.0, EulerOrder::Xyz), [1.0, 0.0, 0.0, 0.0]),
        (euler(0.0, 180.0, 0.0, EulerOrder::Xyz), [0.0, 1.0, 0.0, 0.0]),
        (euler(0.0, 0.0, 180.0, EulerOrder::Xyz), [0.0, 0.0, 1.0, 0.0]),
    ];
    for (m, want) in cases {
        approx_eq4(m.to_quaternion().to_array(), want);
    }
}

#[test]
fn quarter_turn_uses_the_trace_branch() {
    let q = euler(0.0, 0.0, 90.0, EulerOrder::Xyz).to_quaternion();
    approx_eq4(q.to_array(), [0.0, 0.0, FRAC_1_SQRT_2, FRAC_1_SQRT_2]);
}

#[test]
fn equal_diagonal_ties_fall_through_to_the_later_branch() {
    // trace = -1 and m00 == m11 > m22: the x branch needs a strict win, so
    // the y branch is taken.
    let mut data = TransformMatrix::identity().to_array();
    data[0] = 0.0;
    data[5] = 0.0;
    data[10] = -1.0;
    let q = TransformMatrix::from_array(data).to_quaternion();
    approx_eq4(q.to_array(), [0.0, FRAC_1_SQRT_2, 0.0, 0.0]);

    // m00 == m11 == m22 with a non-positive trace ends in the z branch.
    let q = TransformMatrix::from_array([0.0; 16]).to_quaternion();
    approx_eq4(q.to_array(), [0.0, 0.0, 0.5, 0.0]);
}

#[test]
fn matrix_quaternion_matrix_round_trip() {
    let samples = [
        (10.0, 20.0, 30.0, EulerOrder::Xyz),
        (-170.0, 45.0, 95.0, EulerOrder::Yxz),
        (80.0, -10.0, 179.0, EulerOrder::Zxy),
        (135.0, 60.0, -135.0, EulerOrder::Zyx),
        (0.5, 175.0, -60.0, EulerOrder::Yzx),
        (-90.0, 90.0, 90.0, EulerOrder::Xzy),
        (30.0, 120.0, -45.0, EulerOrder::Zyz),
    ];
    for (x, y, z, order) in samples {
        let m = euler(x, y, z, order);
        let q = m.to_quaternion();
        assert!((q.length() - 1.0).abs() <= EPS, "{order}: {q:?}");
        approx_eq16(from_quat(&q).to_array(), m.to_array());
    }
}

#[test]
fn quaternion_setter_writes_only_the_rotation_block() {
    let fill = [3.0; 16];
    let mut m = TransformMatrix::from_array(fill);
    m.set_rotation_from_quaternion(&Quat::identity());
    let e = m.to_array();
    for i in [3, 7, 11, 12, 13, 14, 15] {
        assert_eq!(e[i], 3.0, "index {i}");
    }
    assert_eq!(m.to_3x3(), [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
}

#[test]
fn non_unit_quaternions_are_not_normalized() {
    let m = from_quat(&Quat::new(0.0, 0.0, 0.0, 2.0));
    assert_eq!(m, TransformMatrix::identity());

    let scaled = from_quat(&Quat::new(2.0, 0.0, 0.0, 0.0));
    assert_eq!(scaled.to_array()[5], -7.0);
    assert_eq!(scaled.to_array()[10], -7.0);
}

#[test]
fn hamilton_product_matches_matrix_composition() {
    let a = euler(10.0, 20.0, 30.0, EulerOrder::Xyz);
    let b = euler(-40.0, 15.0, 60.0, EulerOrder::Zyx);
    let composed = a.to_quaternion() * b.to_quaternion();
    approx_eq16(from_quat(&composed).to_array(), a.multiplied(&b).to_array());

    let half = FRAC_1_SQRT_2;
    let qx = Quat::new(half, 0.0, 0.0, half);
    let qy = Quat::from([0.0, half, 0.0, half]);
    assert_ne!(qx.multiply(&qy), qy.multiply(&qx));
    assert_eq!(qx.multiply(&Quat::identity()), qx);
    assert_eq!([qx.x(), qx.y(), qx.z(), qx.w()], qx.to_array());
}

#[test]
fn apply_quaternion_composes_and_returns_a_new_pure_rotation() {
    let mut m = euler(10.0, 20.0, 30.0, EulerOrder::Xyz);
    m.set_position(5.0, 6.0, 7.0);
    let before = m;
    let delta = euler(0.0, 0.0, 90.0, EulerOrder::Xyz);

    let out = m.apply_quaternion(&delta.to_quaternion());

    assert_eq!(m, before);
    assert_eq!(out.position(), [0.0, 0.0, 0.0]);
    assert_eq!(out.to_array()[15], 1.0);
    let expected = euler(10.0, 20.0, 30.0, EulerOrder::Xyz).multiplied(&delta);
    approx_eq16(out.to_array(), expected.to_array());
}

#[test]
fn rotated_matches_applying_the_euler_quaternion() {
    let m = euler(-25.0, 40.0, 5.0, EulerOrder::Yxz);
    let delta = euler(15.0, -30.0, 45.0, EulerOrder::Zyx);
    let via_quat = m.apply_quaternion(&delta.to_quaternion());
    let via_euler = m.rotated(15.0, -30.0, 45.0, EulerOrder::Zyx);
    approx_eq16(via_euler.to_array(), via_quat.to_array());
    assert_eq!(m, euler(-25.0, 40.0, 5.0, EulerOrder::Yxz));
}

#[test]
fn rotate_mutates_and_drops_translation() {
    let mut m = TransformMatrix::translation(1.0, 2.0, 3.0);
    m.set_rotation(0.0, 45.0, 0.0, EulerOrder::Xyz);
    let expected = m.rotated(0.0, 0.0, 90.0, EulerOrder::Xyz);

    m.rotate(0.0, 0.0, 90.0, EulerOrder::Xyz);

    assert_eq!(m, expected);
    assert_eq!(m.position(), [0.0, 0.0, 0.0]);
    let want = euler(0.0, 45.0, 0.0, EulerOrder::Xyz) * euler(0.0, 0.0, 90.0, EulerOrder::Xyz);
    approx_eq16(m.to_array(), want.to_array());
}
