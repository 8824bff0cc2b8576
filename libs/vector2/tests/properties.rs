//! Algebraic properties checked over a fixed sample of vectors and scalars.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use config::constants::ANGLE_TOLERANCE;
use std::f32::consts::{FRAC_PI_2, PI, TAU};
use vector2::ops::*;
use vector2::Vector2;

const SAMPLES: [Vector2; 9] = [
    Vector2::new(0.0, 0.0),
    Vector2::new(1.0, 0.0),
    Vector2::new(0.0, -1.0),
    Vector2::new(3.0, 4.0),
    Vector2::new(-2.5, 7.25),
    Vector2::new(0.001, -0.002),
    Vector2::new(-13.0, -42.5),
    Vector2::new(99.5, 0.125),
    Vector2::new(-0.75, 0.33),
];

/// Finite vectors whose squared length overflows or underflows `f32`.
const EXTREMES: [Vector2; 7] = [
    Vector2::new(1e20, 1e20),
    Vector2::new(-3e30, 4e30),
    Vector2::new(3e38, -1e38),
    Vector2::new(1e-30, 0.0),
    Vector2::new(0.0, -1e-25),
    Vector2::new(3e-39, -4e-39),
    Vector2::new(-7e-24, 2e-24),
];

const SCALARS: [f32; 6] = [-3.0, -0.5, 0.25, 1.0, 2.0, 17.5];

const ANGLES: [f32; 6] = [-PI, -1.0, 0.3, 1.0, PI / 3.0, 2.5];

fn assert_close(a: Vector2, b: Vector2) {
    assert_relative_eq!(a.x, b.x, epsilon = 1e-4, max_relative = 1e-5);
    assert_relative_eq!(a.y, b.y, epsilon = 1e-4, max_relative = 1e-5);
}

fn pairs() -> impl Iterator<Item = (Vector2, Vector2)> {
    SAMPLES
        .iter()
        .flat_map(|&a| SAMPLES.iter().map(move |&b| (a, b)))
}

#[test]
fn add_is_commutative() {
    for (a, b) in pairs() {
        assert_eq!(add(a, b), add(b, a));
    }
}

#[test]
fn add_is_associative() {
    for (a, b) in pairs() {
        for &c in &SAMPLES {
            assert_close(add(add(a, b), c), add(a, add(b, c)));
        }
    }
}

#[test]
fn subtract_inverts_add() {
    for (v, w) in pairs() {
        assert_close(subtract(add(v, w), w), v);
    }
}

#[test]
fn scaling_scales_magnitude() {
    for &v in &SAMPLES {
        for &k in &SCALARS {
            assert_relative_eq!(
                magnitude(scale(v, k)),
                k.abs() * magnitude(v),
                epsilon = 1e-4,
                max_relative = 1e-5
            );
        }
    }
}

#[test]
fn magnitude_squared_matches_square_of_magnitude() {
    for &v in &SAMPLES {
        let m = magnitude(v);
        assert_relative_eq!(magnitude_squared(v), m * m, epsilon = 1e-6, max_relative = 1e-5);
    }
}

#[test]
fn normalized_vectors_have_unit_length() {
    for &v in SAMPLES.iter().filter(|v| **v != Vector2::ZERO) {
        let n = normalize(v).unwrap();
        assert_relative_eq!(magnitude(n), 1.0, epsilon = 1e-5);
    }
}

#[test]
fn distance_is_symmetric() {
    for (a, b) in pairs() {
        assert_relative_eq!(distance(a, b), distance(b, a), epsilon = 1e-6);
    }
}

#[test]
fn self_dot_is_magnitude_squared() {
    for &v in &SAMPLES {
        assert_relative_eq!(dot_product(v, v), magnitude_squared(v));
    }
}

#[test]
fn rotation_preserves_length() {
    for &v in &SAMPLES {
        for &theta in &ANGLES {
            assert_relative_eq!(
                magnitude(rotate_vector(v, theta)),
                magnitude(v),
                epsilon = 1e-4,
                max_relative = 1e-5
            );
        }
    }
}

#[test]
fn rotation_by_zero_or_full_turn_is_identity() {
    for &v in &SAMPLES {
        assert_eq!(rotate_vector(v, 0.0), v);
        assert_close(rotate_vector(v, TAU), v);
    }
}

#[test]
fn rotation_round_trips() {
    for &v in &SAMPLES {
        for &theta in &ANGLES {
            assert_close(rotate_vector(rotate_vector(v, theta), -theta), v);
        }
    }
}

#[test]
fn cross_product_is_anticommutative() {
    for (a, b) in pairs() {
        assert_eq!(cross_product(a, b), -cross_product(b, a));
    }
}

#[test]
fn angle_between_stays_in_range() {
    for (a, b) in pairs().filter(|(a, b)| *a != Vector2::ZERO && *b != Vector2::ZERO) {
        let angle = angle_between(a, b).unwrap();
        assert!((0.0..=PI).contains(&angle), "{angle} out of range for {a} / {b}");
        assert_abs_diff_eq!(angle, signed_angle(a, b).unwrap().abs(), epsilon = ANGLE_TOLERANCE);
    }
}

#[test]
fn extreme_vectors_normalize_to_unit_length() {
    for &v in &EXTREMES {
        let n = normalize(v).unwrap_or_else(|e| panic!("{v}: {e}"));
        assert_relative_eq!(magnitude(n), 1.0, epsilon = 1e-5);
        assert_eq!(n.x.signum(), v.x.signum(), "{v} flipped x");
        assert_eq!(n.y.signum(), v.y.signum(), "{v} flipped y");
    }
}

#[test]
fn extreme_vectors_project_onto_themselves() {
    for &v in &EXTREMES {
        let p = project_vector(v, v).unwrap_or_else(|e| panic!("{v}: {e}"));
        assert_relative_eq!(p.x, v.x, epsilon = 0.0, max_relative = 1e-5);
        assert_relative_eq!(p.y, v.y, epsilon = 0.0, max_relative = 1e-5);
    }
}

#[test]
fn extreme_vectors_have_well_defined_angles() {
    for &v in &EXTREMES {
        assert_abs_diff_eq!(angle_between(v, v).unwrap(), 0.0, epsilon = ANGLE_TOLERANCE);
        assert_abs_diff_eq!(
            angle_between(v, perpendicular(v)).unwrap(),
            FRAC_PI_2,
            epsilon = ANGLE_TOLERANCE
        );
        assert_abs_diff_eq!(
            signed_angle(v, perpendicular(v)).unwrap(),
            FRAC_PI_2,
            epsilon = ANGLE_TOLERANCE
        );
        for &w in &EXTREMES {
            let angle = angle_between(v, w).unwrap_or_else(|e| panic!("{v} / {w}: {e}"));
            assert!((0.0..=PI).contains(&angle));
        }
    }
}
