//! Constant-acceleration worked problem: estimate gravitational
//! acceleration from noisy position measurements of a falling body.
//!
//! State is [position, velocity, acceleration] with dt = 1, so
//! A = [[1, 1, 0.5], [0, 1, 1], [0, 0, 1]] and only position is observed.

use kfcore::{Kalman, Measurement};

const G: f64 = 9.81;

// Deterministic measurement perturbations, roughly ±0.35.
const NOISE: [f64; 15] = [
    0.13, -0.32, 0.07, 0.24, -0.18, 0.02, 0.35, -0.21, 0.11, -0.05, 0.28, -0.30, 0.09, 0.17,
    -0.12,
];

#[test]
fn estimates_gravity_from_position_track() {
    let mut a = [
        1.0, 1.0, 0.5, //
        0.0, 1.0, 1.0, //
        0.0, 0.0, 1.0,
    ];
    let mut x = [0.0, 0.0, 6.0]; // deliberately poor acceleration guess
    let mut b: [f64; 0] = [];
    let mut u: [f64; 0] = [];
    let mut p = [
        100.0, 0.0, 0.0, //
        0.0, 100.0, 0.0, //
        0.0, 0.0, 100.0,
    ];
    let mut q: [f64; 0] = [];
    let mut aux = [0.0; 3];
    let mut predicted_x = [0.0; 3];
    let mut temp_p = [0.0; 9];
    let mut temp_bq: [f64; 0] = [];

    let mut kf = Kalman::new(
        3,
        0,
        &mut a,
        &mut x,
        &mut b,
        &mut u,
        &mut p,
        &mut q,
        &mut aux,
        &mut predicted_x,
        &mut temp_p,
        &mut temp_bq,
    );

    let mut h = [1.0, 0.0, 0.0];
    let mut z = [0.0];
    let mut r = [0.5];
    let mut y = [0.0];
    let mut s = [0.0];
    let mut k = [0.0; 3];
    let mut m_aux = [0.0; 3];
    let mut chol = [0.0];
    let mut s_inv = [0.0];
    let mut hp = [0.0; 3];
    let mut pht = [0.0; 3];
    let mut khp = [0.0; 9];

    let mut position = Measurement::new(
        3,
        1,
        &mut h,
        &mut z,
        &mut r,
        &mut y,
        &mut s,
        &mut k,
        &mut m_aux,
        &mut chol,
        &mut s_inv,
        &mut hp,
        &mut pht,
        &mut khp,
    );

    for (step, noise) in NOISE.iter().enumerate() {
        let t = (step + 1) as f64;
        let true_position = 0.5 * G * t * t;

        kf.predict(1.0);
        position.measurement_vector_mut()[(0, 0)] = true_position + noise;
        kf.correct(&mut position);
    }

    let acceleration = kf.state()[(2, 0)];
    assert!(
        (acceleration - G).abs() < 0.5,
        "estimated acceleration {} too far from {}",
        acceleration,
        G
    );

    // Position track should be locked on as well.
    let final_position = 0.5 * G * 15.0 * 15.0;
    assert!((kf.state()[(0, 0)] - final_position).abs() < 1.0);

    // And the filter should be far more certain than it started.
    assert!(kf.covariance()[(2, 2)] < 1.0);
}

#[test]
fn fading_memory_keeps_covariance_larger() {
    // Same track driven twice, once with λ = 1 and once with λ = 0.9:
    // the fading filter must stay strictly less certain.
    let run = |lambda: f64| -> f64 {
        let mut a = [
            1.0, 1.0, 0.5, //
            0.0, 1.0, 1.0, //
            0.0, 0.0, 1.0,
        ];
        let mut x = [0.0, 0.0, 6.0];
        let mut b: [f64; 0] = [];
        let mut u: [f64; 0] = [];
        let mut p = [
            100.0, 0.0, 0.0, //
            0.0, 100.0, 0.0, //
            0.0, 0.0, 100.0,
        ];
        let mut q: [f64; 0] = [];
        let mut aux = [0.0; 3];
        let mut predicted_x = [0.0; 3];
        let mut temp_p = [0.0; 9];
        let mut temp_bq: [f64; 0] = [];

        let mut kf = Kalman::new(
            3,
            0,
            &mut a,
            &mut x,
            &mut b,
            &mut u,
            &mut p,
            &mut q,
            &mut aux,
            &mut predicted_x,
            &mut temp_p,
            &mut temp_bq,
        );

        let mut h = [1.0, 0.0, 0.0];
        let mut z = [0.0];
        let mut r = [0.5];
        let mut y = [0.0];
        let mut s = [0.0];
        let mut k = [0.0; 3];
        let mut m_aux = [0.0; 3];
        let mut chol = [0.0];
        let mut s_inv = [0.0];
        let mut hp = [0.0; 3];
        let mut pht = [0.0; 3];
        let mut khp = [0.0; 9];

        let mut position = Measurement::new(
            3,
            1,
            &mut h,
            &mut z,
            &mut r,
            &mut y,
            &mut s,
            &mut k,
            &mut m_aux,
            &mut chol,
            &mut s_inv,
            &mut hp,
            &mut pht,
            &mut khp,
        );

        for (step, noise) in NOISE.iter().enumerate() {
            let t = (step + 1) as f64;
            kf.predict(lambda);
            position.measurement_vector_mut()[(0, 0)] = 0.5 * G * t * t + noise;
            kf.correct(&mut position);
        }

        kf.covariance()[(0, 0)] + kf.covariance()[(1, 1)] + kf.covariance()[(2, 2)]
    };

    let plain = run(1.0);
    let faded = run(0.9);
    assert!(faded > plain);
}
